// ── PageText ─────────────────────────────────────────────────────────────────

/// The text of a single PDF page.
///
/// Returned by [`crate::PdfTextExtractor::extract_pages`], one per page in
/// physical page order. The text is already reassembled in reading order
/// (or content-stream order when layout sorting is disabled).
#[derive(Debug, Clone)]
pub struct PageText {
    /// Zero-based page index.
    pub index: usize,

    /// The extracted text; lines are separated by `\n`. May be empty or
    /// whitespace-only for pages without extractable text.
    pub text: String,
}

impl PageText {
    /// The one-based page number, as a reader would count pages.
    ///
    /// ```
    /// # use extracttextpdf::PageText;
    /// # let page = PageText { index: 0, text: String::new() };
    /// assert_eq!(page.number(), 1);
    /// ```
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns `true` when the page produced no text, or only whitespace.
    ///
    /// ```
    /// # use extracttextpdf::PageText;
    /// # let page = PageText { index: 0, text: " \n ".into() };
    /// assert!(page.is_blank());
    /// ```
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

use crate::layout;
use crate::{ExtractError, PageText, Result, TextConfig};
use mupdf::Document;
use std::path::Path;

// ── PdfTextExtractor ──────────────────────────────────────────────────────────

/// Entry point for text extraction from a single PDF document.
///
/// The extractor owns the parsed document for its own lifetime; MuPDF
/// resources are released when the extractor is dropped, on success and on
/// error alike. For whole batches of files, see [`crate::convert_batch`],
/// which is a sequential loop over this type.
///
/// # Creating an extractor
///
/// ```no_run
/// use extracttextpdf::{PdfTextExtractor, TextConfig};
///
/// // With the default configuration (layout sort on, pages joined by " ")
/// let e = PdfTextExtractor::from_path("paper.pdf").unwrap();
///
/// // With custom configuration
/// let cfg = TextConfig {
///     sort_by_layout: false,
///     ..Default::default()
/// };
/// let e = PdfTextExtractor::with_config("paper.pdf", cfg).unwrap();
/// ```
pub struct PdfTextExtractor {
    document: Document,
    config: TextConfig,
}

impl PdfTextExtractor {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Open a PDF from the file system with the default [`TextConfig`].
    ///
    /// Returns [`ExtractError::MissingFile`] when `path` does not reference
    /// an existing file. The existence check happens before MuPDF sees the
    /// path, so a missing file never produces a parse error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, TextConfig::default())
    }

    /// Open a PDF from the file system with a custom [`TextConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: TextConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ExtractError::MissingFile(path.to_path_buf()));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| ExtractError::InvalidPath(path.to_path_buf()))?;

        Ok(Self {
            document: Document::open(path_str)?,
            config,
        })
    }

    // ── Extraction ────────────────────────────────────────────────────────────

    /// Returns the number of pages in the document.
    pub fn page_count(&self) -> Result<usize> {
        Ok(self.document.pages()?.count())
    }

    /// Extract the text of every page, in physical page order.
    ///
    /// Each [`PageText`] holds the reassembled text of one page; a page
    /// with no extractable text yields an empty or whitespace-only string,
    /// not an error.
    pub fn extract_pages(&self) -> Result<Vec<PageText>> {
        let mut pages = Vec::new();

        for (index, page_result) in self.document.pages()?.enumerate() {
            let page = page_result?;
            let text = layout::page_text(&page, &self.config)?;
            pages.push(PageText { index, text });
        }

        Ok(pages)
    }

    /// Extract the whole document as one string: page texts in physical
    /// order, joined by [`TextConfig::page_separator`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use extracttextpdf::PdfTextExtractor;
    ///
    /// let extractor = PdfTextExtractor::from_path("paper.pdf").unwrap();
    /// let text = extractor.extract_text().unwrap();
    /// assert!(!text.is_empty());
    /// ```
    pub fn extract_text(&self) -> Result<String> {
        let pages = self.extract_pages()?;
        let texts: Vec<String> = pages.into_iter().map(|p| p.text).collect();
        Ok(texts.join(&self.config.page_separator))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the active [`TextConfig`].
    pub fn config(&self) -> &TextConfig {
        &self.config
    }
}

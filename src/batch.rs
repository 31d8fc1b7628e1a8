use crate::{PdfTextExtractor, Result, TextConfig};
use std::path::Path;

// ── Batch conversion ─────────────────────────────────────────────────────────

/// Convert a batch of PDF files to plain-text strings.
///
/// Given an ordered sequence of file paths, returns a `Vec<String>` of the
/// same length where element *i* is the extracted text of the document at
/// path *i*: page texts in physical order, joined by a single space.
///
/// Files are processed strictly sequentially, one document handle at a
/// time. There is no partial-success mode: the first failure — a missing
/// file, checked before that document is opened, or any MuPDF error —
/// aborts the whole batch and no results are returned.
///
/// # Example
///
/// ```no_run
/// use extracttextpdf::convert_batch;
///
/// let texts = convert_batch(&["a.pdf", "b.pdf"]).unwrap();
/// assert_eq!(texts.len(), 2);
/// ```
pub fn convert_batch<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    convert_batch_with_config(paths, TextConfig::default())
}

/// Same operation as [`convert_batch`], with an explicit [`TextConfig`].
pub fn convert_batch_with_config<P: AsRef<Path>>(
    paths: &[P],
    config: TextConfig,
) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(paths.len());

    for path in paths {
        let extractor = PdfTextExtractor::with_config(path, config.clone())?;
        texts.push(extractor.extract_text()?);
        // extractor (and its document handle) dropped before the next file
    }

    Ok(texts)
}

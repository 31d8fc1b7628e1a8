//! # extracttextpdf
//!
//! A Rust library for converting batches of PDF files into plain-text
//! strings, with layout-aware reading order for multi-column documents.
//!
//! ## What this crate does
//!
//! 1. **Validate input paths** — each path in a batch must reference an
//!    existing file; a missing path aborts the whole batch.
//! 2. **Extract page text** — every page is rendered to structured text by
//!    MuPDF and reassembled in geometric reading order (top-to-bottom,
//!    left-to-right), so two-column papers come out in the order a human
//!    reads them rather than content-stream order.
//! 3. **Join pages** — the per-page texts of one document are joined into a
//!    single string, pages separated by a single space.
//!
//! ## Quick example
//!
//! ```no_run
//! use extracttextpdf::convert_batch;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let texts = convert_batch(&["paper.pdf", "report.pdf"])?;
//!
//! for (i, text) in texts.iter().enumerate() {
//!     println!("document {i}: {} characters", text.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod batch;
mod extractor;
mod layout;
mod page;

pub use batch::{convert_batch, convert_batch_with_config};
pub use extractor::PdfTextExtractor;
pub use page::PageText;
// The layout module is intentionally *not* re-exported; reading-order
// assembly is an internal detail. Callers use PdfTextExtractor or the
// batch functions for all operations.

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfTextExtractor`] and the batch functions.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// When `true` (the default), text blocks on each page are reordered by
    /// geometric position — top-to-bottom, then left-to-right — instead of
    /// the order they appear in the page's content stream. This is what
    /// makes multi-column layouts read correctly.
    pub sort_by_layout: bool,

    /// Separator inserted between the texts of consecutive pages when a
    /// whole document is joined into one string. Defaults to a single
    /// space; no page-boundary marker is emitted.
    pub page_separator: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            sort_by_layout: true,
            page_separator: " ".into(),
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// An input path does not reference an existing file. Raised before the
    /// document is ever opened; aborts the whole batch.
    #[error("No such file: {}", .0.display())]
    MissingFile(PathBuf),

    /// An input path is not valid UTF-8 and cannot be handed to MuPDF's
    /// open-by-path call.
    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The underlying MuPDF library failed while opening or reading a
    /// document. Propagated untranslated.
    #[error("PDF error: {0}")]
    PdfError(#[from] mupdf::Error),

    /// A filesystem I/O error occurred outside the PDF library.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ExtractError>;

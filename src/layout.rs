use crate::{Result, TextConfig};
use mupdf::{Page, TextPageFlags};
use std::cmp::Ordering;

// ── Reading-order assembly ────────────────────────────────────────────────────
//
// This is an internal module.  Callers use PdfTextExtractor, which delegates
// here for every page.

/// Render one page to structured text and reassemble it as a plain string.
///
/// MuPDF yields text blocks in content-stream order, which for multi-column
/// layouts interleaves the columns. When [`TextConfig::sort_by_layout`] is
/// on, blocks are reordered by their bounding box — ascending `y0` (page
/// coordinates grow downward, so this is top-to-bottom), then ascending
/// `x0` — which restores human reading order. With the sort off, blocks are
/// emitted exactly as the content stream produced them.
///
/// Lines within a block keep their MuPDF order; each line is terminated
/// with `\n`.
pub(crate) fn page_text(page: &Page, config: &TextConfig) -> Result<String> {
    let text_page = page.to_text_page(TextPageFlags::empty())?;

    let mut blocks: Vec<_> = text_page.blocks().collect();

    if config.sort_by_layout {
        blocks.sort_by(|a, b| {
            let (ra, rb) = (a.bounds(), b.bounds());
            ra.y0
                .partial_cmp(&rb.y0)
                .unwrap_or(Ordering::Equal)
                .then(ra.x0.partial_cmp(&rb.x0).unwrap_or(Ordering::Equal))
        });
    }

    let mut out = String::new();
    for block in blocks {
        for line in block.lines() {
            let line_text: String = line
                .chars()
                .map(|c| c.char().unwrap_or('\u{FFFD}'))
                .collect();
            out.push_str(&line_text);
            out.push('\n');
        }
    }

    Ok(out)
}

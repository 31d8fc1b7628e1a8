//! CLI that prints per-page text statistics for a single PDF.
//!
//! Usage:
//!   cargo run --example page_texts -- paper.pdf
//!   cargo run --example page_texts -- paper.pdf --raw   (content-stream order)

use extracttextpdf::{PdfTextExtractor, TextConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf> [--raw]", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    let raw_order = args.contains(&"--raw".to_string());

    let config = TextConfig {
        sort_by_layout: !raw_order,
        ..Default::default()
    };

    let extractor = PdfTextExtractor::with_config(pdf_path, config).unwrap_or_else(|e| {
        eprintln!("Cannot open PDF: {e}");
        process::exit(1);
    });

    let pages = extractor.extract_pages().unwrap_or_else(|e| {
        eprintln!("Extraction failed: {e}");
        process::exit(1);
    });

    println!(
        "{pdf_path}: {} page(s), {} order",
        pages.len(),
        if raw_order { "content-stream" } else { "reading" }
    );

    for page in &pages {
        if page.is_blank() {
            println!("  page {:>3}: (blank)", page.number());
        } else {
            println!(
                "  page {:>3}: {} characters, {} line(s)",
                page.number(),
                page.text.len(),
                page.text.lines().count()
            );
        }
    }
}

//! Minimal CLI that converts a batch of PDFs and reports the result sizes.
//!
//! Usage:
//!   cargo run --example convert_batch -- paper.pdf
//!   cargo run --example convert_batch -- a.pdf b.pdf c.pdf

use extracttextpdf::convert_batch;
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file>...", args[0]);
        process::exit(1);
    }

    let paths = &args[1..];
    println!("Converting {} file(s)", paths.len());

    let texts = convert_batch(paths).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {e}");
        process::exit(1);
    });

    for (path, text) in paths.iter().zip(&texts) {
        println!("✓ {path}: {} characters", text.len());

        // Show the first line as a sanity check.
        if let Some(first_line) = text.lines().find(|l| !l.trim().is_empty()) {
            println!("    {first_line}");
        }
    }
}

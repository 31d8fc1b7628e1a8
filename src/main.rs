//! CLI tool for batch-converting PDF files to plain text.
//!
//! This binary demonstrates the capabilities of the extracttextpdf crate:
//! each PDF named on the command line is converted to a single plain-text
//! string in reading order and printed to stdout.

use extracttextpdf::{convert_batch, Result};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let pdf_paths = &args[1..];

    match run_conversion(pdf_paths) {
        Ok(()) => eprintln!("\n✅ Converted {} file(s) successfully!", pdf_paths.len()),
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage(program_name: &str) {
    println!("📄 extracttextpdf - PDF to Plain Text Conversion Tool");
    println!();
    println!("USAGE:");
    println!("    {} <pdf_file>...", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <pdf_file>...  One or more PDF files to convert");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help     Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} paper.pdf", program_name);
    println!("    {} chapter1.pdf chapter2.pdf chapter3.pdf", program_name);
    println!();
    println!("This tool will:");
    println!("  • Check that every input file exists (a missing file aborts the batch)");
    println!("  • Extract each page's text in reading order (multi-column aware)");
    println!("  • Print each document's text to stdout, pages joined by a space");
}

fn run_conversion(pdf_paths: &[String]) -> Result<()> {
    eprintln!("🔍 Converting {} PDF file(s)", pdf_paths.len());
    eprintln!("{}", "─".repeat(60));

    let texts = convert_batch(pdf_paths)?;

    for (path, text) in pdf_paths.iter().zip(&texts) {
        eprintln!("📄 {} — {} characters", path, text.len());
        println!("{text}");
    }

    Ok(())
}

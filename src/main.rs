//! CLI entry point for the book folding chart generator

use bookfold::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> bookfold::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

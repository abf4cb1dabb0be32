//! CLI entry point for the tile-assembly level generator

use clap::Parser;
use sokotiles::io::cli::{Cli, LevelProcessor};
use std::process::ExitCode;

// Seed and failure diagnostics go to stderr; the level itself goes to stdout
#[allow(clippy::print_stderr, clippy::print_stdout)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = LevelProcessor::new(cli);
    let seed = processor.seed();
    eprintln!("seed: {seed}");

    match processor.process() {
        Ok(level) => {
            print!("{level}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("generation failed (seed {seed}): {error}");
            ExitCode::FAILURE
        }
    }
}

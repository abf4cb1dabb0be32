//! Command-line interface for generating a single level

use crate::algorithm::assembler::{AssemblyConfig, GridAssembler, LeftCheck};
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{
    DEFAULT_BORDER_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_PNG_SCALE,
    DEFAULT_RETRY_BUDGET,
};
use crate::io::error::Result;
use crate::io::image::export_level_as_png;
use crate::io::library::TileLibrary;
use crate::io::progress::ProgressManager;
use crate::io::render::{compose, render_text};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sokotiles")]
#[command(
    author,
    version,
    about = "Assemble a Sokoban-style level from a library of bordered tiles"
)]
/// Command-line arguments for the level generator
pub struct Cli {
    /// Random seed for reproducible generation (drawn from entropy if omitted)
    #[arg(value_name = "SEED")]
    pub seed: Option<u64>,

    /// Tile library file (uses the bundled library if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Level width in tiles
    #[arg(short, long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Level height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Sampling attempts allowed per cell
    #[arg(short, long, default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retries: usize,

    /// Border rows compared between neighbors and stripped when rendering
    #[arg(short, long, default_value_t = DEFAULT_BORDER_WIDTH)]
    pub border_width: usize,

    /// Check the left border against the left neighbor instead of the right one
    #[arg(long)]
    pub corrected_left_check: bool,

    /// Also export the level as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixels per level cell in the PNG image
    #[arg(long, default_value_t = DEFAULT_PNG_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Placement parameters selected on the command line
    pub const fn assembly_config(&self) -> AssemblyConfig {
        AssemblyConfig {
            width: self.width,
            height: self.height,
            border_width: self.border_width,
            retry_budget: self.retries,
            left_check: if self.corrected_left_check {
                LeftCheck::Corrected
            } else {
                LeftCheck::AsObserved
            },
        }
    }
}

/// Runs one generation from parsed arguments
///
/// The seed is fixed on construction so it can be reported even when the
/// run fails.
pub struct LevelProcessor {
    cli: Cli,
    rng: RandomSource,
}

impl LevelProcessor {
    /// Create a processor, drawing a seed from entropy if none was given
    pub fn new(cli: Cli) -> Self {
        let rng = RandomSource::new(cli.seed);
        Self { cli, rng }
    }

    /// Seed driving this run
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate the level and return its rendered text
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be loaded, the configuration is
    /// invalid, a cell exhausts its retry budget, or the PNG export fails
    pub fn process(&mut self) -> Result<String> {
        let library = match &self.cli.library {
            Some(path) => TileLibrary::from_path(path)?,
            None => TileLibrary::builtin()?,
        };
        let config = self.cli.assembly_config();
        let mut assembler = GridAssembler::new(&library, config)?;

        let cell_count = config.width * config.height;
        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(cell_count)
        } else {
            ProgressManager::hidden(cell_count)
        };

        loop {
            match assembler.place_next(&mut self.rng) {
                Ok(Some(placement)) => {
                    progress.cell_placed(placement.row, placement.col, placement.attempts);
                }
                Ok(None) => break,
                Err(error) => {
                    progress.finish();
                    return Err(error);
                }
            }
        }
        progress.finish();

        let assembly = assembler.into_assembly(self.seed());
        let composite = compose(&assembly.grid, config.border_width)?;

        if let Some(path) = &self.cli.png {
            export_level_as_png(&composite, self.cli.scale, path)?;
        }

        Ok(render_text(&composite))
    }
}

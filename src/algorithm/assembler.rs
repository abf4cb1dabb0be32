//! Row-major tile placement with a bounded retry budget per cell
//!
//! Each cell samples a library tile, orients it at random and tests its
//! borders against the already-resolved neighbors. The first candidate that
//! passes is committed. When the budget runs out the whole run fails: placed
//! cells are never revisited, so this is a greedy stochastic search rather
//! than a complete constraint solver.

use crate::algorithm::matcher::compatible;
use crate::algorithm::random::RandomSource;
use crate::io::configuration::{
    DEFAULT_BORDER_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_RETRY_BUDGET,
    MAX_GRID_DIMENSION,
};
use crate::io::error::{LevelError, Result, invalid_parameter, malformed_library};
use crate::io::library::TileLibrary;
use crate::spatial::grid::{Grid, PlacedTile};
use crate::spatial::tiles::{Direction, Orientation, Tile};
use ndarray::Array2;

/// Which neighbor the fourth acceptance check reads
///
/// The established generator compares a candidate's left border with the
/// *right* neighbor's right border. Levels generated with a given seed depend
/// on that, so it stays the default; the corrected predicate reads the left
/// neighbor instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeftCheck {
    /// Left border against the right neighbor's right border
    #[default]
    AsObserved,
    /// Left border against the left neighbor's right border
    Corrected,
}

/// Parameters controlling grid size and the placement search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Level width in tiles
    pub width: usize,
    /// Level height in tiles
    pub height: usize,
    /// Rows read from each side when comparing borders
    pub border_width: usize,
    /// Sampling attempts allowed per cell
    pub retry_budget: usize,
    /// Predicate used for the fourth border check
    pub left_check: LeftCheck,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            retry_budget: DEFAULT_RETRY_BUDGET,
            left_check: LeftCheck::AsObserved,
        }
    }
}

impl AssemblyConfig {
    /// Check the configuration against tiles of side `tile_side`
    ///
    /// # Errors
    ///
    /// Returns an error if a grid dimension is zero or too large, the retry
    /// budget is zero, or the border is wider than the tiles
    pub fn validate(&self, tile_side: usize) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.retry_budget == 0 {
            return Err(invalid_parameter(
                "retry_budget",
                &self.retry_budget,
                &"at least one attempt per cell is required",
            ));
        }
        if self.border_width > tile_side {
            return Err(invalid_parameter(
                "border_width",
                &self.border_width,
                &format!("exceeds the tile side of {tile_side}"),
            ));
        }
        Ok(())
    }
}

/// The four tiles surrounding a cell, blank where absent
#[derive(Clone, Copy, Debug)]
pub struct Neighborhood<'a> {
    /// Tile above
    pub top: &'a Tile,
    /// Tile to the right
    pub right: &'a Tile,
    /// Tile below
    pub bottom: &'a Tile,
    /// Tile to the left
    pub left: &'a Tile,
}

impl<'a> Neighborhood<'a> {
    /// Resolve the neighbors of `(row, col)`
    pub fn around(grid: &'a Grid, row: usize, col: usize) -> Self {
        Self {
            top: grid.neighbor_of(row, col, Direction::Top),
            right: grid.neighbor_of(row, col, Direction::Right),
            bottom: grid.neighbor_of(row, col, Direction::Bottom),
            left: grid.neighbor_of(row, col, Direction::Left),
        }
    }
}

/// Whether `candidate` may be placed among `neighbors`
pub fn accepts(
    candidate: &Tile,
    neighbors: &Neighborhood<'_>,
    border_width: usize,
    left_check: LeftCheck,
) -> bool {
    let b = border_width;
    let left_reference = match left_check {
        LeftCheck::AsObserved => neighbors.right,
        LeftCheck::Corrected => neighbors.left,
    };

    compatible(&candidate.right(b), &neighbors.right.left(b).opposite())
        && compatible(&candidate.top(b), &neighbors.top.bottom(b).opposite())
        && compatible(&candidate.bottom(b), &neighbors.bottom.top(b).opposite())
        && compatible(&candidate.left(b), &left_reference.right(b).opposite())
}

/// One sampling attempt, in draw order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Row of the cell being filled
    pub row: usize,
    /// Column of the cell being filled
    pub col: usize,
    /// Library index drawn
    pub tile_index: usize,
    /// Orientation drawn
    pub orientation: Orientation,
    /// Whether the candidate was committed
    pub accepted: bool,
}

/// Outcome of filling one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPlacement {
    /// Row of the filled cell
    pub row: usize,
    /// Column of the filled cell
    pub col: usize,
    /// Attempts spent, including the accepted one
    pub attempts: usize,
}

/// A fully populated grid together with its search history
#[derive(Clone, Debug)]
pub struct Assembly {
    /// The completed grid
    pub grid: Grid,
    /// Attempts spent per cell
    pub attempts: Array2<usize>,
    /// Every sampling attempt in the order it was drawn
    pub samples: Vec<Sample>,
    /// Seed of the random source used
    pub seed: u64,
}

impl Assembly {
    /// Sum of attempts over every cell
    pub fn total_attempts(&self) -> usize {
        self.attempts.sum()
    }
}

/// Fills a grid cell by cell in row-major order
pub struct GridAssembler<'a> {
    library: &'a TileLibrary,
    config: AssemblyConfig,
    grid: Grid,
    attempts: Array2<usize>,
    samples: Vec<Sample>,
    next_cell: usize,
}

impl<'a> GridAssembler<'a> {
    /// Prepare an empty grid for `library`
    ///
    /// # Errors
    ///
    /// Returns an error if the library is empty or the configuration is invalid
    pub fn new(library: &'a TileLibrary, config: AssemblyConfig) -> Result<Self> {
        if library.is_empty() {
            return Err(malformed_library(&"library contains no tiles"));
        }
        config.validate(library.tile_side())?;

        Ok(Self {
            library,
            config,
            grid: Grid::new(config.width, config.height, library.tile_side()),
            attempts: Array2::zeros((config.height, config.width)),
            samples: Vec::new(),
            next_cell: 0,
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Grid filled so far
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Attempts recorded so far
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Cell that the next call to `place_next` will fill
    pub const fn next_cell(&self) -> Option<(usize, usize)> {
        if self.next_cell < self.config.width * self.config.height {
            Some((
                self.next_cell / self.config.width,
                self.next_cell % self.config.width,
            ))
        } else {
            None
        }
    }

    /// Whether every cell has been filled
    pub const fn is_complete(&self) -> bool {
        self.next_cell().is_none()
    }

    /// Fill the next cell
    ///
    /// Draws tile index, rotation count and flip count, in that order, per
    /// attempt. Returns `Ok(None)` once the grid is complete.
    ///
    /// # Errors
    ///
    /// Returns `RetryExhausted` if no candidate passes within the retry budget
    pub fn place_next(&mut self, rng: &mut RandomSource) -> Result<Option<CellPlacement>> {
        let Some((row, col)) = self.next_cell() else {
            return Ok(None);
        };
        let neighbors = Neighborhood::around(&self.grid, row, col);

        for attempt in 1..=self.config.retry_budget {
            let (tile_index, base) = rng
                .choose_index(self.library.len())
                .and_then(|index| self.library.get(index).map(|tile| (index, tile)))
                .ok_or_else(|| malformed_library(&"library contains no tiles"))?;
            let (candidate, orientation) = base.randomize(rng);
            let accepted = accepts(
                &candidate,
                &neighbors,
                self.config.border_width,
                self.config.left_check,
            );

            self.samples.push(Sample {
                row,
                col,
                tile_index,
                orientation,
                accepted,
            });

            if accepted {
                self.grid.place(
                    row,
                    col,
                    PlacedTile {
                        tile: candidate,
                        source_index: tile_index,
                        orientation,
                    },
                )?;
                if let Some(count) = self.attempts.get_mut((row, col)) {
                    *count = attempt;
                }
                self.next_cell += 1;
                return Ok(Some(CellPlacement {
                    row,
                    col,
                    attempts: attempt,
                }));
            }
        }

        Err(LevelError::RetryExhausted {
            row,
            col,
            attempts: self.config.retry_budget,
            seed: rng.seed(),
        })
    }

    /// Fill every remaining cell
    ///
    /// # Errors
    ///
    /// Returns `RetryExhausted` for the first cell that cannot be filled
    pub fn assemble(mut self, rng: &mut RandomSource) -> Result<Assembly> {
        while self.place_next(rng)?.is_some() {}
        Ok(self.into_assembly(rng.seed()))
    }

    /// Hand over the grid and history gathered so far
    pub fn into_assembly(self, seed: u64) -> Assembly {
        Assembly {
            grid: self.grid,
            attempts: self.attempts,
            samples: self.samples,
            seed,
        }
    }
}

/// Assemble a level in one call
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a cell exhausts its
/// retry budget
pub fn assemble(
    library: &TileLibrary,
    config: AssemblyConfig,
    rng: &mut RandomSource,
) -> Result<Assembly> {
    GridAssembler::new(library, config)?.assemble(rng)
}

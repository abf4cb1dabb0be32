//! Level grid holding one placed tile per cell
//!
//! Cells are filled at most once. Neighbor lookups never fail: anything
//! outside the grid or not yet placed resolves to the canonical blank tile,
//! which every border accepts.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{Direction, Orientation, Tile};
use ndarray::Array2;

/// A library tile committed to a grid cell in a specific orientation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    /// The oriented tile
    pub tile: Tile,
    /// Index of the source tile in the library
    pub source_index: usize,
    /// Orientation applied to the source tile
    pub orientation: Orientation,
}

/// Dense `height × width` map from cell coordinates to placed tiles
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Option<PlacedTile>>,
    blank: Tile,
}

impl Grid {
    /// Create an empty grid for tiles of side `tile_side`
    pub fn new(width: usize, height: usize, tile_side: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
            blank: Tile::blank(tile_side),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of populated cells
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell is populated
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The canonical all-blank tile
    pub const fn blank_tile(&self) -> &Tile {
        &self.blank
    }

    /// Placed tile at `(row, col)`, if any
    pub fn get(&self, row: usize, col: usize) -> Option<&PlacedTile> {
        self.cells.get((row, col)).and_then(Option::as_ref)
    }

    /// Tile at signed coordinates, or the blank tile when absent
    pub fn neighbor(&self, row: isize, col: isize) -> &Tile {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return &self.blank;
        };
        self.get(row, col).map_or(&self.blank, |placed| &placed.tile)
    }

    /// Tile adjacent to `(row, col)` on the given side
    pub fn neighbor_of(&self, row: usize, col: usize, direction: Direction) -> &Tile {
        let (d_row, d_col) = direction.offset();
        let (Ok(row), Ok(col)) = (isize::try_from(row), isize::try_from(col)) else {
            return &self.blank;
        };
        self.neighbor(row + d_row, col + d_col)
    }

    /// Commit a tile to an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the grid or already populated
    pub fn place(&mut self, row: usize, col: usize, placed: PlacedTile) -> Result<()> {
        let (height, width) = self.cells.dim();
        let slot = self.cells.get_mut((row, col)).ok_or_else(|| {
            invalid_parameter(
                "cell",
                &format!("({row}, {col})"),
                &format!("outside the {width}x{height} grid"),
            )
        })?;
        if slot.is_some() {
            return Err(invalid_parameter(
                "cell",
                &format!("({row}, {col})"),
                &"cell is already populated",
            ));
        }
        *slot = Some(placed);
        Ok(())
    }

    /// Iterate populated cells as `((row, col), tile)` in row-major order
    pub fn placed(&self) -> impl Iterator<Item = ((usize, usize), &PlacedTile)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(index, cell)| cell.as_ref().map(|placed| (index, placed)))
    }
}

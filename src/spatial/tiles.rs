//! Square symbol tiles and their orientation algebra
//!
//! Tiles are value objects: every transformation returns a new tile and the
//! source is never touched. A 90° clockwise rotation is expressed as a
//! mirror (row reversal) followed by a transpose, and every border is read as
//! the leading rows of a rotated view, so all four sides share one extraction.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::symbol::Symbol;
use ndarray::{Array2, ArrayView2, s};
use rand::Rng;
use std::fmt;

/// One of the four tile sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Side facing row 0
    Top,
    /// Side reached by one clockwise quarter turn
    Right,
    /// Side reached by two clockwise quarter turns
    Bottom,
    /// Side reached by three clockwise quarter turns
    Left,
}

impl Direction {
    /// All sides in rotation order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Clockwise quarter turns that bring this side to the top
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Grid offset `(row, col)` of the neighbor on this side
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// The facing side
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// Rotation and flip counts applied to a library tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Clockwise quarter turns (0..4)
    pub rotation: u8,
    /// Vertical flips applied after rotating (0..2)
    pub flip: u8,
}

impl Orientation {
    /// Number of distinct rotation/flip pairs
    pub const COUNT: usize = 8;

    /// Build an orientation, reducing both counts to their canonical range
    pub const fn new(rotation: u8, flip: u8) -> Self {
        Self {
            rotation: rotation % 4,
            flip: flip % 2,
        }
    }

    /// Draw an orientation: rotation count first, then flip count
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rotation = rng.random_range(0..4u8);
        let flip = rng.random_range(0..2u8);
        Self { rotation, flip }
    }

    /// Apply this orientation to a tile
    pub fn apply(self, tile: &Tile) -> Tile {
        tile.rotate_clockwise(usize::from(self.rotation))
            .flip(usize::from(self.flip))
    }
}

/// Leading rows of a tile seen from one side
///
/// Row 0 is the outermost row of that side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    cells: Array2<Symbol>,
}

impl Border {
    /// Wrap a patch of cells as a border
    pub const fn new(cells: Array2<Symbol>) -> Self {
        Self { cells }
    }

    /// A border made only of `Blank`
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self::new(Array2::from_elem((rows, cols), Symbol::Blank))
    }

    /// Rotate the patch by 180°: reverse the row order and every row
    ///
    /// Aligns a neighbor's inward-facing side with a candidate's outward-facing
    /// side before comparison.
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::new(self.cells.slice(s![..;-1, ..;-1]).to_owned())
    }

    /// Patch shape as `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Underlying cells
    pub const fn cells(&self) -> &Array2<Symbol> {
        &self.cells
    }

    /// Whether every cell is `Blank`
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|symbol| symbol.is_blank())
    }
}

/// An immutable square grid of symbols
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    cells: Array2<Symbol>,
}

impl Tile {
    /// Wrap a square, non-empty array as a tile
    ///
    /// # Errors
    ///
    /// Returns an error if the array is empty or not square
    pub fn new(cells: Array2<Symbol>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols {
            return Err(invalid_parameter(
                "tile",
                &format!("{rows}x{cols}"),
                &"tiles must be square and non-empty",
            ));
        }
        Ok(Self { cells })
    }

    /// Build a tile from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length or the result is not square
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Result<Self> {
        let side = rows.len();
        if rows.iter().any(|row| row.len() != side) {
            return Err(invalid_parameter(
                "tile",
                &format!("{side} rows"),
                &"every row must be as long as the tile is tall",
            ));
        }
        let flat: Vec<Symbol> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((side, side), flat).map_err(|e| {
            invalid_parameter("tile", &format!("{side} rows"), &e.to_string())
        })?;
        Self::new(cells)
    }

    /// A tile with every cell set to `symbol`
    ///
    /// A zero side is raised to one so the result is always a valid tile.
    pub fn filled(side: usize, symbol: Symbol) -> Self {
        Self {
            cells: Array2::from_elem((side.max(1), side.max(1)), symbol),
        }
    }

    /// The canonical all-`Blank` tile used for missing neighbors
    pub fn blank(side: usize) -> Self {
        Self::filled(side, Symbol::Blank)
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Underlying cells
    pub const fn cells(&self) -> &Array2<Symbol> {
        &self.cells
    }

    /// Symbol at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        self.cells.get((row, col)).copied()
    }

    /// Reverse the row order
    #[must_use]
    pub fn mirror(&self) -> Self {
        Self {
            cells: self.cells.slice(s![..;-1, ..]).to_owned(),
        }
    }

    /// Swap rows and columns
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            cells: self.cells.t().as_standard_layout().into_owned(),
        }
    }

    /// Rotate 90° clockwise `turns` times
    #[must_use]
    pub fn rotate_clockwise(&self, turns: usize) -> Self {
        (0..turns % 4).fold(self.clone(), |tile, _| tile.mirror().transpose())
    }

    /// Mirror `times` times (only parity matters)
    #[must_use]
    pub fn flip(&self, times: usize) -> Self {
        if times % 2 == 1 {
            self.mirror()
        } else {
            self.clone()
        }
    }

    /// Pick one of the eight orientations uniformly at random
    ///
    /// Draws the rotation count before the flip count.
    pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R) -> (Self, Orientation) {
        let orientation = Orientation::random(rng);
        (orientation.apply(self), orientation)
    }

    /// Leading `width` rows after turning `direction` to the top
    ///
    /// Widths beyond the side length are clamped to it.
    pub fn border(&self, direction: Direction, width: usize) -> Border {
        let rows = width.min(self.side());
        let view = self.rotate_clockwise(direction.quarter_turns());
        Border::new(view.cells.slice(s![..rows, ..]).to_owned())
    }

    /// Border facing row 0
    pub fn top(&self, width: usize) -> Border {
        self.border(Direction::Top, width)
    }

    /// Border after one clockwise quarter turn
    pub fn right(&self, width: usize) -> Border {
        self.border(Direction::Right, width)
    }

    /// Border after two clockwise quarter turns
    pub fn bottom(&self, width: usize) -> Border {
        self.border(Direction::Bottom, width)
    }

    /// Border after three clockwise quarter turns
    pub fn left(&self, width: usize) -> Border {
        self.border(Direction::Left, width)
    }

    /// Centre block left after stripping `border_width` cells from every side
    pub fn interior(&self, border_width: usize) -> ArrayView2<'_, Symbol> {
        let side = self.side();
        let start = border_width.min(side);
        let end = side.saturating_sub(border_width).max(start);
        self.cells.slice(s![start..end, start..end])
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for symbol in row {
                write!(f, "{}", symbol.library_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

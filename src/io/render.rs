//! Text rendering of assembled levels
//!
//! Borders only exist to drive placement; rendering keeps each tile's
//! interior and stitches the interiors edge to edge.

use crate::io::error::{LevelError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::symbol::Symbol;
use ndarray::{Array2, s};

/// Stitch tile interiors into one symbol grid
///
/// The interior of cell `(row, col)` lands at offset
/// `(row * interior, col * interior)`, so the result measures
/// `(height * interior) × (width * interior)`.
///
/// # Errors
///
/// Returns `IncompleteGrid` naming the first empty cell in row-major order
pub fn compose(grid: &Grid, border_width: usize) -> Result<Array2<Symbol>> {
    let interior_side = grid
        .blank_tile()
        .side()
        .saturating_sub(2 * border_width);
    let mut composite = Array2::from_elem(
        (grid.height() * interior_side, grid.width() * interior_side),
        Symbol::Blank,
    );

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let placed = grid
                .get(row, col)
                .ok_or(LevelError::IncompleteGrid { row, col })?;
            let top = row * interior_side;
            let left = col * interior_side;
            composite
                .slice_mut(s![top..top + interior_side, left..left + interior_side])
                .assign(&placed.tile.interior(border_width));
        }
    }

    Ok(composite)
}

/// Map a symbol grid to level notation, one line per row
pub fn render_text(composite: &Array2<Symbol>) -> String {
    let mut output = String::with_capacity(composite.len() + composite.nrows());
    for row in composite.rows() {
        output.extend(row.iter().map(|symbol| symbol.notation()));
        output.push('\n');
    }
    output
}

/// Compose and render in one step
///
/// # Errors
///
/// Returns `IncompleteGrid` if any cell is empty
pub fn render_level(grid: &Grid, border_width: usize) -> Result<String> {
    compose(grid, border_width).map(|composite| render_text(&composite))
}

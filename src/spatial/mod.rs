//! Spatial data structures
//!
//! This module contains:
//! - Cell symbols and their notations
//! - Tiles with their orientation algebra and borders
//! - The level grid and neighbor lookup

/// Level grid with blank-defaulting neighbor lookup
pub mod grid;
/// Cell markers
pub mod symbol;
/// Tiles, borders and orientations
pub mod tiles;

pub use grid::Grid;
pub use symbol::Symbol;
pub use tiles::{Border, Direction, Orientation, Tile};

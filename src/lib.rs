//! Seeded tile-assembly generator for Sokoban-style levels
//!
//! A library of small bordered tiles is placed cell by cell into a grid.
//! Every candidate is drawn and oriented at random, then kept only if its
//! borders agree with the tiles already around it. A fixed seed reproduces a
//! run exactly, including the failures.

/// Placement search, border matching and seeded randomness
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Symbols, tiles and the level grid
pub mod spatial;

pub use io::error::{LevelError, Result};

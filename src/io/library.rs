//! Tile library loading and validation
//!
//! A library file holds tile blocks separated by blank lines. Each block is a
//! square of equal-length lines written with single-character symbols.

use crate::io::configuration::{BUILTIN_LIBRARY, TILE_SIDE};
use crate::io::error::{LevelError, Result, malformed_library};
use crate::spatial::symbol::Symbol;
use crate::spatial::tiles::Tile;
use std::path::Path;

/// Ordered set of base tiles sharing one side length
#[derive(Clone, Debug)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
}

impl TileLibrary {
    /// Validate an in-memory tile set
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty or the tiles differ in size
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(malformed_library(&"library contains no tiles"));
        };
        let side = first.side();
        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.side() != side)
        {
            return Err(malformed_library(&format!(
                "tile {} has side {} but tile 1 has side {side}",
                index + 1,
                tile.side()
            )));
        }
        Ok(Self { tiles })
    }

    /// Parse library text
    ///
    /// # Errors
    ///
    /// Returns an error if a block uses an unknown character, is ragged or
    /// not square, or if the resulting tile set is empty or inconsistent
    pub fn parse(text: &str) -> Result<Self> {
        let mut tiles = Vec::new();
        let mut block: Vec<(usize, &str)> = Vec::new();

        for (line_index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim_end();
            if line.is_empty() {
                if !block.is_empty() {
                    tiles.push(parse_block(&block, tiles.len() + 1)?);
                    block.clear();
                }
            } else {
                block.push((line_index + 1, line));
            }
        }
        if !block.is_empty() {
            tiles.push(parse_block(&block, tiles.len() + 1)?);
        }

        Self::new(tiles)
    }

    /// Load and parse a library file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LevelError::FileSystem {
            path: path.to_path_buf(),
            operation: "read tile library",
            source: e,
        })?;
        Self::parse(&text)
    }

    /// The library bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled text does not parse or its tiles are
    /// not `TILE_SIDE` cells wide
    pub fn builtin() -> Result<Self> {
        let library = Self::parse(BUILTIN_LIBRARY)?;
        if library.tile_side() != TILE_SIDE {
            return Err(malformed_library(&format!(
                "bundled tiles are {} cells wide, expected {TILE_SIDE}",
                library.tile_side()
            )));
        }
        Ok(library)
    }

    /// Base tiles in file order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `index`
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated library
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Common side length of every tile
    pub fn tile_side(&self) -> usize {
        self.tiles.first().map_or(0, Tile::side)
    }
}

fn parse_block(lines: &[(usize, &str)], block_number: usize) -> Result<Tile> {
    let side = lines.len();
    let mut rows = Vec::with_capacity(side);

    for &(line_number, line) in lines {
        let row = line
            .chars()
            .map(|c| {
                Symbol::from_library_char(c).ok_or_else(|| {
                    malformed_library(&format!(
                        "unknown symbol '{c}' in tile {block_number} (line {line_number})"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if row.len() != side {
            return Err(malformed_library(&format!(
                "tile {block_number} is not square: line {line_number} has {} symbols, expected {side}",
                row.len()
            )));
        }
        rows.push(row);
    }

    Tile::from_rows(&rows).map_err(|e| malformed_library(&format!("tile {block_number}: {e}")))
}

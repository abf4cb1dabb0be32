//! Cell markers shared by tiles, borders and rendered levels

use std::fmt;

/// A single cell marker inside a tile
///
/// `Blank` is the "don't care" marker used along tile edges and for every
/// unconstrained neighbor at the level boundary. It matches any other symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Wildcard marker, compatible with everything
    #[default]
    Blank,
    /// Walkable floor
    Floor,
    /// Solid wall
    Wall,
    /// Box target square
    Goal,
    /// Pushable box
    Box,
    /// Player start position
    Player,
}

impl Symbol {
    /// Every symbol, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Blank,
        Self::Floor,
        Self::Wall,
        Self::Goal,
        Self::Box,
        Self::Player,
    ];

    /// Parse a tile library character
    pub const fn from_library_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(Self::Blank),
            'f' => Some(Self::Floor),
            'w' => Some(Self::Wall),
            'g' => Some(Self::Goal),
            'b' => Some(Self::Box),
            'p' => Some(Self::Player),
            _ => None,
        }
    }

    /// Character used for this symbol in tile library files
    pub const fn library_char(self) -> char {
        match self {
            Self::Blank => 'e',
            Self::Floor => 'f',
            Self::Wall => 'w',
            Self::Goal => 'g',
            Self::Box => 'b',
            Self::Player => 'p',
        }
    }

    /// Character used for this symbol in rendered level notation
    pub const fn notation(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Floor => '-',
            Self::Wall => '#',
            Self::Goal => '.',
            Self::Box => '$',
            Self::Player => '@',
        }
    }

    /// RGBA colour used when exporting a level as an image
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Blank => [0, 0, 0, 0],
            Self::Floor => [222, 214, 190, 255],
            Self::Wall => [96, 64, 48, 255],
            Self::Goal => [220, 60, 60, 255],
            Self::Box => [200, 150, 40, 255],
            Self::Player => [40, 110, 220, 255],
        }
    }

    /// Whether this is the wildcard marker
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

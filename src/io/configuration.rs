//! Generation constants and runtime configuration defaults

/// Side length of tiles in the bundled library, checked when it is loaded
pub const TILE_SIDE: usize = 5;

/// Cells stripped from each tile side before rendering
pub const DEFAULT_BORDER_WIDTH: usize = 1;

/// Sampling attempts allowed per cell before generation fails
pub const DEFAULT_RETRY_BUDGET: usize = 100;

/// Default level width in tiles
pub const DEFAULT_GRID_WIDTH: usize = 3;

/// Default level height in tiles
pub const DEFAULT_GRID_HEIGHT: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in tiles
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Pixels per level cell in PNG exports
pub const DEFAULT_PNG_SCALE: u32 = 8;

/// Tile library bundled with the binary
pub const BUILTIN_LIBRARY: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/blocks.txt"));

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

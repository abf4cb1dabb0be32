//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use sokotiles::io::configuration::{
        BUILTIN_LIBRARY, DEFAULT_BORDER_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
        DEFAULT_PNG_SCALE, DEFAULT_RETRY_BUDGET, MAX_GRID_DIMENSION, TILE_SIDE,
    };

    // Tests the default border leaves a non-empty interior
    #[test]
    fn test_border_leaves_interior() {
        assert!(TILE_SIDE > 2 * DEFAULT_BORDER_WIDTH);
        assert_eq!(TILE_SIDE - 2 * DEFAULT_BORDER_WIDTH, 3);
    }

    // Tests defaults fall inside the accepted ranges
    #[test]
    fn test_defaults_in_range() {
        assert_eq!(DEFAULT_RETRY_BUDGET, 100);
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_WIDTH));
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_GRID_HEIGHT));
        assert!(DEFAULT_PNG_SCALE > 0);
    }

    // Tests the bundled library text is present
    #[test]
    fn test_builtin_library_embedded() {
        assert!(!BUILTIN_LIBRARY.trim().is_empty());
        assert!(BUILTIN_LIBRARY.lines().next().is_some_and(|line| line.len() == TILE_SIDE));
    }
}

//! Tests for tile library parsing and validation

#[cfg(test)]
mod tests {
    use sokotiles::LevelError;
    use sokotiles::io::configuration::TILE_SIDE;
    use sokotiles::io::library::TileLibrary;
    use sokotiles::spatial::symbol::Symbol;
    use sokotiles::spatial::tiles::Tile;
    use std::io::Write;

    // Tests blocks split on blank lines, including runs of blank lines
    #[test]
    fn test_parse_blocks() {
        let text = "eee\nefe\neee\n\n\n\nwww\nwgw\nwww\n";
        let library = TileLibrary::parse(text).expect("valid library");

        assert_eq!(library.len(), 2);
        assert_eq!(library.tile_side(), 3);
        assert_eq!(library.get(0).and_then(|t| t.get(1, 1)), Some(Symbol::Floor));
        assert_eq!(library.get(1).and_then(|t| t.get(1, 1)), Some(Symbol::Goal));
        assert_eq!(library.get(1).and_then(|t| t.get(0, 0)), Some(Symbol::Wall));
    }

    // Tests CRLF line endings and trailing whitespace are tolerated
    #[test]
    fn test_parse_crlf_and_trailing_space() {
        let text = "ef \r\nfe\r\n \r\npb\r\nbp";
        let library = TileLibrary::parse(text).expect("valid library");
        assert_eq!(library.len(), 2);
        assert_eq!(library.tile_side(), 2);
        assert_eq!(library.get(1).and_then(|t| t.get(0, 0)), Some(Symbol::Player));
    }

    // Tests unknown characters are reported with their location
    #[test]
    fn test_unknown_symbol() {
        let error = TileLibrary::parse("ee\nex\n").expect_err("x is not a symbol");
        let message = error.to_string();
        assert!(matches!(error, LevelError::MalformedLibrary { .. }));
        assert!(message.contains("'x'"));
        assert!(message.contains("line 2"));
    }

    // Tests ragged and non-square blocks are rejected
    #[test]
    fn test_non_square_blocks() {
        assert!(TileLibrary::parse("eee\nee\neee\n").is_err());
        assert!(TileLibrary::parse("eee\neee\n").is_err());
    }

    // Tests empty input and mixed tile sizes fail fast
    #[test]
    fn test_empty_and_inconsistent() {
        assert!(matches!(
            TileLibrary::parse("\n\n  \n"),
            Err(LevelError::MalformedLibrary { .. })
        ));
        assert!(matches!(
            TileLibrary::parse("ee\nee\n\neee\neee\neee\n"),
            Err(LevelError::MalformedLibrary { .. })
        ));
        assert!(TileLibrary::new(Vec::new()).is_err());
        assert!(TileLibrary::new(vec![Tile::blank(3), Tile::blank(5)]).is_err());
    }

    // Tests the bundled library parses into standard-size tiles
    #[test]
    fn test_builtin_library() {
        let library = TileLibrary::builtin().expect("bundled library parses");
        assert!(!library.is_empty());
        assert_eq!(library.tile_side(), TILE_SIDE);
        assert!(library.tiles().iter().all(|t| t.side() == TILE_SIDE));
    }

    // Tests libraries load from disk and missing files report the path
    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "fff\nfwf\nfff\n").expect("write library");

        let library = TileLibrary::from_path(file.path()).expect("valid library");
        assert_eq!(library.len(), 1);

        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.txt");
        let error = TileLibrary::from_path(&missing).expect_err("file does not exist");
        assert!(matches!(error, LevelError::FileSystem { .. }));
        assert!(error.to_string().contains("missing.txt"));
    }
}

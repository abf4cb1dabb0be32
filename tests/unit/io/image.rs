//! Tests for PNG export of composed levels

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use sokotiles::LevelError;
    use sokotiles::io::image::export_level_as_png;
    use sokotiles::spatial::symbol::Symbol::{self, Blank, Floor, Wall};

    // Tests the image is written with one scaled square per cell
    #[test]
    fn test_export_creates_scaled_png() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("level.png");
        let composite = array![[Wall, Floor, Blank], [Floor, Wall, Floor]];

        export_level_as_png(&composite, 4, &path).expect("export succeeds");

        assert!(path.exists(), "PNG file should be created");
        let dimensions = image::image_dimensions(&path).expect("readable PNG");
        assert_eq!(dimensions, (12, 8));
    }

    // Tests blank cells are transparent and other cells take their symbol colour
    #[test]
    fn test_export_pixel_colors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("colors.png");
        let composite = array![[Wall, Blank]];

        export_level_as_png(&composite, 2, &path).expect("export succeeds");

        let img = image::open(&path).expect("readable PNG").to_rgba8();
        assert_eq!(img.get_pixel(1, 1).0, Wall.color());
        assert_eq!(img.get_pixel(3, 0).0[3], 0);
    }

    // Tests zero scale and empty levels are rejected before touching the disk
    #[test]
    fn test_export_rejects_degenerate_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("never.png");

        let zero_scale = export_level_as_png(&array![[Wall]], 0, &path);
        assert!(matches!(zero_scale, Err(LevelError::InvalidParameter { .. })));

        let empty: Array2<Symbol> = Array2::from_elem((0, 0), Blank);
        assert!(export_level_as_png(&empty, 4, &path).is_err());
        assert!(!path.exists());
    }
}

//! Tests for PNG drawing and export

#[cfg(test)]
mod tests {
    use hexlattice::LatticeError;
    use hexlattice::io::configuration::{BACKGROUND_COLOR, OCCUPIED_COLOR, ROBOT_COLOR};
    use hexlattice::io::image::{draw_lattice, export_lattice_as_png};
    use hexlattice::lattice::{Coordinate, Lattice};

    fn block() -> Lattice {
        let mut lattice = Lattice::new();
        for coord in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            lattice.add_tile(Coordinate::from(coord));
        }
        lattice
    }

    // Tests image size and the colors of tile, robot and background pixels
    // Verified by drawing the robot before the tiles
    #[test]
    fn test_draw_lattice_layout() {
        let Ok(img) = draw_lattice(&block()) else {
            unreachable!("Drawing a non-empty lattice should succeed");
        };

        assert_eq!(img.dimensions(), (32, 38));
        assert_eq!(img.get_pixel(0, 0).0, BACKGROUND_COLOR);
        assert_eq!(img.get_pixel(6, 6).0, OCCUPIED_COLOR);
        assert_eq!(img.get_pixel(9, 21).0, ROBOT_COLOR);
    }

    // Tests drawing refuses a lattice without tiles
    // Verified by ignoring empty lattice check
    #[test]
    fn test_draw_empty_lattice_error() {
        assert!(matches!(
            draw_lattice(&Lattice::new()),
            Err(LatticeError::EmptyLattice)
        ));
    }

    // Tests export creates missing parent directories and writes the file
    // Verified by disabling file save operation
    #[test]
    fn test_export_creates_file() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("nested").join("lattice.png");

        let result = export_lattice_as_png(&block(), &path);
        assert!(result.is_ok(), "PNG export should succeed: {result:?}");
        assert!(path.exists(), "PNG file should be created");
    }

    // Tests a tall but narrow lattice is refused once the image grows too large
    // Verified by removing the pixel limit check
    #[test]
    fn test_draw_rejects_oversized_image() {
        let mut lattice = Lattice::new();
        lattice.add_tile(Coordinate::ORIGIN);
        lattice.add_tile(Coordinate::new(0, 1_000_000));
        assert!(matches!(
            draw_lattice(&lattice),
            Err(LatticeError::InvalidParameter {
                parameter: "image",
                ..
            })
        ));

        let mut wide = Lattice::new();
        wide.add_tile(Coordinate::new(i32::MIN, 0));
        wide.add_tile(Coordinate::new(i32::MAX, 0));
        assert!(matches!(
            draw_lattice(&wide),
            Err(LatticeError::InvalidParameter {
                parameter: "raster",
                ..
            })
        ));
    }

    // Tests export of an empty lattice writes nothing
    #[test]
    fn test_export_empty_lattice_writes_nothing() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("empty.png");

        assert!(export_lattice_as_png(&Lattice::new(), &path).is_err());
        assert!(!path.exists());
    }
}

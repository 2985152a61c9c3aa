//! Tests for the square grid container and its placement mask

#[cfg(test)]
mod tests {
    use spectrafill::SpectraError;
    use spectrafill::fill::grid::{Grid, validate_size};
    use image::Rgba;
    use spectrafill::io::configuration::{BACKGROUND_RGBA, MAX_GRID_DIMENSION};

    // Tests zero and oversize grids are rejected before allocation
    // Verified by removing the upper bound check
    #[test]
    fn test_size_validation() {
        assert!(validate_size(1).is_ok());
        assert!(validate_size(MAX_GRID_DIMENSION).is_ok());

        match Grid::<u8>::new(0) {
            Err(SpectraError::InvalidArgument { parameter, value, .. }) => {
                assert_eq!(parameter, "size");
                assert_eq!(value, "0");
            }
            other => unreachable!("Expected InvalidArgument, got {other:?}"),
        }
        assert!(Grid::<u8>::new(MAX_GRID_DIMENSION + 1).is_err());
    }

    // Tests a fresh grid is default-valued with nothing placed
    // Verified by initializing the placement mask to ones
    #[test]
    fn test_new_grid_is_default() {
        let grid = Grid::<u32>::new(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert_eq!(grid.placed_count(), 0);
        assert!(grid.iter().all(|(_, &value)| value == 0));
        assert_eq!(grid.as_array().dim(), (3, 3));
    }

    // Tests placement writes the cell and records it
    // Verified by indexing the mask column-major
    #[test]
    fn test_place_records_cell() {
        let mut grid = Grid::<u32>::new(3).unwrap();
        assert!(grid.place(1, 2, 7));
        assert_eq!(grid.get(1, 2), Some(&7));
        assert!(grid.is_placed(1, 2));
        assert!(!grid.is_placed(2, 1));
        assert_eq!(grid.placed_count(), 1);
    }

    // Tests placing a default-valued color still counts as placed
    // Verified by deriving placement from non-default cells
    #[test]
    fn test_placing_default_value_is_tracked() {
        let mut grid = Grid::<u32>::new(2).unwrap();
        assert!(grid.place(0, 0, 0));
        assert_eq!(grid.placed_count(), 1);
        assert!(grid.is_placed(0, 0));
    }

    // Tests out-of-bounds writes are refused
    // Verified by clamping coordinates into range
    #[test]
    fn test_place_out_of_bounds() {
        let mut grid = Grid::<u32>::new(2).unwrap();
        assert!(!grid.place(2, 0, 1));
        assert!(!grid.place(0, 2, 1));
        assert_eq!(grid.placed_count(), 0);
        assert_eq!(grid.get(2, 0), None);
        assert!(!grid.is_placed(5, 5));
    }

    // Tests nested row export and array ownership transfer
    // Verified by transposing in to_rows
    #[test]
    fn test_to_rows_and_into_array() {
        let mut grid = Grid::<u32>::new(2).unwrap();
        grid.place(0, 1, 5);
        grid.place(1, 0, 9);
        assert_eq!(grid.to_rows(), vec![vec![0, 5], vec![9, 0]]);

        let array = grid.into_array();
        assert_eq!(array[[1, 0]], 9);
    }

    // Tests an explicit background works for colors without Default
    // Verified by allocating through Array2::default
    #[test]
    fn test_filled_with_rgba_background() {
        let background = Rgba(BACKGROUND_RGBA);
        let mut grid = Grid::filled(2, background).unwrap();
        assert_eq!(grid.placed_count(), 0);
        assert!(grid.iter().all(|(_, &color)| color == background));

        assert!(grid.place(1, 1, Rgba([255, 0, 0, 255])));
        assert_eq!(grid.get(1, 1), Some(&Rgba([255, 0, 0, 255])));
        assert_eq!(grid.get(0, 0), Some(&background));
        assert!(Grid::filled(0, background).is_err());
    }
}

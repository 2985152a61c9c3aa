//! Tests for row-by-row placement

#[cfg(test)]
mod tests {
    use spectrafill::fill::row_major::fill_row_major;

    // Tests the four-color scenario fills rows left to right
    // Verified by swapping the row and column loops
    #[test]
    fn test_four_colors_two_by_two() {
        let grid = fill_row_major(&['R', 'G', 'B', 'Y'], 2).unwrap();
        assert_eq!(grid.to_rows(), vec![vec!['R', 'G'], vec!['B', 'Y']]);
        assert_eq!(grid.placed_count(), 4);
    }

    // Tests under-supply stops mid-row and leaves the rest default
    // Verified by breaking only the inner loop on exhaustion
    #[test]
    fn test_under_supply_leaves_defaults() {
        let grid = fill_row_major(&[1, 2, 3, 4], 3).unwrap();
        assert_eq!(
            grid.to_rows(),
            vec![vec![1, 2, 3], vec![4, 0, 0], vec![0, 0, 0]]
        );
        assert_eq!(grid.placed_count(), 4);
    }

    // Tests excess colors are never placed
    // Verified by wrapping the index modulo the cell count
    #[test]
    fn test_over_supply_drops_excess() {
        let colors: Vec<u32> = (1..=10).collect();
        let grid = fill_row_major(&colors, 2).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    // Tests an empty palette yields an untouched grid
    // Verified by writing a default color when exhausted
    #[test]
    fn test_empty_colors() {
        let grid = fill_row_major::<u8>(&[], 3).unwrap();
        assert_eq!(grid.placed_count(), 0);
    }

    // Tests zero size is an invalid argument
    // Verified by returning an empty grid for size zero
    #[test]
    fn test_zero_size_rejected() {
        assert!(fill_row_major(&[1u8], 0).is_err());
    }
}

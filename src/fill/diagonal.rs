//! Anti-diagonal placement

use crate::fill::grid::Grid;
use crate::io::error::Result;
use tracing::debug;

/// Fill anti-diagonals from the top-left corner toward the bottom-right
///
/// Diagonal `d` holds the cells with `row + col == d`, visited from the
/// topmost row downward. Placement stops entirely when the colors run out.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_diagonal<C: Clone + Default>(colors: &[C], size: usize) -> Result<Grid<C>> {
    fill_diagonal_over(colors, size, C::default())
}

/// Diagonal fill onto a grid whose unplaced cells hold `background`
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_diagonal_over<C: Clone>(colors: &[C], size: usize, background: C) -> Result<Grid<C>> {
    let mut grid = Grid::filled(size, background)?;
    let mut source = colors.iter();

    'diagonals: for diagonal in 0..=2 * (size - 1) {
        for row in 0..size {
            let Some(col) = diagonal.checked_sub(row).filter(|&col| col < size) else {
                continue;
            };
            let Some(color) = source.next() else {
                break 'diagonals;
            };
            grid.place(row, col, color.clone());
        }
    }

    debug!(size, placed = grid.placed_count(), "diagonal fill complete");
    Ok(grid)
}

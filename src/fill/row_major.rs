//! Row-by-row placement

use crate::fill::grid::Grid;
use crate::io::error::Result;
use tracing::debug;

/// Fill cells `(0,0), (0,1), …, (1,0), …` until the colors run out
///
/// Surplus colors beyond `size²` are ignored.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_row_major<C: Clone + Default>(colors: &[C], size: usize) -> Result<Grid<C>> {
    fill_row_major_over(colors, size, C::default())
}

/// Row-major fill onto a grid whose unplaced cells hold `background`
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_row_major_over<C: Clone>(
    colors: &[C],
    size: usize,
    background: C,
) -> Result<Grid<C>> {
    let mut grid = Grid::filled(size, background)?;
    let mut source = colors.iter();

    'rows: for row in 0..size {
        for col in 0..size {
            let Some(color) = source.next() else {
                break 'rows;
            };
            grid.place(row, col, color.clone());
        }
    }

    debug!(size, placed = grid.placed_count(), "row-major fill complete");
    Ok(grid)
}

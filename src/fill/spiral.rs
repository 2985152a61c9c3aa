//! Clockwise inward spiral placement

use crate::fill::grid::Grid;
use crate::io::error::Result;
use std::slice::Iter;
use tracing::debug;

// Shrinking window over the unvisited part of the grid; bounds are inclusive
// and signed so they may cross when the window closes.
struct SpiralBounds {
    top: isize,
    bottom: isize,
    left: isize,
    right: isize,
}

impl SpiralBounds {
    const fn new(size: usize) -> Self {
        let last = size as isize - 1;
        Self {
            top: 0,
            bottom: last,
            left: 0,
            right: last,
        }
    }

    const fn is_open(&self) -> bool {
        self.top <= self.bottom && self.left <= self.right
    }
}

/// Fill from the outer ring inward, clockwise from the top-left corner
///
/// Each ring is swept along the top row, down the right column, back along
/// the bottom row and up the left column. Exhaustion is checked per cell, so
/// the final sweep may stop partway.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_spiral<C: Clone + Default>(colors: &[C], size: usize) -> Result<Grid<C>> {
    fill_spiral_over(colors, size, C::default())
}

/// Spiral fill onto a grid whose unplaced cells hold `background`
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_spiral_over<C: Clone>(colors: &[C], size: usize, background: C) -> Result<Grid<C>> {
    let mut grid = Grid::filled(size, background)?;
    let mut source = colors.iter();
    let mut bounds = SpiralBounds::new(size);

    while bounds.is_open() {
        for col in bounds.left..=bounds.right {
            if !place_next(&mut grid, &mut source, bounds.top, col) {
                break;
            }
        }
        bounds.top += 1;

        for row in bounds.top..=bounds.bottom {
            if !place_next(&mut grid, &mut source, row, bounds.right) {
                break;
            }
        }
        bounds.right -= 1;

        if bounds.top <= bounds.bottom {
            for col in (bounds.left..=bounds.right).rev() {
                if !place_next(&mut grid, &mut source, bounds.bottom, col) {
                    break;
                }
            }
            bounds.bottom -= 1;
        }

        if bounds.left <= bounds.right {
            for row in (bounds.top..=bounds.bottom).rev() {
                if !place_next(&mut grid, &mut source, row, bounds.left) {
                    break;
                }
            }
            bounds.left += 1;
        }
    }

    debug!(size, placed = grid.placed_count(), "spiral fill complete");
    Ok(grid)
}

// Returns false once the colors are exhausted
fn place_next<C: Clone>(
    grid: &mut Grid<C>,
    source: &mut Iter<'_, C>,
    row: isize,
    col: isize,
) -> bool {
    let Some(color) = source.next() else {
        return false;
    };
    grid.place(row as usize, col as usize, color.clone());
    true
}

//! Square color grid produced by the fill strategies
//!
//! Cells start at a background color, `C::default()` unless one is given
//! explicitly. A placement mask records which cells a strategy actually
//! wrote, so under-supplied fills can be told apart from cells whose color
//! happens to equal the background.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_argument};

/// Row-major `size × size` container of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<C> {
    cells: Array2<C>,
    placed: BitVec,
    size: usize,
}

/// Reject sizes no strategy can fill
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or exceeds [`MAX_GRID_DIMENSION`]
pub fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(invalid_argument("size", &size, &"grid size must be positive"));
    }
    if size > MAX_GRID_DIMENSION {
        return Err(invalid_argument(
            "size",
            &size,
            &format!("grid size must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

impl<C: Clone + Default> Grid<C> {
    /// Allocate a default-valued grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(size: usize) -> Result<Self> {
        Self::filled(size, C::default())
    }
}

impl<C: Clone> Grid<C> {
    /// Allocate a grid with every cell set to `background`
    ///
    /// For color types without a meaningful `Default`, such as `image::Rgba`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero or exceeds [`MAX_GRID_DIMENSION`]
    pub fn filled(size: usize, background: C) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            cells: Array2::from_elem((size, size), background),
            placed: bitvec![0; size * size],
            size,
        })
    }

    /// Write a color at `(row, col)`
    ///
    /// Returns `false` and leaves the grid untouched when the position is out of bounds.
    pub fn place(&mut self, row: usize, col: usize, color: C) -> bool {
        let Some(cell) = self.cells.get_mut([row, col]) else {
            return false;
        };
        *cell = color;
        self.placed.set(row * self.size + col, true);
        true
    }

    /// Copy out the grid as nested rows
    pub fn to_rows(&self) -> Vec<Vec<C>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl<C> Grid<C> {
    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`)
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Color at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&C> {
        self.cells.get([row, col])
    }

    /// Whether a strategy wrote the cell at `(row, col)`
    pub fn is_placed(&self, row: usize, col: usize) -> bool {
        row < self.size
            && col < self.size
            && self.placed.get(row * self.size + col).as_deref() == Some(&true)
    }

    /// Number of cells written by a strategy
    pub fn placed_count(&self) -> usize {
        self.placed.count_ones()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<C> {
        &self.cells
    }

    /// Take ownership of the underlying array
    pub fn into_array(self) -> Array2<C> {
        self.cells
    }

    /// Iterate cells in row-major order as `((row, col), color)`
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &C)> {
        self.cells.indexed_iter()
    }
}

//! Placement of ordered color sequences into square grids
//!
//! Every strategy takes a flat color slice and a side length, returns a fresh
//! grid, and stops placing once the colors run out. Unplaced cells hold
//! `C::default()`, or an explicit background through the `_over` variants
//! for color types such as `image::Rgba` that have no `Default`.

/// Anti-diagonal traversal
pub mod diagonal;
/// Grid container with placement tracking
pub mod grid;
/// Row-major traversal
pub mod row_major;
/// Clockwise inward spiral traversal
pub mod spiral;
/// Weighted Voronoi partitioning
pub mod voronoi;

pub use diagonal::{fill_diagonal, fill_diagonal_over};
pub use grid::Grid;
pub use row_major::{fill_row_major, fill_row_major_over};
pub use spiral::{fill_spiral, fill_spiral_over};
pub use voronoi::{fill_voronoi, fill_voronoi_ambient, fill_voronoi_over, fill_voronoi_seeded};

use crate::io::error::{Result, SpectraError, unknown_variant};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Selectable fill strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    /// Left to right, top to bottom
    RowMajor,
    /// Clockwise inward spiral
    Spiral,
    /// Anti-diagonals from the top-left corner
    Diagonal,
    /// Weighted Voronoi regions (randomized)
    Voronoi,
}

const STRATEGY_NAMES: &[&str] = &[
    "row-major",
    "horizontal",
    "spiral",
    "circle",
    "diagonal",
    "voronoi",
];

impl FillStrategy {
    /// Every strategy in declaration order
    pub const ALL: [Self; 4] = [Self::RowMajor, Self::Spiral, Self::Diagonal, Self::Voronoi];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::RowMajor => "row-major",
            Self::Spiral => "spiral",
            Self::Diagonal => "diagonal",
            Self::Voronoi => "voronoi",
        }
    }

    /// Whether the strategy consumes randomness
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Voronoi)
    }

    /// Run the strategy; `rng` is only drawn from by [`FillStrategy::Voronoi`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero or too large
    pub fn fill<C, R>(self, colors: &[C], size: usize, rng: &mut R) -> Result<Grid<C>>
    where
        C: Clone + Default,
        R: Rng + ?Sized,
    {
        self.fill_over(colors, size, C::default(), rng)
    }

    /// Run the strategy with `background` in every cell it leaves unplaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero or too large
    pub fn fill_over<C, R>(
        self,
        colors: &[C],
        size: usize,
        background: C,
        rng: &mut R,
    ) -> Result<Grid<C>>
    where
        C: Clone,
        R: Rng + ?Sized,
    {
        match self {
            Self::RowMajor => fill_row_major_over(colors, size, background),
            Self::Spiral => fill_spiral_over(colors, size, background),
            Self::Diagonal => fill_diagonal_over(colors, size, background),
            Self::Voronoi => fill_voronoi_over(colors, size, background, rng),
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillStrategy {
    type Err = SpectraError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-major" | "rowmajor" | "horizontal" => Ok(Self::RowMajor),
            "spiral" | "circle" => Ok(Self::Spiral),
            "diagonal" => Ok(Self::Diagonal),
            "voronoi" => Ok(Self::Voronoi),
            _ => Err(unknown_variant("strategy", s, STRATEGY_NAMES)),
        }
    }
}

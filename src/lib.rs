//! Frequency-domain color reordering and square grid fills for pattern generation
//!
//! Samples are ordered by pushing an extracted scalar through a direct
//! discrete Fourier transform and its inverse, then laid out on a square
//! grid by one of four strategies: row-major, spiral, anti-diagonal, or
//! weighted Voronoi partitioning.

#![forbid(unsafe_code)]

/// Grid container and placement strategies
pub mod fill;
/// Command-line driver, configuration, logging, and error handling
pub mod io;
/// Discrete transform, reordering, and scalar extractors
pub mod transform;

pub use fill::{FillStrategy, Grid};
pub use io::error::{Result, SpectraError};
pub use transform::{ScalarExtractor, reorder};

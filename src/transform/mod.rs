//! Frequency-domain reordering of sample sequences

/// Direct-summation forward and inverse discrete transform
pub mod dft;
/// Named scalar extractors for RGBA colors
pub mod extractors;
/// Round-trip reordering of opaque items
pub mod reorder;

pub use extractors::ScalarExtractor;
pub use reorder::{reorder, reorder_in_place, reorder_with_keys};

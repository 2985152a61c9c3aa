//! Algorithm constants and runtime configuration defaults

// Safety limits to prevent excessive memory allocation and O(N²) blowups
/// Maximum allowed grid side length
pub const MAX_GRID_DIMENSION: usize = 4096;
/// Maximum number of samples the command-line driver will reorder
pub const MAX_SAMPLE_COUNT: usize = 65_536;

// Voronoi partitioning parameters
/// Lower bound on the number of Voronoi seeds
pub const MIN_VORONOI_SEEDS: usize = 4;
/// Number of colors sharing one seed before another seed is added
pub const COLORS_PER_VORONOI_SEED: usize = 20;
/// Jitter span as a fraction of a lattice cell (0.6 of the cell = ±30%, i.e. 60% of the half-cell)
pub const VORONOI_JITTER_FRACTION: f64 = 0.6;
/// Smallest seed weight
pub const VORONOI_WEIGHT_MIN: f64 = 0.6;
/// Largest seed weight
pub const VORONOI_WEIGHT_MAX: f64 = 1.4;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 64;
/// Default scalar extractor name
pub const DEFAULT_EXTRACTOR: &str = "hue";
/// Default fill strategy name
pub const DEFAULT_STRATEGY: &str = "spiral";
/// Default synthetic palette name
pub const DEFAULT_PALETTE: &str = "random";
/// RGBA channels of cells the command-line driver leaves unplaced
pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 0];

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;

//! Weighted Voronoi partitioning
//!
//! A handful of seeds are scattered over a jittered lattice, each with its own
//! color and weight, and every cell takes the color of the seed with the
//! smallest weight-scaled squared distance. Seeds are few relative to colors
//! so regions stay large and organic.
//!
//! The layout is random. Pass a seeded generator for reproducible output;
//! [`fill_voronoi_ambient`] draws from the thread generator and differs on
//! every call.

use crate::fill::grid::Grid;
use crate::io::configuration::{
    COLORS_PER_VORONOI_SEED, MIN_VORONOI_SEEDS, VORONOI_JITTER_FRACTION, VORONOI_WEIGHT_MAX,
    VORONOI_WEIGHT_MIN,
};
use crate::io::error::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

/// A region center with its influence weight and color
#[derive(Debug, Clone, PartialEq)]
pub struct Seed<C> {
    /// Row coordinate, within `[0, size - 1]`
    pub row: f64,
    /// Column coordinate, within `[0, size - 1]`
    pub col: f64,
    /// Influence scale in `[VORONOI_WEIGHT_MIN, VORONOI_WEIGHT_MAX)`
    pub weight: f64,
    /// Color painted over the seed's region
    pub color: C,
}

impl<C> Seed<C> {
    /// Squared distance to `(row, col)` divided by the squared weight
    pub fn weighted_distance(&self, row: usize, col: usize) -> f64 {
        let dr = row as f64 - self.row;
        let dc = col as f64 - self.col;
        (dr * dr + dc * dc) / (self.weight * self.weight)
    }
}

/// Number of seeds used for `color_count` colors
///
/// At least [`MIN_VORONOI_SEEDS`], one more per [`COLORS_PER_VORONOI_SEED`]
/// colors beyond that, and never more than one per color.
pub fn seed_count(color_count: usize) -> usize {
    let n = color_count.max(1);
    n.min(MIN_VORONOI_SEEDS.max(n / COLORS_PER_VORONOI_SEED))
}

/// Lattice dimensions `(cols, rows)` hosting `seeds` seeds
pub fn lattice_shape(seeds: usize) -> (usize, usize) {
    let cols = (seeds as f64).sqrt().ceil().max(1.0) as usize;
    let rows = seeds.div_ceil(cols).max(1);
    (cols, rows)
}

/// Scatter seeds over a jittered lattice
///
/// Seed `i` starts at the center of lattice cell `(i mod cols, i div cols)`,
/// is nudged by up to 60% of the half-cell on each axis, then clamped into
/// the grid. Colors cycle through `colors`. Returns no seeds for an empty
/// color slice.
pub fn place_seeds<C, R>(colors: &[C], size: usize, rng: &mut R) -> Vec<Seed<C>>
where
    C: Clone,
    R: Rng + ?Sized,
{
    if colors.is_empty() {
        return Vec::new();
    }

    let count = seed_count(colors.len());
    let (grid_cols, grid_rows) = lattice_shape(count);
    let cell_width = size as f64 / grid_cols as f64;
    let cell_height = size as f64 / grid_rows as f64;
    let max_coordinate = size.saturating_sub(1) as f64;

    let mut seeds = Vec::with_capacity(count);
    for (i, color) in colors.iter().cycle().take(count).enumerate() {
        let lattice_col = (i % grid_cols) as f64;
        let lattice_row = (i / grid_cols) as f64;

        let center_x = lattice_col.mul_add(cell_width, cell_width * 0.5);
        let center_y = lattice_row.mul_add(cell_height, cell_height * 0.5);
        let jitter_x = (rng.random::<f64>() - 0.5) * cell_width * VORONOI_JITTER_FRACTION;
        let jitter_y = (rng.random::<f64>() - 0.5) * cell_height * VORONOI_JITTER_FRACTION;
        let weight = rng
            .random::<f64>()
            .mul_add(VORONOI_WEIGHT_MAX - VORONOI_WEIGHT_MIN, VORONOI_WEIGHT_MIN);

        let seed = Seed {
            row: (center_y + jitter_y).clamp(0.0, max_coordinate),
            col: (center_x + jitter_x).clamp(0.0, max_coordinate),
            weight,
            color: color.clone(),
        };
        trace!(index = i, row = seed.row, col = seed.col, weight, "placed seed");
        seeds.push(seed);
    }
    seeds
}

/// Index of the seed owning `(row, col)`; the first minimum wins ties
pub fn nearest_seed<C>(seeds: &[Seed<C>], row: usize, col: usize) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, seed) in seeds.iter().enumerate() {
        let value = seed.weighted_distance(row, col);
        match best {
            Some((_, best_value)) if value >= best_value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Partition the grid into weighted Voronoi regions
///
/// Every cell is placed when `colors` is non-empty; an empty slice yields an
/// all-default grid.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_voronoi<C, R>(colors: &[C], size: usize, rng: &mut R) -> Result<Grid<C>>
where
    C: Clone + Default,
    R: Rng + ?Sized,
{
    fill_voronoi_over(colors, size, C::default(), rng)
}

/// Voronoi fill onto a grid whose cells hold `background` until claimed
///
/// `background` only remains visible when `colors` is empty.
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_voronoi_over<C, R>(
    colors: &[C],
    size: usize,
    background: C,
    rng: &mut R,
) -> Result<Grid<C>>
where
    C: Clone,
    R: Rng + ?Sized,
{
    let mut grid = Grid::filled(size, background)?;
    let seeds = place_seeds(colors, size, rng);
    if seeds.is_empty() {
        debug!(size, "voronoi fill skipped, no colors");
        return Ok(grid);
    }

    for row in 0..size {
        for col in 0..size {
            if let Some(seed) = nearest_seed(&seeds, row, col).and_then(|i| seeds.get(i)) {
                grid.place(row, col, seed.color.clone());
            }
        }
    }

    debug!(size, seeds = seeds.len(), "voronoi fill complete");
    Ok(grid)
}

/// Voronoi fill driven by a fixed seed, reproducible across calls
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_voronoi_seeded<C: Clone + Default>(
    colors: &[C],
    size: usize,
    seed: u64,
) -> Result<Grid<C>> {
    let mut rng = StdRng::seed_from_u64(seed);
    fill_voronoi(colors, size, &mut rng)
}

/// Voronoi fill driven by the thread generator; output differs between calls
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or too large
pub fn fill_voronoi_ambient<C: Clone + Default>(colors: &[C], size: usize) -> Result<Grid<C>> {
    fill_voronoi(colors, size, &mut rand::rng())
}

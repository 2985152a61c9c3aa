//! Command-line driver running the reorder and fill pipeline end to end

use crate::fill::grid::validate_size;
use crate::fill::{FillStrategy, Grid};
use crate::io::configuration::{
    BACKGROUND_RGBA, DEFAULT_EXTRACTOR, DEFAULT_GRID_SIZE, DEFAULT_PALETTE, DEFAULT_SEED,
    DEFAULT_STRATEGY, MAX_SAMPLE_COUNT,
};
use crate::io::error::{Result, invalid_argument};
use crate::io::palette::Palette;
use crate::io::progress::StageProgress;
use crate::transform::{ScalarExtractor, reorder_with_keys};
use clap::Parser;
use image::Rgba;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "spectrafill")]
#[command(
    author,
    version,
    about = "Reorder a color palette through a discrete Fourier round trip and lay it out on a square grid"
)]
/// Command-line arguments for the pattern pipeline
pub struct Cli {
    /// Grid side length in cells
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of palette samples (defaults to size²)
    #[arg(short = 'c', long)]
    pub samples: Option<usize>,

    /// Fill strategy: row-major, spiral, diagonal, voronoi
    #[arg(short = 'f', long, default_value = DEFAULT_STRATEGY)]
    pub strategy: FillStrategy,

    /// Scalar extractor driving the reorder: hue, saturation, brightness, luma, red, green, blue
    #[arg(short, long, default_value = DEFAULT_EXTRACTOR)]
    pub extractor: ScalarExtractor,

    /// Synthetic palette: random, hue-sweep
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: Palette,

    /// Random seed for palette generation and Voronoi seeding
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Skip the frequency-domain reorder and fill in palette order
    #[arg(long)]
    pub no_reorder: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Effective number of palette samples
    pub fn sample_count(&self) -> usize {
        self.samples
            .unwrap_or_else(|| self.size.saturating_mul(self.size))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check argument ranges before any work starts
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the grid size or sample count is out of range
    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        let samples = self.sample_count();
        if samples > MAX_SAMPLE_COUNT {
            return Err(invalid_argument(
                "samples",
                &samples,
                &format!("at most {MAX_SAMPLE_COUNT} samples can be reordered"),
            ));
        }
        Ok(())
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Grid side length
    pub size: usize,
    /// Palette samples generated
    pub samples: usize,
    /// Strategy used for the fill
    pub strategy: FillStrategy,
    /// Extractor used for the reorder, `None` when reordering was skipped
    pub extractor: Option<ScalarExtractor>,
    /// Smallest and largest ordering keys, when at least two samples were reordered
    pub key_range: Option<(f64, f64)>,
    /// Cells written by the strategy
    pub cells_placed: usize,
    /// Distinct colors among the written cells
    pub distinct_colors: usize,
    /// Time spent reordering
    pub reorder_time: Duration,
    /// Time spent filling
    pub fill_time: Duration,
}

/// Runs palette generation, reordering, and filling for one set of arguments
pub struct Pipeline {
    cli: Cli,
    progress: StageProgress,
}

impl Pipeline {
    /// Create a pipeline for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = StageProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Arguments this pipeline was built from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Execute the pipeline and log its summary
    ///
    /// Failures are returned untouched for the caller to report.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the arguments fail validation
    pub fn run_and_report(&mut self) -> Result<RunSummary> {
        let (_grid, summary) = self.run()?;
        log_summary(&summary);
        Ok(summary)
    }

    /// Execute the pipeline and return the resulting grid with its summary
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the arguments fail validation
    pub fn run(&mut self) -> Result<(Grid<Rgba<u8>>, RunSummary)> {
        self.cli.validate()?;

        let samples = self.cli.sample_count();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        self.progress
            .start_stage("palette", format!("{samples} {} samples", self.cli.palette));
        let palette = self.cli.palette.generate(samples, &mut rng);
        debug!(samples, palette = %self.cli.palette, "generated palette");

        let reorder_start = Instant::now();
        let (ordered, extractor, key_range) = if self.cli.no_reorder {
            (palette, None, None)
        } else {
            self.progress.start_stage(
                "reorder",
                format!("{samples} samples by {}", self.cli.extractor),
            );
            let pairs = reorder_with_keys(palette, self.cli.extractor.as_fn());
            let key_range = ordering_key_range(&pairs);
            let ordered = pairs.into_iter().map(|(color, _)| color).collect();
            (ordered, Some(self.cli.extractor), key_range)
        };
        let reorder_time = reorder_start.elapsed();

        let fill_start = Instant::now();
        self.progress.start_stage(
            "fill",
            format!("{0}x{0} {1}", self.cli.size, self.cli.strategy),
        );
        let grid = self.cli.strategy.fill_over(
            &ordered,
            self.cli.size,
            Rgba(BACKGROUND_RGBA),
            &mut rng,
        )?;
        let fill_time = fill_start.elapsed();
        self.progress.finish();

        let summary = RunSummary {
            size: self.cli.size,
            samples,
            strategy: self.cli.strategy,
            extractor,
            key_range,
            cells_placed: grid.placed_count(),
            distinct_colors: distinct_placed_colors(&grid),
            reorder_time,
            fill_time,
        };
        Ok((grid, summary))
    }
}

fn ordering_key_range<T>(pairs: &[(T, Option<f64>)]) -> Option<(f64, f64)> {
    let first = pairs.first()?.1?;
    let last = pairs.last()?.1?;
    Some((first, last))
}

/// Count distinct colors among cells written by a strategy
pub fn distinct_placed_colors(grid: &Grid<Rgba<u8>>) -> usize {
    grid.iter()
        .filter(|&((row, col), _)| grid.is_placed(row, col))
        .map(|(_, color)| color.0)
        .collect::<HashSet<[u8; 4]>>()
        .len()
}

/// Log a run summary at info level
pub fn log_summary(summary: &RunSummary) {
    let extractor = summary
        .extractor
        .map_or_else(|| "none".to_string(), |e| e.to_string());
    info!(
        size = summary.size,
        samples = summary.samples,
        strategy = %summary.strategy,
        extractor = %extractor,
        placed = summary.cells_placed,
        distinct = summary.distinct_colors,
        "grid filled"
    );
    if let Some((low, high)) = summary.key_range {
        info!(low, high, "ordering key range");
    }
    info!(
        reorder_ms = summary.reorder_time.as_secs_f64() * 1000.0,
        fill_ms = summary.fill_time.as_secs_f64() * 1000.0,
        "timings"
    );
}

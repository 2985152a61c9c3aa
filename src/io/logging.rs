//! Structured logging setup for the command-line driver
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so embedding applications keep control of their output.

use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Builder;

/// Level used when neither `--quiet` nor `--verbose` is given
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Pick the base level from the verbosity flags; `quiet` wins over `verbose`
pub const fn base_level(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        DEFAULT_LEVEL
    }
}

/// Build the event filter from `RUST_LOG`, falling back to the base level
///
/// The verbosity flags only apply when `RUST_LOG` is unset or holds no valid
/// directive.
pub fn env_filter(quiet: bool, verbose: bool) -> EnvFilter {
    filter_builder(quiet, verbose).from_env_lossy()
}

/// Build the event filter from explicit directives instead of the environment
///
/// Invalid directives are skipped; an empty set falls back to the base level.
pub fn filter_from_directives(directives: &str, quiet: bool, verbose: bool) -> EnvFilter {
    filter_builder(quiet, verbose).parse_lossy(directives)
}

fn filter_builder(quiet: bool, verbose: bool) -> Builder {
    EnvFilter::builder().with_default_directive(base_level(quiet, verbose).into())
}

/// Install the global fmt subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(quiet: bool, verbose: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_target(false)
        .try_init();
    if installed.is_err() {
        debug!("subscriber already installed, keeping it");
    }
}

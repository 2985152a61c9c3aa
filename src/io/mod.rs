/// Command-line interface and pipeline driver
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Synthetic palette generation
pub mod palette;
/// Stage progress display
pub mod progress;

//! CLI entry point for the reorder and fill pipeline

use clap::Parser;
use spectrafill::io::cli::{Cli, Pipeline};
use spectrafill::io::logging;

fn main() -> spectrafill::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let mut pipeline = Pipeline::new(cli);
    pipeline.run_and_report().map(|_summary| ())
}

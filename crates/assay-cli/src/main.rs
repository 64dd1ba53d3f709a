//! Assay CLI - statistical profiler for tabular datasets.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            corr_threshold,
            z_threshold,
            iqr_multiplier,
            bins,
            delimiter,
        } => commands::analyze::run(
            file,
            output,
            corr_threshold,
            z_threshold,
            iqr_multiplier,
            bins,
            delimiter,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Hardwood CLI - NBA stat table cleaning and statistics.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            file,
            dataset,
            output,
        } => commands::clean::run(file, dataset, output, cli.verbose),

        Commands::CleanAll { dir, output } => commands::clean_all::run(dir, output, cli.verbose),

        Commands::Stats {
            file,
            dataset,
            columns,
            json,
        } => commands::stats::run(file, dataset, columns, json, cli.verbose),

        Commands::Correlate {
            file,
            dataset,
            columns,
            json,
        } => commands::correlate::run(file, dataset, columns, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

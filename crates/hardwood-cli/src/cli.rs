//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hardwood::DatasetKind;

/// Hardwood: NBA stat table cleaning and descriptive statistics
#[derive(Parser)]
#[command(name = "hardwood")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean one raw dataset file and write the cleaned CSV
    Clean {
        /// Path to the raw CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which dataset schema the file follows
        #[arg(short, long)]
        dataset: DatasetChoice,

        /// Output path for the cleaned CSV (default: <file>_CLEANED.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean every conventionally-named dataset file in a directory
    CleanAll {
        /// Directory containing the raw CSV files
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Directory for the cleaned CSVs (default: next to the inputs)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clean a dataset and print descriptive statistics
    Stats {
        /// Path to the raw CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which dataset schema the file follows
        #[arg(short, long)]
        dataset: DatasetChoice,

        /// Columns to summarize (default: the dataset's numeric columns)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clean a dataset and print a Pearson correlation matrix
    Correlate {
        /// Path to the raw CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which dataset schema the file follows
        #[arg(short, long)]
        dataset: DatasetChoice,

        /// Metric columns to correlate (default: the dataset's key metrics)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dataset schemas selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DatasetChoice {
    Teams,
    AllPlayers,
    ActivePlayers,
    PlayerCareer,
    TeamAdvanced,
    LeagueStandings,
}

impl DatasetChoice {
    pub fn kind(self) -> DatasetKind {
        match self {
            DatasetChoice::Teams => DatasetKind::Teams,
            DatasetChoice::AllPlayers => DatasetKind::AllPlayers,
            DatasetChoice::ActivePlayers => DatasetKind::ActivePlayers,
            DatasetChoice::PlayerCareer => DatasetKind::PlayerCareer,
            DatasetChoice::TeamAdvanced => DatasetKind::TeamAdvanced,
            DatasetChoice::LeagueStandings => DatasetKind::LeagueStandings,
        }
    }
}

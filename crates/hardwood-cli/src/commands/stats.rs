//! Stats command - clean a dataset and print descriptive statistics.

use std::path::PathBuf;

use colored::Colorize;
use hardwood::stats::summarize;
use hardwood::Cleaner;

use crate::cli::DatasetChoice;
use super::print_report;

pub fn run(
    file: PathBuf,
    dataset: DatasetChoice,
    columns: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let kind = dataset.kind();
    let cleaner = Cleaner::new();
    let outcome = cleaner.clean_file(&file, kind)?;

    let columns: Vec<&str> = if columns.is_empty() {
        kind.default_stat_columns()
    } else {
        columns.iter().map(String::as_str).collect()
    };
    if columns.is_empty() {
        return Err(format!(
            "{} has no default numeric columns; pass --columns",
            kind.label()
        )
        .into());
    }

    let summaries = summarize(&outcome.dataset, &columns)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if verbose {
        print_report(&outcome.report, verbose);
        println!();
    }

    println!(
        "{} {} ({} rows after cleaning)",
        "Statistics for".cyan().bold(),
        kind.label().white(),
        outcome.dataset.row_count()
    );
    println!();
    println!(
        "{:<16} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column".bold(),
        "count".bold(),
        "mean".bold(),
        "median".bold(),
        "std".bold(),
        "min".bold(),
        "max".bold(),
        "outliers".bold()
    );
    for (column, summary) in &summaries {
        println!(
            "{:<16} {:>7} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>9.1}%",
            column,
            summary.count,
            summary.mean,
            summary.median,
            summary.std_dev,
            summary.min,
            summary.max,
            summary.outlier_pct
        );
    }

    for &column in &columns {
        if !summaries.contains_key(column) {
            println!("{:<16} {}", column, "no values".yellow());
        }
    }

    Ok(())
}

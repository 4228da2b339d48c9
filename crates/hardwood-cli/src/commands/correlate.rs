//! Correlate command - clean a dataset and print a correlation matrix.

use std::path::PathBuf;

use colored::Colorize;
use hardwood::stats::correlate;
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

    let metrics: Vec<&str> = if columns.is_empty() {
        kind.default_metrics()
    } else {
        columns.iter().map(String::as_str).collect()
    };
    if metrics.len() < 2 {
        return Err(format!(
            "Correlation needs at least two metric columns; {} has no defaults, pass --columns",
            kind.label()
        )
        .into());
    }

    let matrix = correlate(&outcome.dataset, &metrics)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    if verbose {
        print_report(&outcome.report, verbose);
        println!();
    }

    println!(
        "{} {} ({} rows after cleaning)",
        "Correlations for".cyan().bold(),
        kind.label().white(),
        outcome.dataset.row_count()
    );
    println!();

    // Header row
    print!("{:<14}", "");
    for metric in &matrix.metrics {
        print!(" {:>12}", metric.bold());
    }
    println!();

    for (i, metric) in matrix.metrics.iter().enumerate() {
        print!("{:<14}", metric);
        for (j, value) in matrix.values[i].iter().enumerate() {
            if value.is_nan() {
                print!(" {:>12}", "-".yellow());
            } else {
                let cell = format!("{:>12.3}", value);
                // Strong off-diagonal correlations stand out.
                if i != j && value.abs() >= 0.7 {
                    print!(" {}", cell.white().bold());
                } else {
                    print!(" {}", cell);
                }
            }
        }
        println!();
    }

    for (a, b) in &matrix.insufficient_pairs {
        println!(
            "{} {} x {}: fewer than two paired observations",
            "insufficient".yellow(),
            a,
            b
        );
    }

    Ok(())
}

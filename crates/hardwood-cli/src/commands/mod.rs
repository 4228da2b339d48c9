//! CLI command implementations.

pub mod clean;
pub mod clean_all;
pub mod correlate;
pub mod stats;

use colored::Colorize;
use hardwood::CleaningReport;

/// Shared report summary printed by every command that cleans a file.
pub(crate) fn print_report(report: &CleaningReport, verbose: bool) {
    println!(
        "{} {} rows -> {} rows ({} dropped, {} imputed)",
        report.dataset.cyan().bold(),
        report.original_rows.to_string().white(),
        report.final_rows.to_string().white().bold(),
        report.dropped_total().to_string().yellow(),
        report.imputed_total().to_string().blue()
    );

    if report.dropped_critical_missing > 0 {
        println!(
            "  {} row(s) missing critical identifiers",
            report.dropped_critical_missing.to_string().yellow()
        );
    }
    if report.dropped_duplicates > 0 {
        println!(
            "  {} duplicate row(s)",
            report.dropped_duplicates.to_string().yellow()
        );
    }
    for (column, count) in &report.dropped_outliers {
        println!(
            "  {} outlier row(s) on '{}'",
            count.to_string().yellow(),
            column
        );
    }
    for mismatch in &report.validation_mismatches {
        println!(
            "  {} row {}: {}",
            "inconsistent".red(),
            mismatch.row,
            mismatch.message
        );
    }
    for column in &report.unresolved_columns {
        println!("  {} '{}' left unfilled (no values)", "unresolved".red(), column);
    }

    if verbose {
        for (column, count) in &report.malformed_values {
            println!("  {} malformed value(s) in '{}'", count, column);
        }
        for (column, count) in &report.imputed_values {
            println!("  {} value(s) imputed in '{}'", count, column);
        }
    }
}

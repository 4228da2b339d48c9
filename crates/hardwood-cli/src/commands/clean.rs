//! Clean command - clean one raw dataset file and write the cleaned CSV.

use std::path::PathBuf;

use colored::Colorize;
use hardwood::Cleaner;

use crate::cli::DatasetChoice;
use super::print_report;

pub fn run(
    file: PathBuf,
    dataset: DatasetChoice,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let cleaner = Cleaner::new();
    let outcome = cleaner.clean_file(&file, dataset.kind())?;

    if verbose {
        println!(
            "  {} {} ({} bytes, {})",
            "source".yellow(),
            outcome.source.hash,
            outcome.source.size_bytes,
            outcome.source.format
        );
    }

    println!();
    print_report(&outcome.report, verbose);

    let output_path = output.unwrap_or_else(|| outcome.cleaned_path());
    outcome.dataset.write_csv(&output_path)?;

    let report_path = outcome.report_path();
    outcome.report.save(&report_path)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );
    println!(
        "{} {}",
        "Report at".green().bold(),
        report_path.display().to_string().white()
    );

    Ok(())
}

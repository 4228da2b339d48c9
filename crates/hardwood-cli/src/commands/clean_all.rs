//! Clean-all command - clean every conventionally-named file in a directory.

use std::path::PathBuf;

use colored::Colorize;
use hardwood::{Cleaner, DatasetKind};

use super::print_report;

pub fn run(
    dir: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()).into());
    }
    if let Some(out_dir) = &output {
        std::fs::create_dir_all(out_dir)?;
    }

    let cleaner = Cleaner::new();
    let mut cleaned = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for kind in DatasetKind::ALL {
        let input = dir.join(kind.conventional_file());
        if !input.exists() {
            skipped += 1;
            if verbose {
                println!(
                    "{} {} (no {})",
                    "Skipping".yellow(),
                    kind.label(),
                    kind.conventional_file()
                );
            }
            continue;
        }

        println!(
            "{} {}",
            "Cleaning".cyan().bold(),
            input.display().to_string().white()
        );

        // One bad file should not stop the rest of the batch.
        let outcome = match cleaner.clean_file(&input, kind) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("{} {}: {}", "Failed".red().bold(), kind.label(), e);
                failed += 1;
                continue;
            }
        };
        print_report(&outcome.report, verbose);

        let place = |conventional: std::path::PathBuf| match &output {
            Some(out_dir) => out_dir.join(
                conventional
                    .file_name()
                    .expect("conventional paths always have a file name"),
            ),
            None => conventional,
        };

        let output_path = place(outcome.cleaned_path());
        outcome.dataset.write_csv(&output_path)?;
        outcome.report.save(place(outcome.report_path()))?;

        println!(
            "{} {}",
            "Saved to".green().bold(),
            output_path.display().to_string().white()
        );
        println!();
        cleaned += 1;
    }

    if cleaned == 0 && failed == 0 {
        return Err(format!(
            "No conventionally-named dataset files found in {}",
            dir.display()
        )
        .into());
    }

    println!(
        "{} {} dataset(s) cleaned, {} skipped, {} failed",
        "Done:".green().bold(),
        cleaned,
        skipped,
        failed
    );

    if failed > 0 {
        return Err(format!("{} dataset(s) failed to clean", failed).into());
    }

    Ok(())
}

//! Before/after accounting for a cleaning run.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{HardwoodError, Result};

/// A row that failed a dataset-specific consistency check. The row is kept;
/// this is a data-entry-error candidate, not grounds for removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMismatch {
    /// 0-based row index at validation time.
    pub row: usize,
    /// What failed.
    pub message: String,
}

/// Everything that happened to a dataset on its way through the cleaning
/// pipeline: row-count transitions, missing-value counts, and the reason for
/// every dropped row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Dataset name.
    pub dataset: String,
    /// Row count before cleaning.
    pub original_rows: usize,
    /// Row count after cleaning.
    pub final_rows: usize,
    /// Missing values per column, before cleaning.
    pub missing_before: IndexMap<String, usize>,
    /// Missing values per column, after cleaning.
    pub missing_after: IndexMap<String, usize>,
    /// Rows dropped because a critical identifier was absent.
    pub dropped_critical_missing: usize,
    /// Rows dropped as exact duplicates.
    pub dropped_duplicates: usize,
    /// Rows dropped per column by the outlier/plausibility filters.
    pub dropped_outliers: IndexMap<String, usize>,
    /// Values per column that failed format parsing and became absent.
    pub malformed_values: IndexMap<String, usize>,
    /// Values imputed per column (median, "Unknown", or "No").
    pub imputed_values: IndexMap<String, usize>,
    /// Numeric columns left absent because no values existed to take a
    /// median from.
    pub unresolved_columns: Vec<String>,
    /// Consistency-check failures (rows retained).
    pub validation_mismatches: Vec<ValidationMismatch>,
}

impl CleaningReport {
    /// Create an empty report for a dataset.
    pub fn new(dataset: impl Into<String>, original_rows: usize) -> Self {
        Self {
            dataset: dataset.into(),
            original_rows,
            ..Default::default()
        }
    }

    /// Total rows dropped by the outlier and plausibility filters.
    pub fn dropped_outliers_total(&self) -> usize {
        self.dropped_outliers.values().sum()
    }

    /// Total rows dropped for any reason.
    pub fn dropped_total(&self) -> usize {
        self.dropped_critical_missing + self.dropped_duplicates + self.dropped_outliers_total()
    }

    /// Total values imputed across all columns.
    pub fn imputed_total(&self) -> usize {
        self.imputed_values.values().sum()
    }

    fn bump(map: &mut IndexMap<String, usize>, column: &str, by: usize) {
        if by > 0 {
            *map.entry(column.to_string()).or_insert(0) += by;
        }
    }

    pub(crate) fn record_malformed(&mut self, column: &str, count: usize) {
        Self::bump(&mut self.malformed_values, column, count);
    }

    pub(crate) fn record_imputed(&mut self, column: &str, count: usize) {
        Self::bump(&mut self.imputed_values, column, count);
    }

    pub(crate) fn record_outlier_drops(&mut self, column: &str, count: usize) {
        Self::bump(&mut self.dropped_outliers, column, count);
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| HardwoodError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| HardwoodError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleaning report: {}", self.dataset)?;
        writeln!(
            f,
            "  rows: {} -> {} ({} dropped)",
            self.original_rows,
            self.final_rows,
            self.dropped_total()
        )?;
        if self.dropped_critical_missing > 0 {
            writeln!(
                f,
                "  dropped {} row(s) with missing critical identifiers",
                self.dropped_critical_missing
            )?;
        }
        if self.dropped_duplicates > 0 {
            writeln!(f, "  dropped {} duplicate row(s)", self.dropped_duplicates)?;
        }
        for (column, count) in &self.dropped_outliers {
            writeln!(f, "  dropped {} outlier row(s) on '{}'", count, column)?;
        }
        for (column, count) in &self.malformed_values {
            writeln!(f, "  {} malformed value(s) in '{}' treated as missing", count, column)?;
        }
        for (column, count) in &self.imputed_values {
            let before = self.missing_before.get(column).copied().unwrap_or(0);
            writeln!(
                f,
                "  imputed {} value(s) in '{}' ({} missing before cleaning)",
                count, column, before
            )?;
        }
        for column in &self.unresolved_columns {
            writeln!(f, "  '{}' unresolved: no values to compute a median from", column)?;
        }
        for mismatch in &self.validation_mismatches {
            writeln!(f, "  validation: row {}: {}", mismatch.row, mismatch.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let mut report = CleaningReport::new("players", 450);
        report.dropped_critical_missing = 2;
        report.dropped_duplicates = 10;
        report.record_outlier_drops("height", 3);
        report.record_outlier_drops("weight", 2);
        report.record_imputed("weight", 30);
        report.final_rows = 433;

        assert_eq!(report.dropped_outliers_total(), 5);
        assert_eq!(report.dropped_total(), 17);
        assert_eq!(report.imputed_total(), 30);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut report = CleaningReport::new("players", 100);
        report.final_rows = 95;
        report.dropped_duplicates = 3;
        report.record_outlier_drops("height", 2);
        report.record_imputed("weight", 7);
        report.unresolved_columns.push("draft_number".to_string());

        let file = tempfile::NamedTempFile::new().unwrap();
        report.save(file.path()).unwrap();
        let loaded = CleaningReport::load(file.path()).unwrap();

        assert_eq!(loaded.dataset, "players");
        assert_eq!(loaded.final_rows, 95);
        assert_eq!(loaded.dropped_outliers["height"], 2);
        assert_eq!(loaded.imputed_values["weight"], 7);
        assert_eq!(loaded.unresolved_columns, vec!["draft_number"]);
    }

    #[test]
    fn test_display_mentions_transitions() {
        let mut report = CleaningReport::new("teams", 30);
        report.final_rows = 28;
        report.dropped_duplicates = 2;
        let text = report.to_string();
        assert!(text.contains("30 -> 28"));
        assert!(text.contains("2 duplicate"));
    }
}

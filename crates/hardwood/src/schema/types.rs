//! Core type definitions for dataset schema rules.

use serde::{Deserialize, Serialize};

/// Role a column plays during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// A column whose absence makes the row unusable (e.g., a name field).
    /// Rows with an absent critical identifier are dropped, never imputed.
    CriticalIdentifier,
    /// Numeric column; absences are imputed with the column median.
    Numeric,
    /// Text column; absences are imputed with the literal "Unknown".
    Categorical,
    /// Computed from other columns (e.g., win percentage).
    Derived,
    /// Clinch-indicator column where an empty cell means "No".
    ClinchFlag,
}

/// Input format of a column's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFormat {
    /// No special parsing beyond the role's own coercion.
    Raw,
    /// Height strings like "6-7": feet and inches, converted to total inches.
    FeetDashInches,
    /// Season ranges like "2015-16": normalized to the first 4-digit year.
    SeasonYear,
}

impl Default for ColumnFormat {
    fn default() -> Self {
        ColumnFormat::Raw
    }
}

/// Case convention applied to text columns in the final formatting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    /// Title Case (default for names and cities).
    Title,
    /// UPPERCASE (team abbreviations, positions).
    Upper,
}

impl Default for TextCase {
    fn default() -> Self {
        TextCase::Title
    }
}

/// Plausibility bounds for a numeric column. Rows with a value outside the
/// bounds are dropped during the outlier stage (e.g., a win percentage
/// outside [0, 1] can only be a data-entry error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    /// Check whether a value falls inside the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|m| value >= m) && self.max.is_none_or(|m| value <= m)
    }
}

/// How a derived column is computed from other columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Derivation {
    /// numerator / denominator when the denominator is positive, else absent.
    /// Rounded to three decimal places.
    Ratio {
        numerator: String,
        denominator: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_filter_bounds() {
        let pct = RangeFilter {
            min: Some(0.0),
            max: Some(1.0),
        };
        assert!(pct.contains(0.0));
        assert!(pct.contains(0.61));
        assert!(pct.contains(1.0));
        assert!(!pct.contains(1.01));
        assert!(!pct.contains(-0.1));

        let open_top = RangeFilter {
            min: Some(1.0),
            max: None,
        };
        assert!(open_top.contains(82.0));
        assert!(!open_top.contains(0.0));
    }
}

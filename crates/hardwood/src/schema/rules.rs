//! Column rules and dataset-level cleaning configuration.

use serde::{Deserialize, Serialize};

use super::types::{ColumnFormat, ColumnRole, Derivation, RangeFilter, TextCase};

/// Cleaning rule for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Column name as it appears in the raw header.
    pub name: String,
    /// Role during cleaning.
    pub role: ColumnRole,
    /// Input format of the raw values.
    #[serde(default)]
    pub format: ColumnFormat,
    /// Case convention for the final formatting pass.
    #[serde(default)]
    pub text_case: TextCase,
    /// Whether the IQR outlier filter drops rows based on this column.
    #[serde(default)]
    pub apply_outlier_filter: bool,
    /// Optional plausibility bounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_filter: Option<RangeFilter>,
    /// How to compute the column, for `ColumnRole::Derived`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation: Option<Derivation>,
}

impl ColumnRule {
    fn new(name: impl Into<String>, role: ColumnRole) -> Self {
        Self {
            name: name.into(),
            role,
            format: ColumnFormat::Raw,
            text_case: TextCase::Title,
            apply_outlier_filter: false,
            range_filter: None,
            derivation: None,
        }
    }

    /// A critical identifier column; rows missing it are dropped.
    pub fn critical(name: impl Into<String>) -> Self {
        Self::new(name, ColumnRole::CriticalIdentifier)
    }

    /// A numeric column, median-imputed when absent.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, ColumnRole::Numeric)
    }

    /// A categorical text column, filled with "Unknown" when absent.
    pub fn categorical(name: impl Into<String>) -> Self {
        Self::new(name, ColumnRole::Categorical)
    }

    /// A clinch-indicator column, filled with "No" when absent.
    pub fn clinch(name: impl Into<String>) -> Self {
        Self::new(name, ColumnRole::ClinchFlag)
    }

    /// A derived ratio column (numerator / denominator).
    pub fn derived_ratio(
        name: impl Into<String>,
        numerator: impl Into<String>,
        denominator: impl Into<String>,
    ) -> Self {
        let mut rule = Self::new(name, ColumnRole::Derived);
        rule.derivation = Some(Derivation::Ratio {
            numerator: numerator.into(),
            denominator: denominator.into(),
        });
        rule
    }

    /// Set the input format.
    pub fn with_format(mut self, format: ColumnFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable the IQR outlier filter for this column.
    pub fn with_outlier_filter(mut self) -> Self {
        self.apply_outlier_filter = true;
        self
    }

    /// Set plausibility bounds.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.range_filter = Some(RangeFilter { min, max });
        self
    }

    /// Use UPPERCASE instead of Title Case in the formatting pass.
    pub fn upper_case(mut self) -> Self {
        self.text_case = TextCase::Upper;
        self
    }
}

/// A dataset-specific consistency check. Diagnostic only: failing rows are
/// logged in the cleaning report, never dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsistencyCheck {
    /// wins + losses must equal games played.
    WinsPlusLossesEqualGames {
        wins: String,
        losses: String,
        games: String,
    },
}

/// The full cleaning configuration for one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRules {
    /// Human-readable dataset name.
    pub name: String,
    /// Column rules, in output order. Only ruled columns are ingested;
    /// derived columns must appear after the columns they are computed from.
    pub columns: Vec<ColumnRule>,
    /// Consistency checks to run after cleaning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<ConsistencyCheck>,
}

impl DatasetRules {
    /// Create rules with the given columns and no checks.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnRule>) -> Self {
        Self {
            name: name.into(),
            columns,
            checks: Vec::new(),
        }
    }

    /// Add a consistency check.
    pub fn with_check(mut self, check: ConsistencyCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// Look up a column rule by name.
    pub fn column(&self, name: &str) -> Option<&ColumnRule> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of all critical identifier columns.
    pub fn critical_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.role == ColumnRole::CriticalIdentifier)
            .map(|c| c.name.as_str())
    }
}

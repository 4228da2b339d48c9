//! Typed table: the central entity passed between pipeline stages.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HardwoodError, Result};
use crate::input::DataTable;
use crate::schema::{ColumnRole, DatasetRules};

/// A single cell value after the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    Absent,
    /// Numeric value. Never NaN or infinite; non-finite parses become absent.
    Number(f64),
    /// Text value.
    Text(String),
}

impl Value {
    /// Returns true if the value is missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// The numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical string form, used for duplicate detection and CSV output.
    pub fn to_cell(&self) -> String {
        match self {
            Value::Absent => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

/// A table of rows sharing a fixed schema. Built once at the ingestion
/// boundary; the cleaning engine consumes it and produces a new one, and the
/// statistics engine reads the cleaned result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name (from its rules).
    pub name: String,
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset directly from columns and rows.
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Build a typed dataset from a raw table, keeping only ruled columns.
    ///
    /// Null-like cells become [`Value::Absent`]; everything else starts as
    /// trimmed text (numeric coercion happens later, in the cleaning
    /// engine's normalization step). Derived columns that are not present in
    /// the raw header are appended as all-absent. A missing critical column
    /// is an error; other missing columns are skipped.
    pub fn from_table(table: &DataTable, rules: &DatasetRules) -> Result<Self> {
        let mut columns = Vec::new();
        let mut sources: Vec<Option<usize>> = Vec::new();

        for rule in &rules.columns {
            match table.column_index(&rule.name) {
                Some(idx) => {
                    columns.push(rule.name.clone());
                    sources.push(Some(idx));
                }
                None if rule.role == ColumnRole::CriticalIdentifier => {
                    return Err(HardwoodError::MissingColumn {
                        dataset: rules.name.clone(),
                        column: rule.name.clone(),
                    });
                }
                None if rule.role == ColumnRole::Derived => {
                    columns.push(rule.name.clone());
                    sources.push(None);
                }
                None => {}
            }
        }

        if columns.is_empty() {
            return Err(HardwoodError::EmptyData(format!(
                "none of the expected columns for '{}' are present",
                rules.name
            )));
        }

        let rows = table
            .rows
            .iter()
            .map(|raw_row| {
                sources
                    .iter()
                    .map(|source| match source {
                        Some(idx) => {
                            let cell = raw_row.get(*idx).map(String::as_str).unwrap_or("");
                            if DataTable::is_null_value(cell) {
                                Value::Absent
                            } else {
                                Value::Text(cell.trim().to_string())
                            }
                        }
                        None => Value::Absent,
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            name: rules.name.clone(),
            columns,
            rows,
        })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find the index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Count absent values in a column.
    pub fn absent_count(&self, col: usize) -> usize {
        self.rows.iter().filter(|r| r[col].is_absent()).count()
    }

    /// All present numeric values of a named column, in row order.
    ///
    /// Absent values are excluded, never treated as zero.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let col = self
            .column_index(name)
            .ok_or_else(|| HardwoodError::UnknownColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .filter_map(|r| r[col].as_number())
            .collect())
    }

    /// Write the dataset as a CSV file with a header row.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Value::to_cell))?;
        }
        writer.flush().map_err(|e| HardwoodError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnRule;

    fn raw_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_from_table_marks_nulls_absent() {
        let table = raw_table(
            vec!["first_name", "weight"],
            vec![vec!["Alex", "190"], vec!["Boban", ""]],
        );
        let rules = DatasetRules::new(
            "players",
            vec![
                ColumnRule::critical("first_name"),
                ColumnRule::numeric("weight"),
            ],
        );
        let dataset = Dataset::from_table(&table, &rules).unwrap();

        assert_eq!(dataset.get(0, 1), Some(&Value::Text("190".into())));
        assert_eq!(dataset.get(1, 1), Some(&Value::Absent));
    }

    #[test]
    fn test_from_table_missing_critical_column_errors() {
        let table = raw_table(vec!["weight"], vec![vec!["190"]]);
        let rules = DatasetRules::new(
            "players",
            vec![
                ColumnRule::critical("first_name"),
                ColumnRule::numeric("weight"),
            ],
        );
        assert!(matches!(
            Dataset::from_table(&table, &rules),
            Err(HardwoodError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_from_table_skips_unruled_and_missing_optional_columns() {
        let table = raw_table(
            vec!["Unnamed: 0", "first_name"],
            vec![vec!["0", "Nikola"]],
        );
        let rules = DatasetRules::new(
            "players",
            vec![
                ColumnRule::critical("first_name"),
                ColumnRule::numeric("weight"),
            ],
        );
        let dataset = Dataset::from_table(&table, &rules).unwrap();
        assert_eq!(dataset.columns, vec!["first_name"]);
    }

    #[test]
    fn test_derived_column_appended_absent() {
        let table = raw_table(vec!["W", "GP"], vec![vec!["50", "82"]]);
        let rules = DatasetRules::new(
            "teams",
            vec![
                ColumnRule::numeric("W"),
                ColumnRule::numeric("GP"),
                ColumnRule::derived_ratio("WIN_PCT", "W", "GP"),
            ],
        );
        let dataset = Dataset::from_table(&table, &rules).unwrap();
        assert_eq!(dataset.columns, vec!["W", "GP", "WIN_PCT"]);
        assert_eq!(dataset.get(0, 2), Some(&Value::Absent));
    }

    #[test]
    fn test_to_cell_formats_whole_numbers_without_decimal() {
        assert_eq!(Value::Number(190.0).to_cell(), "190");
        assert_eq!(Value::Number(0.611).to_cell(), "0.611");
        assert_eq!(Value::Absent.to_cell(), "");
    }
}

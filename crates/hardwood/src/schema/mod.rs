//! Per-dataset schema rules: column roles, formats, and consistency checks.

mod datasets;
mod rules;
mod types;

pub use datasets::DatasetKind;
pub use rules::{ColumnRule, ConsistencyCheck, DatasetRules};
pub use types::{ColumnFormat, ColumnRole, Derivation, RangeFilter, TextCase};

//! The cleaning engine: a pure function from raw dataset to cleaned dataset
//! plus report.
//!
//! Steps run strictly in order; later steps depend on earlier ones:
//!
//! 1. Drop rows missing a critical identifier.
//! 2. Drop exact duplicate rows (keep first occurrence).
//! 3. Normalize formats (heights, seasons, numeric coercion, derived ratios).
//! 4. Impute missing values (median / "Unknown" / "No").
//! 5. Filter outliers per flagged column (IQR fences), then plausibility
//!    ranges. Filters compose: each sees only the surviving rows.
//! 6. Run consistency checks (diagnostic only, rows retained).
//! 7. Standardize text casing.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dataset::{Dataset, Value};
use crate::schema::{
    ColumnFormat, ColumnRole, ColumnRule, ConsistencyCheck, DatasetRules, Derivation, TextCase,
};
use crate::stats::quantile;

use super::report::{CleaningReport, ValidationMismatch};

static HEIGHT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d{1,2})$").unwrap());
static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// IQR fence multiplier for outlier removal.
const IQR_MULTIPLIER: f64 = 1.5;

/// Clean a raw dataset according to its rules.
///
/// Pure: the raw snapshot is consumed, a new cleaned dataset and a report of
/// every transition are returned. Row-level problems (malformed values,
/// unresolvable medians, consistency mismatches) are recorded in the report
/// and never abort the run.
pub fn clean(raw: Dataset, rules: &DatasetRules) -> (Dataset, CleaningReport) {
    let mut dataset = raw;
    let mut report = CleaningReport::new(&dataset.name, dataset.row_count());

    for (idx, name) in dataset.columns.iter().enumerate() {
        report
            .missing_before
            .insert(name.clone(), dataset.absent_count(idx));
    }

    // Pair each dataset column with its rule once; the dataset was built in
    // rule order so this stays aligned with the output schema.
    let ruled: Vec<(usize, ColumnRule)> = dataset
        .columns
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| rules.column(name).cloned().map(|rule| (idx, rule)))
        .collect();

    drop_missing_critical(&mut dataset, &ruled, &mut report);
    drop_duplicates(&mut dataset, &mut report);
    normalize(&mut dataset, &ruled, &mut report);
    impute(&mut dataset, &ruled, &mut report);
    filter_outliers(&mut dataset, &ruled, &mut report);
    validate(&dataset, rules, &mut report);
    standardize_text(&mut dataset, &ruled);

    for (idx, name) in dataset.columns.iter().enumerate() {
        report
            .missing_after
            .insert(name.clone(), dataset.absent_count(idx));
    }
    report.final_rows = dataset.row_count();

    (dataset, report)
}

/// Step 1: a row without its critical identifiers is unusable.
fn drop_missing_critical(
    dataset: &mut Dataset,
    ruled: &[(usize, ColumnRule)],
    report: &mut CleaningReport,
) {
    let critical: Vec<usize> = ruled
        .iter()
        .filter(|(_, rule)| rule.role == ColumnRole::CriticalIdentifier)
        .map(|(idx, _)| *idx)
        .collect();
    if critical.is_empty() {
        return;
    }

    let before = dataset.row_count();
    dataset
        .rows
        .retain(|row| critical.iter().all(|&idx| !row[idx].is_absent()));
    report.dropped_critical_missing = before - dataset.row_count();
}

/// Step 2: exact duplicates across all columns, absent equal to absent.
fn drop_duplicates(dataset: &mut Dataset, report: &mut CleaningReport) {
    let before = dataset.row_count();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    dataset.rows.retain(|row| {
        let key = row
            .iter()
            .map(Value::to_cell)
            .collect::<Vec<_>>()
            .join("\u{1f}");
        seen.insert(key)
    });
    report.dropped_duplicates = before - dataset.row_count();
}

/// Step 3: format parsing and numeric coercion. Malformed values become
/// absent so the imputation step picks them up.
fn normalize(dataset: &mut Dataset, ruled: &[(usize, ColumnRule)], report: &mut CleaningReport) {
    for (idx, rule) in ruled {
        match rule.role {
            ColumnRole::Numeric => {
                let mut malformed = 0;
                for row in &mut dataset.rows {
                    let parsed = match &row[*idx] {
                        Value::Text(text) => Some(parse_numeric(text, rule.format)),
                        _ => None,
                    };
                    if let Some(parsed) = parsed {
                        row[*idx] = match parsed {
                            Some(n) => Value::Number(n),
                            None => {
                                malformed += 1;
                                Value::Absent
                            }
                        };
                    }
                }
                report.record_malformed(&rule.name, malformed);
            }
            ColumnRole::Derived => {
                if let Some(Derivation::Ratio {
                    numerator,
                    denominator,
                }) = &rule.derivation
                {
                    derive_ratio(dataset, *idx, numerator, denominator);
                }
            }
            _ => {}
        }
    }
}

/// Parse a numeric cell according to its declared format.
fn parse_numeric(text: &str, format: ColumnFormat) -> Option<f64> {
    match format {
        ColumnFormat::FeetDashInches => {
            let caps = HEIGHT_PATTERN.captures(text)?;
            let feet: f64 = caps[1].parse().ok()?;
            let inches: f64 = caps[2].parse().ok()?;
            Some(feet * 12.0 + inches)
        }
        ColumnFormat::SeasonYear => {
            let year = YEAR_PATTERN.find(text)?;
            year.as_str().parse().ok()
        }
        ColumnFormat::Raw => text.parse::<f64>().ok().filter(|n| n.is_finite()),
    }
}

/// Compute a derived ratio column in place. Input columns have already been
/// normalized because derived rules follow their inputs in rule order.
fn derive_ratio(dataset: &mut Dataset, idx: usize, numerator: &str, denominator: &str) {
    let (Some(num_idx), Some(den_idx)) = (
        dataset.column_index(numerator),
        dataset.column_index(denominator),
    ) else {
        return;
    };

    for row in &mut dataset.rows {
        row[idx] = match (row[num_idx].as_number(), row[den_idx].as_number()) {
            (Some(num), Some(den)) if den > 0.0 => {
                Value::Number((num / den * 1000.0).round() / 1000.0)
            }
            _ => Value::Absent,
        };
    }
}

/// Step 4: fill remaining absences. The median is computed over the values
/// present at this point, which includes normalization-induced absences.
fn impute(dataset: &mut Dataset, ruled: &[(usize, ColumnRule)], report: &mut CleaningReport) {
    for (idx, rule) in ruled {
        match rule.role {
            ColumnRole::Numeric => {
                let absent = dataset.absent_count(*idx);
                if absent == 0 {
                    continue;
                }

                let mut present: Vec<f64> = dataset
                    .rows
                    .iter()
                    .filter_map(|row| row[*idx].as_number())
                    .collect();
                if present.is_empty() {
                    report.unresolved_columns.push(rule.name.clone());
                    continue;
                }
                present.sort_by(f64::total_cmp);
                let median = quantile(&present, 0.5);

                for row in &mut dataset.rows {
                    if row[*idx].is_absent() {
                        row[*idx] = Value::Number(median);
                    }
                }
                report.record_imputed(&rule.name, absent);
            }
            ColumnRole::Categorical => {
                fill_text(dataset, *idx, "Unknown", &rule.name, report);
            }
            ColumnRole::ClinchFlag => {
                fill_text(dataset, *idx, "No", &rule.name, report);
            }
            ColumnRole::CriticalIdentifier | ColumnRole::Derived => {}
        }
    }
}

fn fill_text(
    dataset: &mut Dataset,
    idx: usize,
    fill: &str,
    column: &str,
    report: &mut CleaningReport,
) {
    let mut filled = 0;
    for row in &mut dataset.rows {
        if row[idx].is_absent() {
            row[idx] = Value::Text(fill.to_string());
            filled += 1;
        }
    }
    report.record_imputed(column, filled);
}

/// Step 5: IQR fences per flagged column, then plausibility ranges. Applied
/// sequentially; each filter's quartiles are computed over the rows that
/// survived the previous filters.
fn filter_outliers(
    dataset: &mut Dataset,
    ruled: &[(usize, ColumnRule)],
    report: &mut CleaningReport,
) {
    for (idx, rule) in ruled {
        if !rule.apply_outlier_filter {
            continue;
        }

        let mut values: Vec<f64> = dataset
            .rows
            .iter()
            .filter_map(|row| row[*idx].as_number())
            .collect();
        if values.len() < 2 {
            continue;
        }
        values.sort_by(f64::total_cmp);

        let q1 = quantile(&values, 0.25);
        let q3 = quantile(&values, 0.75);
        let iqr = q3 - q1;
        let lower = q1 - IQR_MULTIPLIER * iqr;
        let upper = q3 + IQR_MULTIPLIER * iqr;

        let before = dataset.row_count();
        dataset.rows.retain(|row| match row[*idx].as_number() {
            Some(v) => v >= lower && v <= upper,
            None => true,
        });
        report.record_outlier_drops(&rule.name, before - dataset.row_count());
    }

    for (idx, rule) in ruled {
        let Some(range) = rule.range_filter else {
            continue;
        };

        let before = dataset.row_count();
        dataset.rows.retain(|row| match row[*idx].as_number() {
            Some(v) => range.contains(v),
            None => true,
        });
        report.record_outlier_drops(&rule.name, before - dataset.row_count());
    }
}

/// Step 6: dataset-specific consistency checks. Diagnostic only.
fn validate(dataset: &Dataset, rules: &DatasetRules, report: &mut CleaningReport) {
    for check in &rules.checks {
        match check {
            ConsistencyCheck::WinsPlusLossesEqualGames {
                wins,
                losses,
                games,
            } => {
                let (Some(w_idx), Some(l_idx), Some(g_idx)) = (
                    dataset.column_index(wins),
                    dataset.column_index(losses),
                    dataset.column_index(games),
                ) else {
                    continue;
                };

                for (row_idx, row) in dataset.rows.iter().enumerate() {
                    let (Some(w), Some(l), Some(g)) = (
                        row[w_idx].as_number(),
                        row[l_idx].as_number(),
                        row[g_idx].as_number(),
                    ) else {
                        continue;
                    };
                    if w + l != g {
                        report.validation_mismatches.push(ValidationMismatch {
                            row: row_idx,
                            message: format!(
                                "{} ({}) + {} ({}) != {} ({})",
                                wins, w, losses, l, games, g
                            ),
                        });
                    }
                }
            }
        }
    }
}

/// Step 7: one case convention per text column so later joins on these keys
/// are reliable.
fn standardize_text(dataset: &mut Dataset, ruled: &[(usize, ColumnRule)]) {
    for (idx, rule) in ruled {
        if !matches!(
            rule.role,
            ColumnRole::Categorical | ColumnRole::CriticalIdentifier
        ) {
            continue;
        }

        for row in &mut dataset.rows {
            if let Value::Text(text) = &row[*idx] {
                let cased = match rule.text_case {
                    TextCase::Title => title_case(text),
                    TextCase::Upper => text.to_uppercase(),
                };
                row[*idx] = Value::Text(cased);
            }
        }
    }
}

/// Title-case each whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

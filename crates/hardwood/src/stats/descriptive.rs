//! Per-column descriptive statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::Result;

/// IQR fence multiplier, matching the cleaning engine's outlier fences.
const IQR_MULTIPLIER: f64 = 1.5;

/// Summary statistics for one numeric column.
///
/// Dispersion uses the sample convention (divide by n-1). The outlier count
/// is diagnostic: it is recomputed from the column as given, independently
/// of whatever the cleaning engine already removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummary {
    /// Number of present values the summary was computed over.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; ties broken by the smallest value.
    pub mode: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    /// Sample variance.
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    /// Interquartile range.
    pub iqr: f64,
    /// Q1 - 1.5 * IQR.
    pub lower_fence: f64,
    /// Q3 + 1.5 * IQR.
    pub upper_fence: f64,
    /// Values strictly outside the fences.
    pub outlier_count: usize,
    /// Outlier share of the present values, in percent.
    pub outlier_pct: f64,
}

/// Quantile by exclusive linear interpolation: position `p * (n + 1)`,
/// clamped to the sample, interpolated between the surrounding ranks.
///
/// Used for every quartile and median in this crate so outlier fences and
/// reported statistics always agree. For p = 0.5 this coincides with the
/// conventional median.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(sorted.is_sorted_by(|a, b| a <= b));
    let n = sorted.len();
    assert!(n > 0, "quantile of an empty sample");
    if n == 1 {
        return sorted[0];
    }

    let h = (p * (n as f64 + 1.0)).clamp(1.0, n as f64);
    let lo = h.floor() as usize - 1;
    let hi = h.ceil() as usize - 1;
    let frac = h - h.floor();
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Compute a summary over a slice of values. Returns `None` when empty.
pub fn summarize_values(values: &[f64]) -> Option<StatSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let variance = if count < 2 {
        0.0
    } else {
        sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
    };

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_MULTIPLIER * iqr;
    let upper_fence = q3 + IQR_MULTIPLIER * iqr;
    let outlier_count = sorted
        .iter()
        .filter(|&&v| v < lower_fence || v > upper_fence)
        .count();

    Some(StatSummary {
        count,
        mean,
        median: quantile(&sorted, 0.5),
        mode: mode_of_sorted(&sorted),
        std_dev: variance.sqrt(),
        variance,
        min: sorted[0],
        max: sorted[count - 1],
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        outlier_count,
        outlier_pct: outlier_count as f64 / n * 100.0,
    })
}

/// Summarize the requested numeric columns of a cleaned dataset.
///
/// Absent values are excluded from every aggregate. Columns with no present
/// values (unresolved during cleaning) are omitted from the result. An
/// unknown column name is an error.
pub fn summarize(dataset: &Dataset, columns: &[&str]) -> Result<IndexMap<String, StatSummary>> {
    let mut summaries = IndexMap::new();
    for &name in columns {
        let values = dataset.numeric_values(name)?;
        if let Some(summary) = summarize_values(&values) {
            summaries.insert(name.to_string(), summary);
        }
    }
    Ok(summaries)
}

/// Most frequent value in a sorted slice; equal counts resolve to the
/// smallest value, which the ascending scan visits first.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut idx = 0;

    while idx < sorted.len() {
        let mut run = idx + 1;
        while run < sorted.len() && sorted[run] == sorted[idx] {
            run += 1;
        }
        if run - idx > best_count {
            best_count = run - idx;
            best = sorted[idx];
        }
        idx = run;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    #[test]
    fn test_quantile_fixture() {
        let sorted = [67.0, 74.0, 75.0, 76.0, 77.0, 78.0, 79.0, 80.0, 87.0, 95.0];
        assert!((quantile(&sorted, 0.25) - 74.75).abs() < 1e-9);
        assert!((quantile(&sorted, 0.75) - 81.75).abs() < 1e-9);
        assert_eq!(quantile(&sorted, 0.5), 77.5);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile(&[42.0], 0.25), 42.0);
        assert_eq!(quantile(&[42.0], 0.75), 42.0);
    }

    #[test]
    fn test_median_matches_convention() {
        assert_eq!(quantile(&[10.0, 20.0, 30.0], 0.5), 20.0);
        assert_eq!(quantile(&[10.0, 20.0, 30.0, 40.0], 0.5), 25.0);
    }

    #[test]
    fn test_summary_sample_dispersion() {
        let summary = summarize_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean, 5.0);
        // Sample variance: sum of squared deviations 32 over n-1 = 7.
        assert!((summary.variance - 32.0 / 7.0).abs() < 1e-9);
        assert!((summary.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
        assert_eq!(summary.mode, 4.0);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        let summary = summarize_values(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.mode, 1.0);
    }

    #[test]
    fn test_outliers_flagged_against_fences() {
        let values = [67.0, 74.0, 75.0, 76.0, 77.0, 78.0, 79.0, 80.0, 87.0, 95.0];
        let summary = summarize_values(&values).unwrap();
        // Fences [64.25, 92.25]: only 95 is outside.
        assert!((summary.lower_fence - 64.25).abs() < 1e-9);
        assert!((summary.upper_fence - 92.25).abs() < 1e-9);
        assert_eq!(summary.outlier_count, 1);
        assert!((summary.outlier_pct - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_excludes_absent_and_skips_empty() {
        let dataset = Dataset::new(
            "test",
            vec!["v".into(), "empty".into()],
            vec![
                vec![Value::Number(10.0), Value::Absent],
                vec![Value::Absent, Value::Absent],
                vec![Value::Number(30.0), Value::Absent],
            ],
        );
        let summaries = summarize(&dataset, &["v", "empty"]).unwrap();

        assert_eq!(summaries["v"].count, 2);
        assert_eq!(summaries["v"].mean, 20.0);
        assert!(!summaries.contains_key("empty"));
    }

    #[test]
    fn test_summarize_unknown_column_errors() {
        let dataset = Dataset::new("test", vec!["v".into()], vec![vec![Value::Number(1.0)]]);
        assert!(summarize(&dataset, &["nope"]).is_err());
    }
}

//! Pairwise-complete Pearson correlation.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{HardwoodError, Result};

/// A symmetric matrix of Pearson coefficients with diagonal 1.0.
///
/// Pairs with fewer than two complete observations are undefined: their
/// cells hold NaN and the pair is listed in `insufficient_pairs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Metric columns, in request order.
    pub metrics: Vec<String>,
    /// Coefficients, indexed `[row][col]` in metric order.
    pub values: Vec<Vec<f64>>,
    /// Metric pairs that had fewer than two paired observations.
    pub insufficient_pairs: Vec<(String, String)>,
}

impl CorrelationMatrix {
    /// Look up the coefficient for a pair of metrics by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.metrics.iter().position(|m| m == a)?;
        let j = self.metrics.iter().position(|m| m == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson correlation coefficient over already-paired observations.
///
/// Errors with [`HardwoodError::InsufficientData`] when fewer than two pairs
/// exist. A zero-variance side also yields the error's undefined case: the
/// coefficient has no meaning when one variable never moves, so callers get
/// NaN via [`correlate`] rather than a spurious value.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n < 2 {
        return Err(HardwoodError::InsufficientData {
            first: "x".to_string(),
            second: "y".to_string(),
            observations: n,
        });
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(cov / denom)
}

/// Correlation matrix over the requested metric columns of a cleaned
/// dataset, using pairwise-complete observations: a row missing one metric
/// is excluded from that pair only and still contributes to other pairs.
pub fn correlate(dataset: &Dataset, metrics: &[&str]) -> Result<CorrelationMatrix> {
    let indices: Vec<usize> = metrics
        .iter()
        .map(|&name| {
            dataset
                .column_index(name)
                .ok_or_else(|| HardwoodError::UnknownColumn(name.to_string()))
        })
        .collect::<Result<_>>()?;

    let k = metrics.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    let mut insufficient_pairs = Vec::new();

    for i in 0..k {
        values[i][i] = 1.0;
        for j in (i + 1)..k {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for row in &dataset.rows {
                if let (Some(x), Some(y)) =
                    (row[indices[i]].as_number(), row[indices[j]].as_number())
                {
                    xs.push(x);
                    ys.push(y);
                }
            }

            let r = match pearson(&xs, &ys) {
                Ok(r) => r,
                Err(HardwoodError::InsufficientData { .. }) => {
                    insufficient_pairs.push((metrics[i].to_string(), metrics[j].to_string()));
                    f64::NAN
                }
                Err(e) => return Err(e),
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        metrics: metrics.iter().map(|m| m.to_string()).collect(),
        values,
        insufficient_pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let r = pearson(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_insufficient_pairs() {
        assert!(matches!(
            pearson(&[1.0], &[2.0]),
            Err(HardwoodError::InsufficientData { observations: 1, .. })
        ));
    }

    #[test]
    fn test_pearson_zero_variance_is_undefined() {
        let r = pearson(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(r.is_nan());
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let dataset = Dataset::new(
            "test",
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                vec![num(1.0), num(10.0), num(3.0)],
                vec![num(2.0), num(8.0), num(1.0)],
                vec![num(3.0), num(9.0), num(4.0)],
                vec![num(4.0), num(5.0), num(2.0)],
            ],
        );
        let matrix = correlate(&dataset, &["a", "b", "c"]).unwrap();

        for i in 0..3 {
            assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..3 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    #[test]
    fn test_pairwise_complete_observations() {
        // Five rows; rows 3 and 4 are each missing one metric, so the pair
        // is computed over rows 0-2 only: x = [1,2,3], y = [2,4,6].
        let dataset = Dataset::new(
            "test",
            vec!["x".into(), "y".into()],
            vec![
                vec![num(1.0), num(2.0)],
                vec![num(2.0), num(4.0)],
                vec![num(3.0), num(6.0)],
                vec![Value::Absent, num(100.0)],
                vec![num(100.0), Value::Absent],
            ],
        );
        let matrix = correlate(&dataset, &["x", "y"]).unwrap();

        let r = matrix.get("x", "y").unwrap();
        assert!((r - 1.0).abs() < 1e-9);
        assert!(matrix.insufficient_pairs.is_empty());
    }

    #[test]
    fn test_hand_computed_five_row_fixture() {
        // x = [1,2,3,4,5], y = [2,1,4,3,5]: r = 0.8.
        let dataset = Dataset::new(
            "test",
            vec!["x".into(), "y".into()],
            vec![
                vec![num(1.0), num(2.0)],
                vec![num(2.0), num(1.0)],
                vec![num(3.0), num(4.0)],
                vec![num(4.0), num(3.0)],
                vec![num(5.0), num(5.0)],
            ],
        );
        let matrix = correlate(&dataset, &["x", "y"]).unwrap();
        assert!((matrix.get("x", "y").unwrap() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_pair_reported_not_fatal() {
        let dataset = Dataset::new(
            "test",
            vec!["x".into(), "y".into()],
            vec![
                vec![num(1.0), Value::Absent],
                vec![num(2.0), Value::Absent],
                vec![Value::Absent, num(3.0)],
            ],
        );
        let matrix = correlate(&dataset, &["x", "y"]).unwrap();

        assert!(matrix.get("x", "y").unwrap().is_nan());
        assert_eq!(
            matrix.insufficient_pairs,
            vec![("x".to_string(), "y".to_string())]
        );
        // The diagonal stays defined.
        assert_eq!(matrix.get("x", "x").unwrap(), 1.0);
    }

    #[test]
    fn test_unknown_metric_errors() {
        let dataset = Dataset::new("test", vec!["x".into()], vec![vec![num(1.0)]]);
        assert!(matches!(
            correlate(&dataset, &["x", "nope"]),
            Err(HardwoodError::UnknownColumn(_))
        ));
    }
}

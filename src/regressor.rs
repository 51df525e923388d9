use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Regressor – the inference seam
// ---------------------------------------------------------------------------

/// Errors raised when a model does not fit the data it is asked to score.
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("model has {features} feature names but {coefficients} coefficients")]
    ShapeMismatch { features: usize, coefficients: usize },

    #[error("dataset is missing feature column(s) the model expects: {0:?}")]
    MissingFeatures(Vec<String>),

    #[error("feature row has {got} values, model expects {expected}")]
    RowLength { expected: usize, got: usize },
}

/// An externally trained regression model.
///
/// `predict` must be pure: the same row always yields the same scalar.
pub trait Regressor {
    /// Column names in the order `predict` expects them.
    fn feature_names(&self) -> &[String];

    /// Predict a single row. The result is unbounded in principle but is
    /// expected to land in `[0, 1]` for admission probabilities.
    fn predict(&self, row: &[f64]) -> f64;

    /// Predict every row of a batch.
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

// ---------------------------------------------------------------------------
// LinearModel – JSON-serialised linear regressor
// ---------------------------------------------------------------------------

/// A fitted linear regressor: `intercept + Σ coefficient_i · x_i`.
///
/// On-disk layout:
///
/// ```json
/// {
///   "feature_names": ["GRE Score", "TOEFL Score", "CGPA"],
///   "intercept": -1.21,
///   "coefficients": [0.0019, 0.0028, 0.118]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(
        feature_names: Vec<String>,
        intercept: f64,
        coefficients: Vec<f64>,
    ) -> Result<Self, ModelError> {
        if feature_names.len() != coefficients.len() {
            return Err(ModelError::ShapeMismatch {
                features: feature_names.len(),
                coefficients: coefficients.len(),
            });
        }
        Ok(Self {
            feature_names,
            intercept,
            coefficients,
        })
    }

    /// Read a model from a JSON file and check its shape.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading model file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing model file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let raw: LinearModel = serde_json::from_str(text).context("decoding model JSON")?;
        Ok(Self::new(raw.feature_names, raw.intercept, raw.coefficients)?)
    }
}

impl Regressor for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}

/// Check that `row` has one value per model feature.
pub fn check_row(model: &dyn Regressor, row: &[f64]) -> Result<(), ModelError> {
    let expected = model.feature_names().len();
    if row.len() != expected {
        return Err(ModelError::RowLength {
            expected,
            got: row.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel::new(
            vec!["GRE Score".into(), "CGPA".into()],
            -0.5,
            vec![0.001, 0.1],
        )
        .unwrap()
    }

    #[test]
    fn predicts_intercept_plus_weighted_sum() {
        let m = model();
        let y = m.predict(&[320.0, 8.5]);
        assert!((y - (-0.5 + 0.32 + 0.85)).abs() < 1e-12);
    }

    #[test]
    fn prediction_is_idempotent() {
        let m = model();
        let row = [317.5, 8.61];
        assert_eq!(m.predict(&row).to_bits(), m.predict(&row).to_bits());
    }

    #[test]
    fn batch_matches_single_row() {
        let m = model();
        let rows = vec![vec![300.0, 7.0], vec![335.0, 9.6]];
        let batch = m.predict_batch(&rows);
        assert_eq!(batch, vec![m.predict(&rows[0]), m.predict(&rows[1])]);
    }

    #[test]
    fn rejects_mismatched_shape() {
        let err = LinearModel::new(vec!["a".into()], 0.0, vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::ShapeMismatch {
                features: 1,
                coefficients: 2
            }
        );
    }

    #[test]
    fn parses_json_layout() {
        let json = r#"{"feature_names":["CGPA"],"intercept":0.25,"coefficients":[0.05]}"#;
        let m = LinearModel::from_json(json).unwrap();
        assert_eq!(m.feature_names, vec!["CGPA".to_string()]);
        assert!((m.predict(&[9.0]) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn json_with_bad_shape_fails() {
        let json = r#"{"feature_names":["a","b"],"intercept":0.0,"coefficients":[1.0]}"#;
        let err = LinearModel::from_json(json).unwrap_err();
        assert!(err.downcast_ref::<ModelError>().is_some());
    }

    #[test]
    fn check_row_reports_length() {
        let m = model();
        assert!(check_row(&m, &[1.0, 2.0]).is_ok());
        assert_eq!(
            check_row(&m, &[1.0]),
            Err(ModelError::RowLength {
                expected: 2,
                got: 1
            })
        );
    }
}

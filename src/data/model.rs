use crate::metrics::MetricsSummary;
use crate::regressor::ModelError;

/// Regression target column.
pub const TARGET_COLUMN: &str = "Chance of Admit";

/// Row identifier column, dropped on load when present.
pub const ID_COLUMN: &str = "Serial No.";

// ---------------------------------------------------------------------------
// FeatureStats – slider bounds for one column
// ---------------------------------------------------------------------------

/// Observed range and median of one feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStats {
    pub name: String,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl FeatureStats {
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let min = sorted.first().copied().unwrap_or(0.0);
        let max = sorted.last().copied().unwrap_or(0.0);
        FeatureStats {
            name: name.to_string(),
            min,
            median: median_of_sorted(&sorted),
            max,
        }
    }
}

/// Median of an already sorted slice; even lengths average the middle pair.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0,
    }
}

// ---------------------------------------------------------------------------
// Dataset – feature matrix plus target
// ---------------------------------------------------------------------------

/// The admission dataset: numeric features and the target column.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature column names, in file order (target and id excluded).
    pub feature_names: Vec<String>,
    /// Row-major feature values, one `Vec` per record.
    pub rows: Vec<Vec<f64>>,
    /// Target value per record.
    pub target: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of feature column `idx`.
    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[idx]).collect()
    }

    /// Per-column min / median / max.
    pub fn feature_stats(&self) -> Vec<FeatureStats> {
        self.feature_names
            .iter()
            .enumerate()
            .map(|(idx, name)| FeatureStats::from_values(name, &self.column(idx)))
            .collect()
    }

    /// Reorder columns to match `names`, e.g. a model's input schema.
    ///
    /// Extra dataset columns are dropped; missing ones are an error.
    pub fn select_features(&self, names: &[String]) -> Result<Dataset, ModelError> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.feature_names.iter().position(|n| n == name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name.clone()),
            }
        }
        if !missing.is_empty() {
            return Err(ModelError::MissingFeatures(missing));
        }

        Ok(Dataset {
            feature_names: names.to_vec(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i]).collect())
                .collect(),
            target: self.target.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// MetricsTable – precomputed evaluation results
// ---------------------------------------------------------------------------

/// The metrics file as read: raw cells for display plus typed row 0.
#[derive(Debug, Clone)]
pub struct MetricsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub summary: MetricsSummary,
}

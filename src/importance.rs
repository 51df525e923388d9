//! Permutation feature importance.
//!
//! Each feature column is shuffled `n_repeats` times; the drop in R² against
//! the unshuffled baseline is that feature's importance.

use rand::prelude::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::data::model::Dataset;
use crate::metrics::r2_score;
use crate::regressor::Regressor;

/// Importance of one feature, averaged over repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub feature: String,
    pub mean: f64,
    pub std: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermutationSettings {
    pub n_repeats: usize,
    pub seed: u64,
}

/// Compute permutation importance for every feature of `dataset`, sorted by
/// descending mean importance.
pub fn permutation_importance(
    model: &dyn Regressor,
    dataset: &Dataset,
    settings: PermutationSettings,
) -> Vec<FeatureImportance> {
    let baseline = r2_score(&dataset.target, &model.predict_batch(&dataset.rows));
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut shuffled_rows = dataset.rows.clone();

    let mut result: Vec<FeatureImportance> = dataset
        .feature_names
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let mut column = dataset.column(col);
            let drops: Vec<f64> = (0..settings.n_repeats)
                .map(|_| {
                    column.shuffle(&mut rng);
                    for (row, &value) in shuffled_rows.iter_mut().zip(&column) {
                        row[col] = value;
                    }
                    let score = r2_score(&dataset.target, &model.predict_batch(&shuffled_rows));
                    baseline - score
                })
                .collect();

            // restore the column before moving on
            for (row, original) in shuffled_rows.iter_mut().zip(&dataset.rows) {
                row[col] = original[col];
            }

            let (mean, std) = mean_std(&drops);
            FeatureImportance {
                feature: name.clone(),
                mean,
                std,
            }
        })
        .collect();

    result.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    log::debug!(
        "Permutation importance over {} records, {} repeats",
        dataset.len(),
        settings.n_repeats
    );
    result
}

/// Population mean and standard deviation.
fn mean_std(xs: &[f64]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

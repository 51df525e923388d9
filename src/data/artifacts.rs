use anyhow::{Context, Result};

use super::loader::{load_dataset, load_metrics};
use super::model::{Dataset, FeatureStats, MetricsTable};
use crate::config::ArtifactPaths;
use crate::metrics::MetricsSummary;
use crate::regressor::{LinearModel, Regressor};

/// Everything the views read: model, metrics file and dataset.
pub struct Artifacts {
    pub model: Box<dyn Regressor>,
    pub metrics: MetricsTable,
    /// Dataset with columns in the model's input order.
    pub dataset: Dataset,
    /// Slider bounds, one entry per model feature.
    pub feature_stats: Vec<FeatureStats>,
}

impl Artifacts {
    /// Load all three files named in `paths`.
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        let model = LinearModel::load(&paths.model_path)?;
        let metrics = load_metrics(&paths.metrics_path)?;
        let dataset = load_dataset(&paths.dataset_path)?;
        Self::from_parts(Box::new(model), metrics, dataset)
    }

    /// Bind a model to its data, aligning dataset columns to the model schema.
    pub fn from_parts(
        model: Box<dyn Regressor>,
        metrics: MetricsTable,
        dataset: Dataset,
    ) -> Result<Self> {
        let dataset = dataset
            .select_features(model.feature_names())
            .context("dataset does not match the model's input schema")?;
        let feature_stats = dataset.feature_stats();

        log::info!(
            "Loaded {} records with {} features",
            dataset.len(),
            feature_stats.len()
        );

        Ok(Artifacts {
            model,
            metrics,
            dataset,
            feature_stats,
        })
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        self.model.predict(row)
    }

    /// Score the loaded model against the whole dataset.
    pub fn evaluate_on_dataset(&self) -> MetricsSummary {
        let predicted = self.model.predict_batch(&self.dataset.rows);
        MetricsSummary::evaluate(&self.dataset.target, &predicted)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::data::loader::{parse_dataset, parse_metrics};

    pub const DATASET: &str = "\
Serial No.,GRE Score,TOEFL Score,CGPA,Research,Chance of Admit
1,337,118,9.65,1,0.92
2,324,107,8.87,1,0.76
3,316,104,8.00,1,0.72
4,322,110,8.67,1,0.80
5,314,103,8.21,0,0.65
6,330,115,9.34,1,0.90
";

    pub const METRICS: &str = "MAE,MSE,RMSE,R2\n0.04272,0.00370,0.06083,0.81880\n";

    /// Model weighted toward CGPA, ignoring TOEFL entirely.
    pub fn model() -> LinearModel {
        LinearModel::new(
            vec![
                "CGPA".into(),
                "GRE Score".into(),
                "TOEFL Score".into(),
                "Research".into(),
            ],
            -1.3,
            vec![0.2, 0.0008, 0.0, 0.02],
        )
        .unwrap()
    }

    pub fn artifacts() -> Artifacts {
        Artifacts::from_parts(
            Box::new(model()),
            parse_metrics(METRICS).unwrap(),
            parse_dataset(DATASET).unwrap(),
        )
        .unwrap()
    }
}

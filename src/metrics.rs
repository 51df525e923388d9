use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Regression scores
// ---------------------------------------------------------------------------

/// The four scores shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    #[serde(rename = "MAE")]
    pub mae: f64,
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "RMSE")]
    pub rmse: f64,
    #[serde(rename = "R2")]
    pub r2: f64,
}

impl MetricsSummary {
    pub const LABELS: [&'static str; 4] = ["MAE", "MSE", "RMSE", "R2"];

    /// `(label, value)` pairs in dashboard order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("MAE", self.mae),
            ("MSE", self.mse),
            ("RMSE", self.rmse),
            ("R2", self.r2),
        ]
    }

    /// Score `predicted` against `actual`.
    pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Self {
        let mse = mean_squared_error(actual, predicted);
        Self {
            mae: mean_absolute_error(actual, predicted),
            mse,
            rmse: mse.sqrt(),
            r2: r2_score(actual, predicted),
        }
    }
}

/// Dashboard formatting: four decimals.
pub fn format_metric(value: f64) -> String {
    format!("{value:.4}")
}

/// Percentage with one decimal, e.g. `0.7234` → `72.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    mean(actual.iter().zip(predicted).map(|(a, p)| (a - p).abs()))
}

pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    mean(actual.iter().zip(predicted).map(|(a, p)| (a - p).powi(2)))
}

/// Coefficient of determination.
///
/// A constant target gives `1.0` for a perfect fit and `0.0` otherwise.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return f64::NAN;
    }
    let y_mean = mean(actual[..n].iter().copied());
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actual[..n].iter().map(|a| (a - y_mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_four_decimals() {
        assert_eq!(format_metric(0.042_857_1), "0.0429");
        assert_eq!(format_metric(0.8), "0.8000");
    }

    #[test]
    fn formats_percent_one_decimal() {
        assert_eq!(format_percent(0.7234), "72.3%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn perfect_fit_scores() {
        let y = [0.5, 0.7, 0.9];
        let m = MetricsSummary::evaluate(&y, &y);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.mse, 0.0);
        assert_eq!(m.rmse, 0.0);
        assert_eq!(m.r2, 1.0);
    }

    #[test]
    fn known_errors() {
        let actual = [1.0, 2.0, 3.0, 4.0];
        let predicted = [1.5, 2.0, 2.0, 4.0];
        let m = MetricsSummary::evaluate(&actual, &predicted);
        assert!((m.mae - 0.375).abs() < 1e-12);
        assert!((m.mse - 0.3125).abs() < 1e-12);
        assert!((m.rmse - 0.3125f64.sqrt()).abs() < 1e-12);
        // ss_tot = 5.0, ss_res = 1.25
        assert!((m.r2 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn predicting_the_mean_gives_zero_r2() {
        let actual = [1.0, 2.0, 3.0];
        assert!(r2_score(&actual, &[2.0, 2.0, 2.0]).abs() < 1e-12);
    }

    #[test]
    fn constant_target() {
        assert_eq!(r2_score(&[1.0, 1.0], &[1.0, 1.0]), 1.0);
        assert_eq!(r2_score(&[1.0, 1.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn entries_follow_label_order() {
        let m = MetricsSummary {
            mae: 1.0,
            mse: 2.0,
            rmse: 3.0,
            r2: 4.0,
        };
        let labels: Vec<_> = m.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, MetricsSummary::LABELS);
    }
}

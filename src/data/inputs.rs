use super::model::FeatureStats;

// ---------------------------------------------------------------------------
// FeatureInputs – slider values for one view
// ---------------------------------------------------------------------------

/// One slider per feature, bounded by the observed range.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureInput {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl FeatureInput {
    pub fn range(&self) -> std::ops::RangeInclusive<f64> {
        self.min..=self.max
    }
}

/// The input set owned by a single view (`"pred"` or `"rec"`).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureInputs {
    pub key: &'static str,
    pub inputs: Vec<FeatureInput>,
}

impl FeatureInputs {
    /// Start every slider at the column median.
    pub fn from_stats(key: &'static str, stats: &[FeatureStats]) -> Self {
        let inputs = stats
            .iter()
            .map(|s| FeatureInput {
                name: s.name.clone(),
                min: s.min,
                max: s.max,
                value: s.median,
            })
            .collect();
        FeatureInputs { key, inputs }
    }

    /// Set a feature by name, clamped to its range. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(input) = self.inputs.iter_mut().find(|i| i.name == name) {
            input.value = value.clamp(input.min, input.max);
        }
    }

    /// Pull any out-of-range value back into bounds.
    pub fn clamp_all(&mut self) {
        for input in &mut self.inputs {
            input.value = input.value.clamp(input.min, input.max);
        }
    }

    /// The single-row feature vector, in model column order.
    pub fn row(&self) -> Vec<f64> {
        self.inputs.iter().map(|i| i.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> Vec<FeatureStats> {
        vec![
            FeatureStats::from_values("GRE Score", &[300.0, 320.0, 340.0]),
            FeatureStats::from_values("CGPA", &[7.0, 8.0, 8.6, 9.9]),
        ]
    }

    #[test]
    fn defaults_to_median_within_observed_range() {
        let inputs = FeatureInputs::from_stats("pred", &stats());
        let gre = &inputs.inputs[0];
        assert_eq!(gre.range(), 300.0..=340.0);
        assert_eq!(gre.value, 320.0);

        let cgpa = &inputs.inputs[1];
        assert_eq!(cgpa.range(), 7.0..=9.9);
        assert!((cgpa.value - 8.3).abs() < 1e-12);
    }

    #[test]
    fn row_follows_feature_order() {
        let inputs = FeatureInputs::from_stats("pred", &stats());
        assert_eq!(inputs.row().len(), 2);
        assert_eq!(inputs.row()[0], 320.0);
    }

    #[test]
    fn set_clamps_to_bounds() {
        let mut inputs = FeatureInputs::from_stats("rec", &stats());
        inputs.set("GRE Score", 400.0);
        inputs.set("CGPA", 1.0);
        inputs.set("Unknown", 5.0);
        assert_eq!(inputs.row(), vec![340.0, 7.0]);
    }

    #[test]
    fn clamp_all_restores_bounds() {
        let mut inputs = FeatureInputs::from_stats("pred", &stats());
        inputs.inputs[0].value = 10.0;
        inputs.clamp_all();
        assert_eq!(inputs.inputs[0].value, 300.0);
    }
}

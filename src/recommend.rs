// ---------------------------------------------------------------------------
// Recommendation buckets
// ---------------------------------------------------------------------------

/// Admission outlook derived from a predicted chance of admit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outlook {
    Low,
    Borderline,
    Strong,
    VeryHigh,
}

/// Inclusive lower bounds, highest first.
const THRESHOLDS: [(f64, Outlook); 3] = [
    (0.80, Outlook::VeryHigh),
    (0.65, Outlook::Strong),
    (0.50, Outlook::Borderline),
];

impl Outlook {
    pub fn from_prediction(predicted: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(bound, _)| predicted >= *bound)
            .map(|(_, outlook)| *outlook)
            .unwrap_or(Outlook::Low)
    }

    pub fn message(self) -> &'static str {
        match self {
            Outlook::VeryHigh => "Very high chance of admission",
            Outlook::Strong => "Strong chance of admission",
            Outlook::Borderline => "Borderline chance of admission",
            Outlook::Low => "Relatively low chance of admission",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Outlook::VeryHigh => {
                "Your academic and non-academic profile is highly competitive and \
                 fits top-tier universities."
            }
            Outlook::Strong => {
                "Your profile is already good; improving CGPA, GRE/TOEFL scores or \
                 your SOP could raise your chances further."
            }
            Outlook::Borderline => {
                "Application strategy matters a lot here; consider universities with \
                 moderate competition."
            }
            Outlook::Low => {
                "Consider strengthening your academic profile and research experience \
                 before applying."
            }
        }
    }
}

pub const DISCLAIMER: &str =
    "This recommendation is decision support based on the model output.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_points() {
        assert_eq!(Outlook::from_prediction(0.85), Outlook::VeryHigh);
        assert_eq!(Outlook::from_prediction(0.70), Outlook::Strong);
        assert_eq!(Outlook::from_prediction(0.55), Outlook::Borderline);
        assert_eq!(Outlook::from_prediction(0.30), Outlook::Low);
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(Outlook::from_prediction(0.80), Outlook::VeryHigh);
        assert_eq!(Outlook::from_prediction(0.65), Outlook::Strong);
        assert_eq!(Outlook::from_prediction(0.50), Outlook::Borderline);
        assert_eq!(Outlook::from_prediction(0.7999), Outlook::Strong);
    }

    #[test]
    fn out_of_range_predictions() {
        assert_eq!(Outlook::from_prediction(1.4), Outlook::VeryHigh);
        assert_eq!(Outlook::from_prediction(-0.2), Outlook::Low);
        assert_eq!(Outlook::from_prediction(f64::NAN), Outlook::Low);
    }

    #[test]
    fn monotonic_step_function() {
        let mut prev = Outlook::from_prediction(-1.0);
        for i in 0..=200 {
            let next = Outlook::from_prediction(i as f64 / 100.0 - 0.5);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn messages_name_the_bucket() {
        assert!(Outlook::VeryHigh.message().to_lowercase().contains("very high"));
        assert!(Outlook::Strong.message().to_lowercase().contains("strong"));
        assert!(Outlook::Borderline.message().to_lowercase().contains("borderline"));
        assert!(Outlook::Low.message().to_lowercase().contains("relatively low"));
    }
}

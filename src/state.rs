use crate::config::AppConfig;
use crate::data::artifacts::Artifacts;
use crate::data::inputs::FeatureInputs;
use crate::importance::{FeatureImportance, permutation_importance};
use crate::regressor::check_row;

// ---------------------------------------------------------------------------
// Page routing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Evaluation,
    FeatureImportance,
    Prediction,
    Recommendation,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Evaluation,
        Page::FeatureImportance,
        Page::Prediction,
        Page::Recommendation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Evaluation => "Evaluation",
            Page::FeatureImportance => "Feature Importance",
            Page::Prediction => "Prediction",
            Page::Recommendation => "Recommendation",
        }
    }
}

/// Which view produced the cached prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Prediction,
    Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionPrediction {
    pub value: f64,
    pub source: PredictionSource,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded artifacts (None until loading succeeds).
    pub artifacts: Option<Artifacts>,

    /// Current page.
    pub page: Page,

    /// Slider set of the Prediction view.
    pub prediction_inputs: Option<FeatureInputs>,

    /// Slider set of the Recommendation view.
    pub recommendation_inputs: Option<FeatureInputs>,

    /// Last prediction of this session. May be stale relative to later edits.
    pub session_prediction: Option<SessionPrediction>,

    /// Importance for the current Feature Importance visit.
    pub importance: Option<Vec<FeatureImportance>>,

    /// Error shown instead of the dashboard when loading failed.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            artifacts: None,
            page: Page::default(),
            prediction_inputs: None,
            recommendation_inputs: None,
            session_prediction: None,
            importance: None,
            status_message: None,
        }
    }

    /// Load the artifacts named in the current config.
    pub fn reload(&mut self) {
        match Artifacts::load(&self.config.artifacts) {
            Ok(artifacts) => self.set_artifacts(artifacts),
            Err(e) => {
                log::error!("Failed to load artifacts: {e:#}");
                self.artifacts = None;
                self.status_message = Some(format!("{e:#}"));
            }
        }
    }

    /// Ingest freshly loaded artifacts and reset everything derived from them.
    pub fn set_artifacts(&mut self, artifacts: Artifacts) {
        self.prediction_inputs = Some(FeatureInputs::from_stats("pred", &artifacts.feature_stats));
        self.recommendation_inputs =
            Some(FeatureInputs::from_stats("rec", &artifacts.feature_stats));
        self.session_prediction = None;
        self.importance = None;
        self.status_message = None;
        self.artifacts = Some(artifacts);

        if self.page == Page::FeatureImportance {
            self.compute_importance();
        }
    }

    /// Switch page. Entering Feature Importance recomputes it from scratch.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        log::debug!("Navigate {:?} -> {:?}", self.page, page);
        self.page = page;
        self.importance = None;
        if page == Page::FeatureImportance {
            self.compute_importance();
        }
    }

    fn compute_importance(&mut self) {
        if let Some(artifacts) = &self.artifacts {
            let settings = (&self.config.importance).into();
            self.importance = Some(permutation_importance(
                artifacts.model.as_ref(),
                &artifacts.dataset,
                settings,
            ));
        }
    }

    /// Predict from the Prediction view's sliders and cache the result.
    pub fn predict_from_prediction_view(&mut self) -> Option<f64> {
        let value = self.predict_with(self.prediction_inputs.as_ref()?)?;
        self.session_prediction = Some(SessionPrediction {
            value,
            source: PredictionSource::Prediction,
        });
        Some(value)
    }

    /// Whether the Recommendation view must show its own sliders.
    ///
    /// A prediction made by the Prediction view is reused as-is; otherwise
    /// the view collects its own profile.
    pub fn recommendation_needs_input(&self) -> bool {
        !matches!(
            self.session_prediction,
            Some(SessionPrediction {
                source: PredictionSource::Prediction,
                ..
            })
        )
    }

    /// The prediction the Recommendation view should display.
    pub fn recommendation_prediction(&mut self) -> Option<f64> {
        if !self.recommendation_needs_input() {
            return self.session_prediction.map(|p| p.value);
        }
        let value = self.predict_with(self.recommendation_inputs.as_ref()?)?;
        self.session_prediction = Some(SessionPrediction {
            value,
            source: PredictionSource::Recommendation,
        });
        Some(value)
    }

    fn predict_with(&self, inputs: &FeatureInputs) -> Option<f64> {
        let artifacts = self.artifacts.as_ref()?;
        let row = inputs.row();
        if let Err(e) = check_row(artifacts.model.as_ref(), &row) {
            log::error!("{e}");
            return None;
        }
        Some(artifacts.predict(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::artifacts::fixtures;

    fn loaded() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_artifacts(fixtures::artifacts());
        state
    }

    #[test]
    fn inputs_seeded_from_medians() {
        let state = loaded();
        let artifacts = state.artifacts.as_ref().unwrap();
        let inputs = state.prediction_inputs.as_ref().unwrap();
        for (input, stats) in inputs.inputs.iter().zip(&artifacts.feature_stats) {
            assert_eq!(input.value, stats.median);
            assert_eq!(input.range(), stats.min..=stats.max);
        }
        assert_eq!(state.recommendation_inputs.as_ref().unwrap().key, "rec");
    }

    #[test]
    fn prediction_view_caches_value() {
        let mut state = loaded();
        let value = state.predict_from_prediction_view().unwrap();
        assert_eq!(
            state.session_prediction,
            Some(SessionPrediction {
                value,
                source: PredictionSource::Prediction
            })
        );
        assert_eq!(state.predict_from_prediction_view(), Some(value));
    }

    #[test]
    fn recommendation_reuses_cached_prediction() {
        let mut state = loaded();
        state.prediction_inputs.as_mut().unwrap().set("CGPA", 9.65);
        let cached = state.predict_from_prediction_view().unwrap();

        assert!(!state.recommendation_needs_input());
        assert_eq!(state.recommendation_prediction(), Some(cached));
    }

    #[test]
    fn cached_prediction_can_go_stale() {
        let mut state = loaded();
        let cached = state.predict_from_prediction_view().unwrap();
        state.prediction_inputs.as_mut().unwrap().set("CGPA", 8.0);
        assert_eq!(state.recommendation_prediction(), Some(cached));
    }

    #[test]
    fn recommendation_collects_own_input_without_cache() {
        let mut state = loaded();
        assert!(state.recommendation_needs_input());

        state.recommendation_inputs.as_mut().unwrap().set("CGPA", 9.65);
        let first = state.recommendation_prediction().unwrap();
        assert!(state.recommendation_needs_input());

        state.recommendation_inputs.as_mut().unwrap().set("CGPA", 8.0);
        let second = state.recommendation_prediction().unwrap();
        assert!(second < first);
    }

    #[test]
    fn importance_recomputed_on_each_visit() {
        let mut state = loaded();
        assert!(state.importance.is_none());

        state.navigate(Page::FeatureImportance);
        let first = state.importance.clone().unwrap();
        assert_eq!(first.len(), 4);

        state.navigate(Page::Dashboard);
        assert!(state.importance.is_none());

        state.navigate(Page::FeatureImportance);
        assert_eq!(state.importance.as_ref(), Some(&first));
    }

    #[test]
    fn no_artifacts_no_prediction() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.predict_from_prediction_view(), None);
        state.navigate(Page::FeatureImportance);
        assert!(state.importance.is_none());
    }

    #[test]
    fn failed_reload_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.artifacts = config.artifacts.within(dir.path());
        let mut state = AppState::new(config);
        state.reload();
        assert!(state.artifacts.is_none());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("best_model_admission.json"));
    }

    #[test]
    fn page_labels_in_menu_order() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Evaluation",
                "Feature Importance",
                "Prediction",
                "Recommendation"
            ]
        );
    }
}

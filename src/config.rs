//! Runtime settings.
//!
//! Sources, later overriding earlier:
//! 1. built-in defaults
//! 2. `admission.toml` in the working directory (optional)
//! 3. environment variables prefixed with `ADMISSION__`, e.g.
//!    `ADMISSION__ARTIFACTS__MODEL_PATH=models/admission.json`

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::importance::PermutationSettings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub artifacts: ArtifactPaths,
    #[serde(default)]
    pub importance: ImportanceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("admission").required(false))
            .add_source(Environment::with_prefix("ADMISSION").separator("__"))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.importance.n_repeats == 0 {
            return Err(ConfigError::InvalidValue {
                key: "importance.n_repeats".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Locations of the model, metrics and dataset files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ArtifactPaths {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default = "default_metrics_path")]
    pub metrics_path: PathBuf,
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            metrics_path: default_metrics_path(),
            dataset_path: default_dataset_path(),
        }
    }
}

impl ArtifactPaths {
    /// Resolve the same file names inside another directory.
    pub fn within(&self, dir: &Path) -> Self {
        let rebase = |p: &Path| match p.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        };
        Self {
            model_path: rebase(&self.model_path),
            metrics_path: rebase(&self.metrics_path),
            dataset_path: rebase(&self.dataset_path),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("best_model_admission.json")
}

fn default_metrics_path() -> PathBuf {
    PathBuf::from("metrics_admission.csv")
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("Admission_Predict.csv")
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ImportanceConfig {
    #[serde(default = "default_n_repeats")]
    pub n_repeats: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ImportanceConfig {
    fn default() -> Self {
        Self {
            n_repeats: default_n_repeats(),
            seed: default_seed(),
        }
    }
}

impl From<&ImportanceConfig> for PermutationSettings {
    fn from(cfg: &ImportanceConfig) -> Self {
        PermutationSettings {
            n_repeats: cfg.n_repeats,
            seed: cfg.seed,
        }
    }
}

fn default_n_repeats() -> usize {
    10
}

fn default_seed() -> u64 {
    42
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(text: &str) -> Result<AppConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.artifacts.model_path,
            PathBuf::from("best_model_admission.json")
        );
        assert_eq!(cfg.artifacts.metrics_path, PathBuf::from("metrics_admission.csv"));
        assert_eq!(cfg.artifacts.dataset_path, PathBuf::from("Admission_Predict.csv"));
        assert_eq!(cfg.importance.n_repeats, 10);
        assert_eq!(cfg.importance.seed, 42);
    }

    #[test]
    fn empty_source_gives_defaults() {
        assert_eq!(from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn file_overrides_single_keys() {
        let cfg = from_toml(
            "[artifacts]\nmodel_path = \"models/lr.json\"\n[importance]\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(cfg.artifacts.model_path, PathBuf::from("models/lr.json"));
        assert_eq!(cfg.artifacts.dataset_path, PathBuf::from("Admission_Predict.csv"));
        assert_eq!(cfg.importance.seed, 7);
        assert_eq!(cfg.importance.n_repeats, 10);
    }

    #[test]
    fn zero_repeats_rejected() {
        let err = from_toml("[importance]\nn_repeats = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn within_keeps_file_names() {
        let paths = ArtifactPaths::default().within(Path::new("/data/run1"));
        assert_eq!(
            paths.model_path,
            PathBuf::from("/data/run1/best_model_admission.json")
        );
        assert_eq!(
            paths.dataset_path,
            PathBuf::from("/data/run1/Admission_Predict.csv")
        );
    }
}

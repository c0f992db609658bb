//! Recognition configuration
//!
//! Configuration consumed by
//! [`RecognitionEngine::from_config`](crate::recognition::RecognitionEngine::from_config).
//! Loadable from TOML, overridable from the environment, validated before
//! use.
//!
//! ```toml
//! [probabilistic]
//! enabled = true
//! confidence = 0.8
//! lexicon_path = "./lexicons/custom.toml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{LetheError, Result};

/// Configuration for the recognition engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Probabilistic entity extraction settings
    #[serde(default)]
    pub probabilistic: ProbabilisticConfig,
}

/// Probabilistic extractor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilisticConfig {
    /// Construct the engine with the lexicon extractor backend
    #[serde(default)]
    pub enabled: bool,

    /// Confidence attached to every extractor-produced span, in (0.0, 1.0]
    #[serde(default = "default_confidence")]
    pub confidence: f32,

    /// Path to a lexicon TOML file replacing the embedded lexicon
    pub lexicon_path: Option<PathBuf>,
}

fn default_confidence() -> f32 {
    0.8
}

impl Default for ProbabilisticConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            confidence: default_confidence(),
            lexicon_path: None,
        }
    }
}

impl RecognitionConfig {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            LetheError::Configuration(format!(
                "failed to read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        let confidence = self.probabilistic.confidence;
        if !(confidence > 0.0 && confidence <= 1.0) {
            return Err(LetheError::Configuration(format!(
                "probabilistic confidence must be in (0.0, 1.0], got {confidence}"
            )));
        }

        if let Some(ref path) = self.probabilistic.lexicon_path {
            if !path.exists() {
                return Err(LetheError::Configuration(format!(
                    "lexicon file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(LetheError::Configuration(format!(
                    "lexicon must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Applies environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LETHE_PROBABILISTIC_ENABLED") {
            self.probabilistic.enabled = val.parse().map_err(|_| {
                LetheError::Configuration(format!("invalid LETHE_PROBABILISTIC_ENABLED value: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("LETHE_PROBABILISTIC_CONFIDENCE") {
            self.probabilistic.confidence = val.parse().map_err(|_| {
                LetheError::Configuration(format!(
                    "invalid LETHE_PROBABILISTIC_CONFIDENCE value: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("LETHE_LEXICON_PATH") {
            self.probabilistic.lexicon_path = Some(PathBuf::from(val));
        }

        Ok(())
    }
}

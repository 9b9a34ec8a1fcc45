use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("epsilon_ratio must be a positive number, got {0}")]
    InvalidEpsilonRatio(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Line clustering tolerance as a fraction of the image height.
    pub epsilon_ratio: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { epsilon_ratio: 0.01 }
    }
}

impl ScanConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epsilon_ratio.is_finite() && self.epsilon_ratio > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidEpsilonRatio(self.epsilon_ratio))
        }
    }

    /// Clustering tolerance in pixels for an image `image_height` pixels tall.
    pub fn epsilon_for_height(&self, image_height: u32) -> f64 {
        self.epsilon_ratio * f64::from(image_height)
    }
}

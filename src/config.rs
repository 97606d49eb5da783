//! Scoring configuration - weights, category thresholds, minimum length.
//!
//! Configuration is validated when loaded, never at evaluation time.
//! Evaluation functions take `&ScorerConfig` and treat it as read-only.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::types::Category;
use crate::validator::RuleSet;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Weight '{name}' must be in [0.0, 1.0], got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },
    #[error("Weights must sum to 1.0, got {sum}")]
    WeightsDoNotSumToOne { sum: f64 },
    #[error(
        "Category thresholds must satisfy 0 <= medium <= strong <= 100, \
         got medium={medium}, strong={strong}"
    )]
    InvalidThresholds { medium: f64, strong: f64 },
    #[error("Rule set must contain at least one rule")]
    EmptyRuleSet,
}

/// Relative weight of each sub-score in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub length: f64,
    pub variety: f64,
    pub complexity: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            length: 0.3,
            variety: 0.4,
            complexity: 0.3,
        }
    }
}

/// Lower bounds of the Medium and Strong categories on the overall score.
///
/// Scores below `medium` are Weak; scores in `[medium, strong)` are Medium;
/// scores at or above `strong` are Strong.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryThresholds {
    pub medium: f64,
    pub strong: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            medium: 40.0,
            strong: 70.0,
        }
    }
}

impl CategoryThresholds {
    /// Maps an overall score to its category. Total over all scores.
    pub fn category_for(&self, score: f64) -> Category {
        if score < self.medium {
            Category::Weak
        } else if score < self.strong {
            Category::Medium
        } else {
            Category::Strong
        }
    }
}

/// Immutable scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub weights: Weights,
    pub thresholds: CategoryThresholds,
    pub min_length: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            thresholds: CategoryThresholds::default(),
            min_length: 8,
        }
    }
}

impl ScorerConfig {
    /// Checks structural invariants: each weight in `[0, 1]`, weights
    /// summing to 1.0, thresholds forming a non-decreasing partition of
    /// `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("length", self.weights.length),
            ("variety", self.weights.variety),
            ("complexity", self.weights.complexity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightOutOfRange { name, value });
            }
        }

        let sum = self.weights.length + self.weights.variety + self.weights.complexity;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightsDoNotSumToOne { sum });
        }

        let CategoryThresholds { medium, strong } = self.thresholds;
        if !(0.0 <= medium && medium <= strong && strong <= 100.0) {
            return Err(ConfigError::InvalidThresholds { medium, strong });
        }

        Ok(())
    }

    /// Loads and validates configuration from a TOML file.
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Configuration load FAILED: file not found {:?}", path);
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: ScorerConfig = toml::from_str(&content)?;
        config.validate()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Configuration loaded from {:?}", path);

        Ok(config)
    }

    /// The default five validation rules with this configuration's
    /// minimum length.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::with_min_length(self.min_length)
    }
}

/// Returns the configuration file path.
///
/// Priority:
/// 1. Environment variable `PWD_CHECK_CONFIG_PATH`
/// 2. Default path `./assets/pwd-check.toml`
pub fn config_path() -> PathBuf {
    std::env::var("PWD_CHECK_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/pwd-check.toml"))
}

/// Loads configuration from the path resolved by [`config_path`].
pub fn load_config() -> Result<ScorerConfig, ConfigError> {
    ScorerConfig::from_path(config_path())
}

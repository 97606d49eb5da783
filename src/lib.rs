//! Password validation and strength scoring library
//!
//! This library evaluates a candidate password in memory: validation
//! against hard requirements, weighted 0-100 strength scoring with a
//! category label, and derived improvement advice. It never stores,
//! hashes, logs, or transmits the password.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate (the password itself
//!   is never logged)
//!
//! # Environment Variables
//!
//! - `PWD_CHECK_CONFIG_PATH`: Custom path to a TOML configuration file
//!   (default: `./assets/pwd-check.toml`)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{
//!     recommend_improvements, score_password_strength, validate_password, RuleSet, ScorerConfig,
//! };
//! use secrecy::SecretString;
//!
//! let config = ScorerConfig::default();
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let validation = validate_password(&password, &RuleSet::default());
//! let score = score_password_strength(&password, &config);
//! let advice = recommend_improvements(&password, &validation, &score);
//!
//! println!("Valid: {}", validation.is_valid);
//! println!("Strength: {} ({}%)", score.category, score.overall_percent());
//! for line in advice {
//!     println!("- {}", line);
//! }
//! ```

// Internal modules
mod breakdown;
mod config;
mod recommend;
mod scorer;
mod sections;
mod types;
mod validator;

// Public API
pub use breakdown::{CharacterBreakdown, SPECIAL_CHARS};
pub use config::{CategoryThresholds, ConfigError, ScorerConfig, Weights, config_path, load_config};
pub use recommend::recommend_improvements;
pub use scorer::score_password_strength;
pub use types::{Category, RuleOutcome, StrengthScore, ValidationResult};
pub use validator::{Rule, RuleSet, validate_password};

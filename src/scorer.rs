//! Strength scorer - combines the section sub-scores into an overall score.

use secrecy::{ExposeSecret, SecretString};

use crate::breakdown::CharacterBreakdown;
use crate::config::ScorerConfig;
use crate::sections::{complexity_score, length_score, variety_score};
use crate::types::StrengthScore;

/// Scores a password's strength.
///
/// Any string scores, valid or not; the function is total over all
/// Unicode input including the empty string. The unrounded overall
/// score is used for category thresholding.
///
/// # Arguments
/// * `password` - The password to score
/// * `config` - Weights and category thresholds
pub fn score_password_strength(password: &SecretString, config: &ScorerConfig) -> StrengthScore {
    let pwd = password.expose_secret();
    let chars: Vec<char> = pwd.chars().collect();
    let breakdown = CharacterBreakdown::of(pwd);

    let length_score = length_score(breakdown.length);
    let variety_score = variety_score(&breakdown);
    let complexity_score = complexity_score(&chars, &breakdown);

    let overall_score = (config.weights.length * length_score
        + config.weights.variety * variety_score
        + config.weights.complexity * complexity_score)
        .clamp(0.0, 100.0);

    let category = config.thresholds.category_for(overall_score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = breakdown.length,
        category = %category,
        "password scored"
    );

    StrengthScore {
        length_score,
        variety_score,
        complexity_score,
        overall_score,
        category,
    }
}

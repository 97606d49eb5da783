//! Recommendation derivation - targeted advice from validation and scoring.

use secrecy::{ExposeSecret, SecretString};

use crate::breakdown::CharacterBreakdown;
use crate::sections::{has_repeat_run, has_sequential_run};
use crate::types::{Category, StrengthScore, ValidationResult};

/// Derives ordered improvement advice from a validation result and a
/// strength score.
///
/// Failed-rule messages come first in rule order, then length, variety,
/// and complexity advice. Penalty messages never echo the offending
/// substring. A valid password with a Strong category gets a single
/// affirmative message and nothing else.
pub fn recommend_improvements(
    password: &SecretString,
    validation: &ValidationResult,
    score: &StrengthScore,
) -> Vec<String> {
    if validation.is_valid && score.category == Category::Strong {
        return vec!["Excellent password! No improvements needed.".to_string()];
    }

    let mut recommendations = validation.failures.clone();

    if score.length_score < 100.0 {
        recommendations.push("Consider using a longer password (17+ characters)".to_string());
    }

    if score.variety_score < 100.0 {
        let breakdown = CharacterBreakdown::of(password.expose_secret());
        let missing = breakdown.missing_classes();
        if !missing.is_empty() {
            recommendations.push(format!(
                "Add the missing character types: {}",
                missing.join(", ")
            ));
        }
    }

    if score.complexity_score < 100.0 {
        let chars: Vec<char> = password.expose_secret().chars().collect();
        if has_repeat_run(&chars) {
            recommendations.push(
                "Avoid repeating the same character three or more times in a row".to_string(),
            );
        }
        if has_sequential_run(&chars) {
            recommendations
                .push("Avoid ascending or descending character sequences".to_string());
        }
    }

    recommendations
}

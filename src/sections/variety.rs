//! Character variety section - credit per distinct character class present.

use crate::breakdown::CharacterBreakdown;

const POINTS_PER_CLASS: f64 = 25.0;

/// 25 points for each of uppercase, lowercase, digit, and special present
/// at least once. No partial credit for repeat occurrences of a class.
pub fn variety_score(breakdown: &CharacterBreakdown) -> f64 {
    breakdown.class_count() as f64 * POINTS_PER_CLASS
}

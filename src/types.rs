//! Result value types produced by validation and scoring.
//!
//! All types here are plain values constructed fresh per evaluation call;
//! nothing is mutated after construction.

/// Strength category derived from the overall score.
///
/// The variants are ordered: `Weak < Medium < Strong`. Thresholds live in
/// [`CategoryThresholds`](crate::CategoryThresholds), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Weak => write!(f, "Weak"),
            Category::Medium => write!(f, "Medium"),
            Category::Strong => write!(f, "Strong"),
        }
    }
}

/// Detailed strength score for a single password.
///
/// Sub-scores and the overall score are all in `[0, 100]`. The overall
/// score is kept unrounded so category thresholding never flaps at a
/// boundary from rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthScore {
    pub length_score: f64,
    pub variety_score: f64,
    pub complexity_score: f64,
    pub overall_score: f64,
    pub category: Category,
}

impl StrengthScore {
    /// Overall score rounded to the nearest integer percent, for display.
    pub fn overall_percent(&self) -> u8 {
        self.overall_score.round() as u8
    }
}

/// Outcome of a single validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: &'static str,
    pub passed: bool,
}

/// Per-rule outcomes plus the aggregate verdict.
///
/// `outcomes` and `failures` both follow rule declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub outcomes: Vec<RuleOutcome>,
    pub is_valid: bool,
    pub failures: Vec<String>,
}

impl ValidationResult {
    /// Looks up a rule outcome by name. Returns `None` for unknown rules.
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ordering() {
        assert!(Category::Weak < Category::Medium);
        assert!(Category::Medium < Category::Strong);
    }

    #[test]
    fn test_overall_percent_rounds_to_nearest() {
        let score = StrengthScore {
            length_score: 0.0,
            variety_score: 0.0,
            complexity_score: 0.0,
            overall_score: 87.6,
            category: Category::Strong,
        };
        assert_eq!(score.overall_percent(), 88);
    }

    #[test]
    fn test_passed_lookup() {
        let result = ValidationResult {
            outcomes: vec![
                RuleOutcome { name: "min_length", passed: true },
                RuleOutcome { name: "has_upper", passed: false },
            ],
            is_valid: false,
            failures: vec!["Password must contain at least one uppercase letter".to_string()],
        };
        assert_eq!(result.passed("min_length"), Some(true));
        assert_eq!(result.passed("has_upper"), Some(false));
        assert_eq!(result.passed("no_such_rule"), None);
    }
}

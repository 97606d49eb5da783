//! Hard-requirement validation - pass/fail per rule plus aggregate verdict.

use secrecy::{ExposeSecret, SecretString};

use crate::breakdown::CharacterBreakdown;
use crate::config::ConfigError;
use crate::types::{RuleOutcome, ValidationResult};

/// A single validation rule: a named predicate with a remediation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLength(usize),
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecial,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::MinLength(_) => "min_length",
            Rule::HasUppercase => "has_upper",
            Rule::HasLowercase => "has_lower",
            Rule::HasDigit => "has_digit",
            Rule::HasSpecial => "has_special",
        }
    }

    /// Message stating the unmet condition, phrased so the user can act on it.
    pub fn message(&self) -> String {
        match self {
            Rule::MinLength(min) => format!("Password must be at least {} characters long", min),
            Rule::HasUppercase => "Password must contain at least one uppercase letter".to_string(),
            Rule::HasLowercase => "Password must contain at least one lowercase letter".to_string(),
            Rule::HasDigit => "Password must contain at least one digit".to_string(),
            Rule::HasSpecial => "Password must contain at least one special character".to_string(),
        }
    }

    fn check(&self, breakdown: &CharacterBreakdown) -> bool {
        match self {
            Rule::MinLength(min) => breakdown.length >= *min,
            Rule::HasUppercase => breakdown.has_uppercase(),
            Rule::HasLowercase => breakdown.has_lowercase(),
            Rule::HasDigit => breakdown.has_digit(),
            Rule::HasSpecial => breakdown.has_special(),
        }
    }
}

/// An ordered, immutable set of validation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set from explicit rules, preserving order.
    ///
    /// An empty rule set is structurally invalid (every password would
    /// validate vacuously) and is rejected at construction time.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigError> {
        if rules.is_empty() {
            return Err(ConfigError::EmptyRuleSet);
        }
        Ok(Self { rules })
    }

    /// The default five rules with a custom minimum length.
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            rules: vec![
                Rule::MinLength(min_length),
                Rule::HasUppercase,
                Rule::HasLowercase,
                Rule::HasDigit,
                Rule::HasSpecial,
            ],
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_min_length(8)
    }
}

/// Validates a password against every rule in `rules`.
///
/// All rules are always evaluated so the result reports every failure,
/// not just the first. Never fails: any Unicode string, including the
/// empty string, produces a well-defined result.
pub fn validate_password(password: &SecretString, rules: &RuleSet) -> ValidationResult {
    let breakdown = CharacterBreakdown::of(password.expose_secret());

    let mut outcomes = Vec::with_capacity(rules.rules().len());
    let mut failures = Vec::new();

    for rule in rules.rules() {
        let passed = rule.check(&breakdown);
        if !passed {
            failures.push(rule.message());
        }
        outcomes.push(RuleOutcome {
            name: rule.name(),
            passed,
        });
    }

    let is_valid = outcomes.iter().all(|o| o.passed);

    ValidationResult {
        outcomes,
        is_valid,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_all_rules_pass() {
        let result = validate_password(&secret("Passw0rd!"), &RuleSet::default());
        assert!(result.is_valid);
        assert!(result.failures.is_empty());
        assert!(result.outcomes.iter().all(|o| o.passed));
    }

    #[test]
    fn test_validate_empty_password_fails_every_rule() {
        let result = validate_password(&secret(""), &RuleSet::default());
        assert!(!result.is_valid);
        assert!(result.outcomes.iter().all(|o| !o.passed));
        assert_eq!(result.failures.len(), 5);
    }

    #[test]
    fn test_validate_reports_every_failure_not_just_first() {
        // Long enough and has lowercase, but missing upper, digit, special
        let result = validate_password(&secret("justletters"), &RuleSet::default());
        assert!(!result.is_valid);
        assert_eq!(result.passed("min_length"), Some(true));
        assert_eq!(result.passed("has_lower"), Some(true));
        assert_eq!(result.passed("has_upper"), Some(false));
        assert_eq!(result.passed("has_digit"), Some(false));
        assert_eq!(result.passed("has_special"), Some(false));
        assert_eq!(result.failures.len(), 3);
    }

    #[test]
    fn test_validate_failure_messages_in_rule_order() {
        let result = validate_password(&secret("a"), &RuleSet::default());
        assert_eq!(
            result.failures,
            vec![
                "Password must be at least 8 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one digit",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn test_validate_min_length_counts_code_points() {
        // 8 non-ASCII letters: min_length passes even though byte length is 16
        let result = validate_password(&secret("éééééééé"), &RuleSet::default());
        assert_eq!(result.passed("min_length"), Some(true));
    }

    #[test]
    fn test_validate_min_length_boundary() {
        let rules = RuleSet::default();
        assert_eq!(
            validate_password(&secret("Aa1!Aa1"), &rules).passed("min_length"),
            Some(false)
        );
        assert_eq!(
            validate_password(&secret("Aa1!Aa1!"), &rules).passed("min_length"),
            Some(true)
        );
    }

    #[test]
    fn test_validate_custom_min_length() {
        let rules = RuleSet::with_min_length(12);
        let result = validate_password(&secret("Short1!pwd"), &rules);
        assert_eq!(result.passed("min_length"), Some(false));
        assert!(
            result
                .failures
                .iter()
                .any(|f| f.contains("at least 12 characters"))
        );
    }

    #[test]
    fn test_empty_rule_set_rejected_at_construction() {
        // An empty set would report is_valid = true for any password,
        // including the empty string; it must never be constructible.
        let result = RuleSet::new(vec![]);
        assert!(matches!(result, Err(ConfigError::EmptyRuleSet)));
    }

    #[test]
    fn test_validate_follows_custom_rule_subset_and_order() {
        let rules = RuleSet::new(vec![Rule::HasDigit, Rule::HasUppercase])
            .expect("Non-empty rule set should build");

        let result = validate_password(&secret("lowercase"), &rules);
        assert!(!result.is_valid);
        let names: Vec<_> = result.outcomes.iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["has_digit", "has_upper"]);
        assert_eq!(
            result.failures,
            vec![
                "Password must contain at least one digit",
                "Password must contain at least one uppercase letter",
            ]
        );

        // Rules outside the subset are not consulted: short, no special,
        // but both supplied rules pass
        let result = validate_password(&secret("X1"), &rules);
        assert!(result.is_valid);
        assert_eq!(result.passed("min_length"), None);
    }

    #[test]
    fn test_validate_special_outside_fixed_set_does_not_count() {
        // Tilde is not in the recognized special set
        let result = validate_password(&secret("Passw0rd~"), &RuleSet::default());
        assert_eq!(result.passed("has_special"), Some(false));
    }
}

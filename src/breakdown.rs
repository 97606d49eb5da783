//! Character classification - single-pass breakdown of a password.
//!
//! Every code point lands in exactly one of five classes: uppercase,
//! lowercase, digit, special, or other. "Other" (whitespace, non-ASCII
//! letters, anything outside the special set) counts toward length only.

/// The fixed set of recognized special characters.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};:\"\\|,.<>/?";

/// Per-class code point counts for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterBreakdown {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
    pub other: usize,
    /// Total length in Unicode code points.
    pub length: usize,
}

impl CharacterBreakdown {
    /// Classifies every code point of `password` in a single pass.
    pub fn of(password: &str) -> Self {
        let mut breakdown = CharacterBreakdown::default();
        for c in password.chars() {
            breakdown.length += 1;
            if c.is_ascii_uppercase() {
                breakdown.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                breakdown.lowercase += 1;
            } else if c.is_ascii_digit() {
                breakdown.digits += 1;
            } else if SPECIAL_CHARS.contains(c) {
                breakdown.special += 1;
            } else {
                breakdown.other += 1;
            }
        }
        breakdown
    }

    pub fn has_uppercase(&self) -> bool {
        self.uppercase > 0
    }

    pub fn has_lowercase(&self) -> bool {
        self.lowercase > 0
    }

    pub fn has_digit(&self) -> bool {
        self.digits > 0
    }

    pub fn has_special(&self) -> bool {
        self.special > 0
    }

    /// Number of tracked classes (upper/lower/digit/special) present.
    pub fn class_count(&self) -> usize {
        [
            self.has_uppercase(),
            self.has_lowercase(),
            self.has_digit(),
            self.has_special(),
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    /// Names of the tracked classes absent from the password.
    pub fn missing_classes(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_uppercase() {
            missing.push("uppercase letters");
        }
        if !self.has_lowercase() {
            missing.push("lowercase letters");
        }
        if !self.has_digit() {
            missing.push("digits");
        }
        if !self.has_special() {
            missing.push("special characters");
        }
        missing
    }
}

//! Complexity section - pattern penalties and composition bonuses.

use crate::breakdown::CharacterBreakdown;

const REPEAT_PENALTY: f64 = 30.0;
const SEQUENTIAL_PENALTY: f64 = 20.0;
const MIXED_CASE_BONUS: f64 = 10.0;
const DIGIT_SPECIAL_BONUS: f64 = 10.0;

/// Recognized alphabets for sequential-run detection.
#[derive(PartialEq)]
enum Alphabet {
    Digit,
    Lowercase,
    Uppercase,
}

fn alphabet(c: char) -> Option<Alphabet> {
    if c.is_ascii_digit() {
        Some(Alphabet::Digit)
    } else if c.is_ascii_lowercase() {
        Some(Alphabet::Lowercase)
    } else if c.is_ascii_uppercase() {
        Some(Alphabet::Uppercase)
    } else {
        None
    }
}

/// True if any code point occurs 3 or more times consecutively.
pub fn has_repeat_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// True if any 3 consecutive characters form a strictly ascending or
/// strictly descending run within one recognized alphabet (digits,
/// lowercase, uppercase). Repeated identical characters never qualify.
pub fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (Some(a), Some(b), Some(c)) = (alphabet(w[0]), alphabet(w[1]), alphabet(w[2])) else {
            return false;
        };
        if b != a || c != a {
            return false;
        }
        let step1 = w[1] as i32 - w[0] as i32;
        let step2 = w[2] as i32 - w[1] as i32;
        (step1 == 1 && step2 == 1) || (step1 == -1 && step2 == -1)
    })
}

/// Starts at 100, applies the two penalties and two bonuses additively,
/// then clamps to `[0, 100]` once at the end.
pub fn complexity_score(chars: &[char], breakdown: &CharacterBreakdown) -> f64 {
    let mut score = 100.0;

    if has_repeat_run(chars) {
        score -= REPEAT_PENALTY;
    }
    if has_sequential_run(chars) {
        score -= SEQUENTIAL_PENALTY;
    }
    if breakdown.has_uppercase() && breakdown.has_lowercase() {
        score += MIXED_CASE_BONUS;
    }
    if breakdown.has_digit() && breakdown.has_special() {
        score += DIGIT_SPECIAL_BONUS;
    }

    score.clamp(0.0, 100.0)
}

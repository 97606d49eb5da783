//! Length section - step-function score over password length.

/// Scores password length in code points.
///
/// Piecewise, monotonic non-decreasing:
/// below 8 scores 0, 8-10 scores 30, 11-12 scores 60, 13-16 scores 80,
/// 17 and above scores 100.
pub fn length_score(length: usize) -> f64 {
    match length {
        0..=7 => 0.0,
        8..=10 => 30.0,
        11..=12 => 60.0,
        13..=16 => 80.0,
        _ => 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_score_breakpoints() {
        assert_eq!(length_score(7), 0.0);
        assert_eq!(length_score(8), 30.0);
        assert_eq!(length_score(10), 30.0);
        assert_eq!(length_score(11), 60.0);
        assert_eq!(length_score(12), 60.0);
        assert_eq!(length_score(13), 80.0);
        assert_eq!(length_score(16), 80.0);
        assert_eq!(length_score(17), 100.0);
    }

    #[test]
    fn test_length_score_empty() {
        assert_eq!(length_score(0), 0.0);
    }

    #[test]
    fn test_length_score_monotonic() {
        let mut previous = 0.0;
        for length in 0..64 {
            let score = length_score(length);
            assert!(score >= previous, "score decreased at length {}", length);
            previous = score;
        }
    }
}

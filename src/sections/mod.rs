//! Strength scoring sections
//!
//! Each section computes one sub-score in `[0, 100]`.

mod complexity;
mod length;
mod variety;

pub use complexity::{complexity_score, has_repeat_run, has_sequential_run};
pub use length::length_score;
pub use variety::variety_score;

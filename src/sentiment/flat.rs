//! # Flat Scorer
//!
//! Simplified mood scorer: every exact lexicon hit moves the score by a
//! fixed step, with no negation or intensity handling.

use crate::defaults::{BASELINE_SCORE, MAX_SCORE, MIN_SCORE};
use crate::text::flat_tokens;
use tracing::debug;

/// Positive words recognized by the flat scorer
pub const FLAT_POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "love", "great", "excellent",
    "amazing", "wonderful", "good", "fantastic", "awesome",
];

/// Negative words recognized by the flat scorer
pub const FLAT_NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "hate", "terrible", "awful",
    "horrible", "bad", "worst", "depressed", "anxious",
];

/// Score change per matched word
pub const FLAT_STEP: f64 = 0.5;

/// Flat per-word mood scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatScorer;

impl FlatScorer {
    /// Create a flat scorer
    pub const fn new() -> Self {
        Self
    }

    /// Score text, rounded to one decimal and clamped to the score range
    pub fn score(&self, text: &str) -> f64 {
        let mut score = BASELINE_SCORE;
        let mut hits = 0usize;

        for token in flat_tokens(text) {
            if FLAT_POSITIVE_WORDS.contains(&token.as_str()) {
                score += FLAT_STEP;
                hits += 1;
            }
            if FLAT_NEGATIVE_WORDS.contains(&token.as_str()) {
                score -= FLAT_STEP;
                hits += 1;
            }
        }

        let rounded = (score * 10.0).round() / 10.0;
        let score = rounded.clamp(MIN_SCORE, MAX_SCORE);
        debug!(hits, score, "flat scored text");
        score
    }
}

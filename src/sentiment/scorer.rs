//! # Contextual Scorer
//!
//! Canonical mood scorer: lexicon polarity with negation and intensifier
//! context, word-count damping and a polarity ratio adjustment.

use super::lexicon::{Lexicon, Polarity};
use super::mood::MoodCategory;
use crate::defaults::{BASELINE_SCORE, MAX_SCORE, MIN_SCORE};
use crate::text::tokenize;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Base contribution of a single polar token
pub const WORD_WEIGHT: f64 = 0.8;

/// Fraction of the summed contributions kept after word-count normalization
pub const DAMPING: f64 = 0.1;

/// Weight of the positive/negative token ratios
pub const RATIO_WEIGHT: f64 = 2.0;

/// How many preceding tokens are searched for a negation
pub const NEGATION_WINDOW: usize = 2;

/// Contribution of one classified token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenContribution {
    /// Lowercase token
    pub token: String,
    /// Position in the token sequence
    pub position: usize,
    /// Bucket the token was classified into
    pub polarity: Polarity,
    /// Whether a negation was found in the lookback window
    pub negated: bool,
    /// Multiplier taken from the preceding intensifier
    pub multiplier: f64,
    /// Signed contribution added to the raw score
    pub contribution: f64,
}

/// Detailed result of contextual scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Final mood score (1 to 10)
    pub score: f64,
    /// Mood category of the score
    pub category: MoodCategory,
    /// Number of tokens scored
    pub word_count: usize,
    /// Tokens classified positive
    pub positive_count: usize,
    /// Tokens classified negative
    pub negative_count: usize,
    /// Tokens classified neutral
    pub neutral_count: usize,
    /// Baseline plus the undamped sum of contributions
    pub raw_score: f64,
    /// Per-token contributions, in token order
    pub contributions: Vec<TokenContribution>,
}

impl SentimentReport {
    /// Report for text without any tokens
    pub fn baseline() -> Self {
        Self {
            score: BASELINE_SCORE,
            category: MoodCategory::from_score(BASELINE_SCORE),
            word_count: 0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            raw_score: BASELINE_SCORE,
            contributions: Vec::new(),
        }
    }

    /// Canonical label of the score
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Tokens that were negated
    pub fn negated_tokens(&self) -> impl Iterator<Item = &str> {
        self.contributions
            .iter()
            .filter(|c| c.negated)
            .map(|c| c.token.as_str())
    }
}

/// Canonical contextual mood scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextualScorer {
    lexicon: Lexicon,
}

impl ContextualScorer {
    /// Create a scorer over the standard lexicon
    pub const fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    /// Score text, returning only the final mood score
    pub fn score(&self, text: &str) -> f64 {
        self.analyze(text).score
    }

    /// Score text with a full breakdown
    ///
    /// Steps:
    /// 1. Tokenize; no tokens short-circuits to the baseline
    /// 2. Classify each token and apply negation and intensity
    /// 3. Damp the summed contributions by word count
    /// 4. Adjust by the positive and negative token ratios
    /// 5. Clamp to the score range
    pub fn analyze(&self, text: &str) -> SentimentReport {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            debug!("no tokens, returning baseline score");
            return SentimentReport::baseline();
        }

        let mut contributions = Vec::new();
        let mut positive_count = 0usize;
        let mut negative_count = 0usize;
        let mut neutral_count = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(polarity) = self.lexicon.classify(token) else {
                continue;
            };

            let negated = self.is_negated(&tokens, i);
            let multiplier = self.multiplier(&tokens, i);

            let base = match polarity {
                Polarity::Positive => {
                    positive_count += 1;
                    WORD_WEIGHT * multiplier
                }
                Polarity::Negative => {
                    negative_count += 1;
                    -WORD_WEIGHT * multiplier
                }
                Polarity::Neutral => {
                    neutral_count += 1;
                    0.0
                }
            };
            let contribution = if negated { -base } else { base };

            trace!(
                token = token.as_str(),
                polarity = polarity.as_str(),
                negated,
                multiplier,
                contribution,
                "classified token"
            );

            contributions.push(TokenContribution {
                token: token.clone(),
                position: i,
                polarity,
                negated,
                multiplier,
                contribution,
            });
        }

        let word_count = tokens.len();
        let words = word_count as f64;

        let mut raw_score = BASELINE_SCORE;
        for c in &contributions {
            raw_score += c.contribution;
        }
        let undamped = raw_score;

        let average_impact = (raw_score - BASELINE_SCORE) / words;
        raw_score = BASELINE_SCORE + average_impact * words * DAMPING;

        let positive_ratio = positive_count as f64 / words;
        let negative_ratio = negative_count as f64 / words;
        raw_score += positive_ratio * RATIO_WEIGHT - negative_ratio * RATIO_WEIGHT;

        let score = raw_score.clamp(MIN_SCORE, MAX_SCORE);

        debug!(
            word_count,
            positive_count,
            negative_count,
            neutral_count,
            score,
            "scored text"
        );

        SentimentReport {
            score,
            category: MoodCategory::from_score(score),
            word_count,
            positive_count,
            negative_count,
            neutral_count,
            raw_score: undamped,
            contributions,
        }
    }

    fn is_negated(&self, tokens: &[String], i: usize) -> bool {
        let start = i.saturating_sub(NEGATION_WINDOW);
        tokens[start..i]
            .iter()
            .any(|token| self.lexicon.is_negation(token))
    }

    fn multiplier(&self, tokens: &[String], i: usize) -> f64 {
        if i == 0 {
            return 1.0;
        }
        self.lexicon.intensity(&tokens[i - 1]).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_empty_is_baseline() {
        let scorer = ContextualScorer::new();
        assert_eq!(scorer.score(""), 5.0);
        assert_eq!(scorer.score("   "), 5.0);
        assert_eq!(scorer.score("?!... --"), 5.0);
        assert_eq!(scorer.analyze("").word_count, 0);
    }

    #[test]
    fn test_single_positive_word() {
        // 5 + 0.8 * 0.1 + 1/1 * 2
        approx_eq(ContextualScorer::new().score("happy"), 7.08);
    }

    #[test]
    fn test_single_negative_word() {
        approx_eq(ContextualScorer::new().score("miserable"), 2.92);
    }

    #[test]
    fn test_pure_positive_and_negative() {
        let scorer = ContextualScorer::new();
        approx_eq(scorer.score("happy joy love"), 7.24);
        approx_eq(scorer.score("sad angry hate"), 2.76);
    }

    #[test]
    fn test_negation_flips_contribution() {
        let scorer = ContextualScorer::new();
        let report = scorer.analyze("not happy");
        assert_eq!(report.positive_count, 1);
        assert!(report.contributions[0].negated);
        approx_eq(report.contributions[0].contribution, -0.8);
        approx_eq(report.score, 5.92);
        assert!(scorer.score("happy") > report.score);
    }

    #[test]
    fn test_negation_window_is_two_tokens() {
        let scorer = ContextualScorer::new();
        let near = scorer.analyze("not the happy");
        assert!(near.contributions[0].negated);

        let far = scorer.analyze("not the old happy");
        assert!(!far.contributions[0].negated);
    }

    #[test]
    fn test_apostrophe_negations_never_match() {
        // "don't" splits into "don" and "t", neither of which is a negation
        let report = ContextualScorer::new().analyze("don't worry");
        assert_eq!(report.negated_tokens().count(), 0);
    }

    #[test]
    fn test_intensifier_multiplies() {
        let scorer = ContextualScorer::new();
        let report = scorer.analyze("very happy");
        approx_eq(report.contributions[0].multiplier, 1.5);
        approx_eq(report.contributions[0].contribution, 1.2);
        approx_eq(report.score, 6.12);

        // same token count, no intensifier
        approx_eq(scorer.score("the happy"), 6.08);
        assert!(scorer.score("very happy") > scorer.score("the happy"));
        assert!(scorer.score("extremely sad") < scorer.score("the sad"));
    }

    #[test]
    fn test_unweighted_intensifier_defaults_to_one() {
        let report = ContextualScorer::new().analyze("pretty sad");
        approx_eq(report.contributions[0].multiplier, 1.0);
    }

    #[test]
    fn test_intensifier_only_looks_one_back() {
        let report = ContextualScorer::new().analyze("very old happy");
        approx_eq(report.contributions[0].multiplier, 1.0);
    }

    #[test]
    fn test_neutral_counts_but_contributes_nothing() {
        let report = ContextualScorer::new().analyze("today was okay");
        assert_eq!(report.neutral_count, 1);
        assert_eq!(report.word_count, 3);
        approx_eq(report.score, 5.0);
    }

    #[test]
    fn test_score_is_clamped() {
        let scorer = ContextualScorer::new();
        let glowing = "happy ".repeat(200);
        let bleak = "sad ".repeat(200);
        assert!(scorer.score(&glowing) <= 10.0);
        assert!(scorer.score(&bleak) >= 1.0);
        approx_eq(scorer.score(&bleak), 1.0);
    }

    #[test]
    fn test_raw_score_is_undamped() {
        let report = ContextualScorer::new().analyze("happy joy love");
        approx_eq(report.raw_score, 7.4);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let scorer = ContextualScorer::new();
        let text = "I am not very happy, but the day was okay!";
        assert_eq!(scorer.analyze(text), scorer.analyze(text));
    }
}

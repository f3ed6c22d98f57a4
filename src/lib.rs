//! # Mood Sentiment
//!
//! Lexicon-based mood scoring for free-form text. Text is mapped to a mood
//! score in `[1.0, 10.0]` together with one of five mood categories.
//!
//! ## Modules
//!
//! - `text` - Tokenization of raw text
//! - `sentiment` - Lexicon, scorers, mood categories and scoring strategies
//! - `analysis` - Text and file analysis with input limits and previews
//! - `config` - Application configuration
//! - `logging` - Tracing subscriber setup
//!
//! ## Example Usage
//!
//! ```
//! use mood_sentiment::{analyze_sentiment, mood_category, mood_label};
//!
//! let score = analyze_sentiment("I am really happy with how today went");
//! assert!(score > 5.0);
//! assert_eq!(mood_label(score), "Neutral");
//! assert_eq!(mood_category(score), 2);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod logging;
pub mod sentiment;
pub mod text;

// Re-exports for convenience
pub use analysis::{TextAnalysis, TextAnalyzer};
pub use config::{load_config, save_config, AppConfig};
pub use error::{Error, Result};
pub use sentiment::{
    ContextualScorer, FlatScorer, Lexicon, MoodCategory, Polarity, ScoringStrategy,
    SentimentReport, TokenContribution,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scoring constants shared by both strategies
pub mod defaults {
    /// Score returned for empty or unscoreable input
    pub const BASELINE_SCORE: f64 = 5.0;

    /// Lowest possible mood score
    pub const MIN_SCORE: f64 = 1.0;

    /// Highest possible mood score
    pub const MAX_SCORE: f64 = 10.0;

    /// Largest input accepted by the file analyzer, in bytes
    pub const MAX_INPUT_BYTES: u64 = 10_000;

    /// Number of characters kept in an analysis preview
    pub const PREVIEW_CHARS: usize = 100;
}

/// Score `text` with the canonical contextual scorer.
///
/// Total over all inputs: the result is always in `[1.0, 10.0]` and empty or
/// unscoreable text yields exactly `5.0`.
pub fn analyze_sentiment(text: &str) -> f64 {
    ContextualScorer::new().score(text)
}

/// Mood category index (`0..=4`) for a canonical score.
pub fn mood_category(score: f64) -> u8 {
    MoodCategory::from_score(score).index()
}

/// Canonical label for a score.
pub fn mood_label(score: f64) -> &'static str {
    MoodCategory::from_score(score).label()
}

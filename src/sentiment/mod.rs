//! # Sentiment Module
//!
//! Lexicon tables, mood scorers and mood categories.

mod flat;
pub mod lexicon;
mod mood;
mod scorer;
mod strategy;

pub use flat::FlatScorer;
pub use lexicon::{Lexicon, Polarity};
pub use mood::MoodCategory;
pub use scorer::{ContextualScorer, SentimentReport, TokenContribution};
pub use strategy::ScoringStrategy;

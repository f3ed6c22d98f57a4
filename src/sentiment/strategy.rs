//! # Scoring Strategies
//!
//! Names the two scoring behaviors so callers pick one explicitly.

use super::flat::FlatScorer;
use super::mood::MoodCategory;
use super::scorer::ContextualScorer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringStrategy {
    /// Lexicon with negation, intensifiers and ratio adjustment
    #[default]
    Contextual,
    /// Fixed step per exact word match, legacy thresholds
    Flat,
}

impl ScoringStrategy {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringStrategy::Contextual => "contextual",
            ScoringStrategy::Flat => "flat",
        }
    }

    /// Score text with this strategy
    pub fn score(&self, text: &str) -> f64 {
        match self {
            ScoringStrategy::Contextual => ContextualScorer::new().score(text),
            ScoringStrategy::Flat => FlatScorer::new().score(text),
        }
    }

    /// Category of a score produced by this strategy
    pub fn category(&self, score: f64) -> MoodCategory {
        match self {
            ScoringStrategy::Contextual => MoodCategory::from_score(score),
            ScoringStrategy::Flat => MoodCategory::from_flat_score(score),
        }
    }

    /// Label of a score produced by this strategy
    pub fn label(&self, score: f64) -> &'static str {
        self.category(score).label()
    }

    /// Score multiple texts
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<(f64, MoodCategory)> {
        texts
            .iter()
            .map(|text| {
                let score = self.score(text);
                (score, self.category(score))
            })
            .collect()
    }
}

impl fmt::Display for ScoringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contextual" => Ok(ScoringStrategy::Contextual),
            "flat" => Ok(ScoringStrategy::Flat),
            other => Err(format!("unknown scoring strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_contextual() {
        assert_eq!(ScoringStrategy::default(), ScoringStrategy::Contextual);
    }

    #[test]
    fn test_strategies_diverge() {
        // "lovely" only matches through substring containment
        assert!(ScoringStrategy::Contextual.score("lovely") > 5.0);
        assert_eq!(ScoringStrategy::Flat.score("lovely"), 5.0);
    }

    #[test]
    fn test_thresholds_per_strategy() {
        assert_eq!(ScoringStrategy::Contextual.label(6.0), "Neutral");
        assert_eq!(ScoringStrategy::Flat.label(6.0), "Positive");
        assert_eq!(ScoringStrategy::Contextual.category(8.2), MoodCategory::Positive);
        assert_eq!(ScoringStrategy::Flat.category(8.2), MoodCategory::VeryPositive);
    }

    #[test]
    fn test_parse() {
        assert_eq!("flat".parse::<ScoringStrategy>(), Ok(ScoringStrategy::Flat));
        assert_eq!(" Contextual ".parse::<ScoringStrategy>(), Ok(ScoringStrategy::Contextual));
        assert!("fuzzy".parse::<ScoringStrategy>().is_err());
    }

    #[test]
    fn test_batch() {
        let results = ScoringStrategy::Flat.analyze_batch(&["happy good great", "sad"]);
        assert_eq!(results[0], (6.5, MoodCategory::Positive));
        assert_eq!(results[1], (4.5, MoodCategory::Neutral));
    }
}

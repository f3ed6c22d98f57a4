//! # Mood Lexicon
//!
//! Static word tables for rule-based mood scoring.
//!
//! Polarity lookups match by substring containment in either direction, so
//! `"lovely"` matches `"love"` and `"i"` matches `"amazing"`. Negation and
//! intensifier lookups are exact. Entries containing spaces or apostrophes
//! (`"a bit"`, `"can't"`) can never equal a token and are kept as listed.

use serde::{Deserialize, Serialize};

/// Words carrying positive mood
pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "love", "great", "excellent", "amazing",
    "wonderful", "fantastic", "good", "nice", "perfect",
    "awesome", "brilliant", "cheerful", "delighted", "excited",
    "grateful", "pleased", "satisfied", "content", "optimistic",
    "thrilled", "ecstatic", "blissful", "peaceful", "confident",
    "successful", "proud", "accomplished", "motivated", "inspired",
    "hopeful", "relaxed", "energetic", "vibrant", "radiant",
];

/// Words carrying negative mood
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "hate", "terrible", "awful", "horrible",
    "depressed", "bad", "worse", "worst", "frustrated",
    "disappointed", "upset", "worried", "anxious", "stressed",
    "overwhelmed", "exhausted", "lonely", "isolated", "hopeless",
    "worthless", "guilty", "ashamed", "rejected", "abandoned",
    "betrayed", "hurt", "broken", "devastated", "miserable",
    "desperate", "fearful", "panic", "dread", "doom",
];

/// Words that are recognized but carry no mood
pub const NEUTRAL_WORDS: &[&str] = &[
    "okay", "fine", "normal", "average", "regular", "typical",
    "standard", "ordinary", "usual", "common", "basic",
    "simple", "plain", "neutral", "balanced", "stable",
];

/// Words that scale the following word
pub const INTENSIFIERS: &[&str] = &[
    "very", "extremely", "incredibly", "absolutely", "completely",
    "totally", "really", "quite", "rather", "fairly", "pretty",
    "somewhat", "slightly", "a bit", "kind of", "sort of",
];

/// Words that flip the polarity of the next two words
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere",
    "neither", "none", "cannot", "can't", "won't", "wouldn't",
    "shouldn't", "couldn't", "don't", "doesn't", "didn't",
];

/// Polarity bucket of a classified token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

/// Mood lexicon backed by the static word tables
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
    intensifiers: &'static [&'static str],
    negations: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create the standard mood lexicon
    pub const fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS,
            negative: NEGATIVE_WORDS,
            neutral: NEUTRAL_WORDS,
            intensifiers: INTENSIFIERS,
            negations: NEGATIONS,
        }
    }

    /// Classify a lowercase token
    ///
    /// Positive is checked first, then negative, then neutral; the first
    /// table with a containment match wins.
    pub fn classify(&self, token: &str) -> Option<Polarity> {
        if contains_either_way(self.positive, token) {
            Some(Polarity::Positive)
        } else if contains_either_way(self.negative, token) {
            Some(Polarity::Negative)
        } else if contains_either_way(self.neutral, token) {
            Some(Polarity::Neutral)
        } else {
            None
        }
    }

    /// Check if a token is a negation
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(&token)
    }

    /// Check if a token is an intensifier
    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifiers.contains(&token)
    }

    /// Get intensifier multiplier
    ///
    /// `None` for tokens that are not intensifiers. Intensifiers without an
    /// explicit weight (`"fairly"`, `"pretty"`, ...) scale by `1.0`.
    pub fn intensity(&self, token: &str) -> Option<f64> {
        if self.is_intensifier(token) {
            Some(intensity_multiplier(token))
        } else {
            None
        }
    }
}

/// Fixed multiplier table for intensifiers
pub fn intensity_multiplier(word: &str) -> f64 {
    match word {
        "very" | "extremely" | "incredibly" => 1.5,
        "absolutely" | "completely" | "totally" => 1.7,
        "quite" | "rather" | "really" => 1.3,
        "slightly" | "somewhat" | "a bit" => 0.7,
        _ => 1.0,
    }
}

fn contains_either_way(entries: &[&str], token: &str) -> bool {
    entries
        .iter()
        .any(|entry| token.contains(entry) || entry.contains(token))
}

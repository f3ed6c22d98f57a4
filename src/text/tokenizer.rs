//! # Tokenizer
//!
//! Splits raw text into lowercase alphanumeric tokens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is not an ASCII letter or digit separates tokens
static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid separator pattern"));

/// Non-word runs, as split by the flat scorer (underscore counts as a word character)
static NON_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9_]+").expect("valid non-word pattern"));

/// Tokenize text for the contextual scorer
///
/// Steps:
/// 1. Convert to lowercase
/// 2. Treat every character outside `[a-z0-9]` as a separator
/// 3. Drop empty pieces, so separator runs and edges collapse
///
/// Apostrophes and hyphens are hard boundaries: `"don't"` yields
/// `["don", "t"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowercase = text.to_lowercase();

    SEPARATOR_REGEX
        .split(&lowercase)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize text the way the flat scorer does.
pub fn flat_tokens(text: &str) -> Vec<String> {
    let lowercase = text.to_lowercase();

    NON_WORD_REGEX
        .split(&lowercase)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Count words by splitting on single spaces.
///
/// This is the display word count shown next to a score, not the token
/// count used by the scorer: `"a  b"` counts three words and `""` counts one.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

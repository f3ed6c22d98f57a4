//! # Mood Categories
//!
//! Maps a mood score to one of five ordered categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    /// Very negative mood (score < 2.0)
    VeryNegative,
    /// Negative mood (2.0 <= score < 3.5)
    Negative,
    /// Neutral mood (3.5 <= score < 6.5)
    Neutral,
    /// Positive mood (6.5 <= score < 8.5)
    Positive,
    /// Very positive mood (score >= 8.5)
    VeryPositive,
}

impl MoodCategory {
    /// All categories, from most negative to most positive
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::VeryNegative,
        MoodCategory::Negative,
        MoodCategory::Neutral,
        MoodCategory::Positive,
        MoodCategory::VeryPositive,
    ];

    /// Convert a contextual score to a category
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            MoodCategory::VeryPositive
        } else if score >= 6.5 {
            MoodCategory::Positive
        } else if score >= 3.5 {
            MoodCategory::Neutral
        } else if score >= 2.0 {
            MoodCategory::Negative
        } else {
            MoodCategory::VeryNegative
        }
    }

    /// Convert a flat-strategy score to a category
    pub fn from_flat_score(score: f64) -> Self {
        if score >= 8.0 {
            MoodCategory::VeryPositive
        } else if score >= 6.0 {
            MoodCategory::Positive
        } else if score >= 4.0 {
            MoodCategory::Neutral
        } else if score >= 2.0 {
            MoodCategory::Negative
        } else {
            MoodCategory::VeryNegative
        }
    }

    /// Category index, 0 (very negative) to 4 (very positive)
    pub fn index(&self) -> u8 {
        match self {
            MoodCategory::VeryNegative => 0,
            MoodCategory::Negative => 1,
            MoodCategory::Neutral => 2,
            MoodCategory::Positive => 3,
            MoodCategory::VeryPositive => 4,
        }
    }

    /// Canonical label
    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::VeryNegative => "Very Negative",
            MoodCategory::Negative => "Negative",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Positive => "Positive",
            MoodCategory::VeryPositive => "Very Positive",
        }
    }

    /// Check if mood is positive or very positive
    pub fn is_positive(&self) -> bool {
        matches!(self, MoodCategory::Positive | MoodCategory::VeryPositive)
    }

    /// Check if mood is negative or very negative
    pub fn is_negative(&self) -> bool {
        matches!(self, MoodCategory::Negative | MoodCategory::VeryNegative)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(MoodCategory::from_score(1.0), MoodCategory::VeryNegative);
        assert_eq!(MoodCategory::from_score(2.5), MoodCategory::Negative);
        assert_eq!(MoodCategory::from_score(5.0), MoodCategory::Neutral);
        assert_eq!(MoodCategory::from_score(7.0), MoodCategory::Positive);
        assert_eq!(MoodCategory::from_score(10.0), MoodCategory::VeryPositive);
    }

    #[test]
    fn test_lower_bounds_are_inclusive() {
        assert_eq!(MoodCategory::from_score(8.5), MoodCategory::VeryPositive);
        assert_eq!(MoodCategory::from_score(8.4999), MoodCategory::Positive);
        assert_eq!(MoodCategory::from_score(6.5), MoodCategory::Positive);
        assert_eq!(MoodCategory::from_score(6.4999), MoodCategory::Neutral);
        assert_eq!(MoodCategory::from_score(3.5), MoodCategory::Neutral);
        assert_eq!(MoodCategory::from_score(3.4999), MoodCategory::Negative);
        assert_eq!(MoodCategory::from_score(2.0), MoodCategory::Negative);
        assert_eq!(MoodCategory::from_score(1.9999), MoodCategory::VeryNegative);
    }

    #[test]
    fn test_flat_thresholds() {
        assert_eq!(MoodCategory::from_flat_score(8.0), MoodCategory::VeryPositive);
        assert_eq!(MoodCategory::from_flat_score(6.0), MoodCategory::Positive);
        assert_eq!(MoodCategory::from_flat_score(5.9), MoodCategory::Neutral);
        assert_eq!(MoodCategory::from_flat_score(4.0), MoodCategory::Neutral);
        assert_eq!(MoodCategory::from_flat_score(3.5), MoodCategory::Negative);
        assert_eq!(MoodCategory::from_flat_score(1.5), MoodCategory::VeryNegative);
    }

    #[test]
    fn test_index_and_label() {
        for (i, category) in MoodCategory::ALL.iter().enumerate() {
            assert_eq!(category.index() as usize, i);
        }
        assert_eq!(MoodCategory::VeryPositive.label(), "Very Positive");
        assert_eq!(MoodCategory::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_polarity_helpers() {
        assert!(MoodCategory::VeryPositive.is_positive());
        assert!(MoodCategory::Negative.is_negative());
        assert!(!MoodCategory::Neutral.is_positive());
        assert!(!MoodCategory::Neutral.is_negative());
    }
}

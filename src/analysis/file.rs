//! # Text and File Analysis
//!
//! Reads text or text files within the configured limits and summarizes
//! their mood.

use crate::config::InputSettings;
use crate::error::{Error, Result};
use crate::sentiment::{ContextualScorer, MoodCategory, ScoringStrategy, SentimentReport};
use crate::text::word_count;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Mood summary of one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// File name, or a caller-chosen label for literal text
    pub source: String,
    /// Space-separated word count of the raw text
    pub word_count: usize,
    /// Mood score (1 to 10)
    pub mood_score: f64,
    /// Mood label
    pub mood_label: String,
    /// Mood category
    pub mood_category: MoodCategory,
    /// Strategy that produced the score
    pub strategy: ScoringStrategy,
    /// Leading characters of the text
    pub preview: String,
    /// Contextual breakdown, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<SentimentReport>,
    /// Timestamp of analysis
    pub analyzed_at: DateTime<Utc>,
}

/// Text analyzer applying input limits and a scoring strategy
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    strategy: ScoringStrategy,
    input: InputSettings,
    detailed: bool,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(ScoringStrategy::default())
    }
}

impl TextAnalyzer {
    /// Create an analyzer with default input settings
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self {
            strategy,
            input: InputSettings::default(),
            detailed: false,
        }
    }

    /// Set input settings
    pub fn with_input(mut self, input: InputSettings) -> Self {
        self.input = input;
        self
    }

    /// Attach the contextual breakdown to every analysis
    pub fn with_detail(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Strategy used for scoring
    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    /// Analyze literal text
    ///
    /// Fails only when the text is larger than the configured limit.
    pub fn analyze_text(&self, source: &str, text: &str) -> Result<TextAnalysis> {
        self.check_size(text.len() as u64)?;
        Ok(self.summarize(source, text))
    }

    /// Analyze text read from `reader`
    ///
    /// At most one byte past the limit is read, so unbounded sources (pipes,
    /// device files) cannot exhaust memory. Invalid UTF-8 is replaced with
    /// U+FFFD, which the tokenizer treats as a separator.
    pub fn analyze_reader<R: Read>(&self, source: &str, reader: R) -> Result<TextAnalysis> {
        let bytes = read_capped(reader, self.input.max_bytes)?;
        let text = decode_lossy(source, &bytes);
        Ok(self.summarize(source, &text))
    }

    /// Analyze a text file
    ///
    /// The extension is checked before the file is opened; the size limit is
    /// enforced on the bytes actually read, whatever the file metadata says.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<TextAnalysis> {
        let path = path.as_ref();
        if !self.input.accepts(path) {
            warn!(path = %path.display(), "rejected file with unsupported extension");
            return Err(Error::UnsupportedFile(path.to_path_buf()));
        }

        let file = File::open(path)?;
        // Early exit for regular files; /proc entries and FIFOs report 0
        self.check_size(file.metadata()?.len())?;

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let analysis = self.analyze_reader(&source, file)?;
        info!(
            file = %source,
            score = analysis.mood_score,
            label = %analysis.mood_label,
            "analyzed file"
        );
        Ok(analysis)
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if size > self.input.max_bytes {
            warn!(size, limit = self.input.max_bytes, "input too large");
            return Err(Error::InputTooLarge {
                size,
                limit: self.input.max_bytes,
            });
        }
        Ok(())
    }

    fn summarize(&self, source: &str, text: &str) -> TextAnalysis {
        let (mood_score, report) = match self.strategy {
            ScoringStrategy::Contextual if self.detailed => {
                let report = ContextualScorer::new().analyze(text);
                (report.score, Some(report))
            }
            strategy => (strategy.score(text), None),
        };
        let mood_category = self.strategy.category(mood_score);

        debug!(source, mood_score, strategy = %self.strategy, "summarized text");

        TextAnalysis {
            source: source.to_string(),
            word_count: word_count(text),
            mood_score,
            mood_label: mood_category.label().to_string(),
            mood_category,
            strategy: self.strategy,
            preview: preview(text, self.input.preview_chars),
            report,
            analyzed_at: Utc::now(),
        }
    }
}

/// Read at most `max_bytes` from `reader`
///
/// Fails with [`Error::InputTooLarge`] as soon as one more byte is
/// available; the reported size is then `max_bytes + 1`, a lower bound.
pub fn read_capped<R: Read>(reader: R, max_bytes: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut bytes)?;

    let size = bytes.len() as u64;
    if size > max_bytes {
        warn!(size, limit = max_bytes, "input too large");
        return Err(Error::InputTooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

fn decode_lossy(source: &str, bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(source, "input is not valid UTF-8, replaced invalid bytes");
            text
        }
    }
}

/// First `max_chars` characters of `text`, with `"..."` appended when cut
///
/// Counts Unicode scalar values, so a character outside the Basic
/// Multilingual Plane (most emoji) counts once rather than as two UTF-16
/// code units.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

//! # Analysis Module
//!
//! Scores text and text files, producing the summary shown to users.

mod file;

pub use file::{preview, read_capped, TextAnalysis, TextAnalyzer};

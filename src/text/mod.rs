//! # Text Module
//!
//! Tokenization of raw text for mood scoring.

mod tokenizer;

pub use tokenizer::{flat_tokens, tokenize, word_count};

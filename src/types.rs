//! Core types shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A sentence as an ordered sequence of word tokens.
///
/// Sentences are produced once by the tokenizer and stay immutable for the
/// duration of a summarization run. `index` is the sentence's position in
/// the original document; the similarity matrix and the score vector are
/// both addressed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Word tokens in document order, punctuation included.
    pub tokens: Vec<String>,
    /// Position in the original document.
    pub index: usize,
}

impl Sentence {
    /// Create a sentence from owned tokens.
    pub fn new(tokens: Vec<String>, index: usize) -> Self {
        Self { tokens, index }
    }

    /// Create a sentence from string slices.
    pub fn from_words(words: &[&str], index: usize) -> Self {
        Self {
            tokens: words.iter().map(|w| w.to_string()).collect(),
            index,
        }
    }

    /// Number of tokens in the sentence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Configuration for the ranking stage of the summarizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank (typically 0.85).
    pub damping: f64,
    /// Maximum number of power iterations.
    pub max_iterations: usize,
    /// L1 convergence threshold.
    pub convergence_threshold: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }
}

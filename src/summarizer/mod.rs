//! Extractive summarization pipeline
//!
//! [`Summarizer`] wires the stages together: similarity graph construction,
//! PageRank scoring, and top-K selection/assembly. One call owns all of its
//! intermediate state; nothing is cached across runs.

pub mod selector;

use serde::Serialize;

use crate::error::SummarizeError;
use crate::graph::builder::SimilarityGraphBuilder;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::weighted::WeightedPageRank;
use crate::summarizer::selector::{render_sentence, SentenceSelector};
use crate::types::{Sentence, SummarizerConfig};

/// A sentence selected for the summary, with its rank score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSentence {
    /// Position in the original document.
    pub index: usize,
    /// Stationary-distribution score assigned by the ranker.
    pub score: f64,
    /// Display text (tokens re-joined).
    pub text: String,
}

/// Result of a summarization run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Final summary text, sentences in rank order.
    pub text: String,
    /// Selected sentences with their scores, in rank order.
    pub sentences: Vec<ScoredSentence>,
    /// Number of ranking iterations performed.
    pub iterations: usize,
    /// Whether the ranking converged within its iteration budget.
    pub converged: bool,
}

/// Extractive summarizer over tokenized sentences.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
}

impl Summarizer {
    /// Create a summarizer with default config and no stopword filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom ranking config.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::empty(),
        }
    }

    /// Set the stopword filter applied during similarity scoring.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize tokenized sentences into the `top_n` most central ones.
    ///
    /// `top_n` is clamped to the number of available sentences. Fails fast
    /// on an empty sentence list or a zero `top_n`; a non-converging
    /// ranking run is logged and continues with best-effort scores.
    pub fn summarize(
        &self,
        sentences: &[Sentence],
        top_n: usize,
    ) -> Result<Summary, SummarizeError> {
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }
        if top_n == 0 {
            return Err(SummarizeError::ZeroSummaryLength);
        }

        let graph = SimilarityGraphBuilder::new()
            .with_stopwords(self.stopwords.clone())
            .build(sentences);
        tracing::debug!(
            sentences = sentences.len(),
            "built sentence similarity graph"
        );

        let result = WeightedPageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
            .run(&graph);
        if !result.converged {
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                "ranking did not converge; continuing with last iterate"
            );
        }

        let selected = SentenceSelector::new(top_n).select(sentences, &result.scores);
        let picked: Vec<&Sentence> = selected.iter().map(|(s, _)| *s).collect();
        let text = SentenceSelector::assemble(&picked);
        let scored = selected
            .into_iter()
            .map(|(sentence, score)| ScoredSentence {
                index: sentence.index,
                score,
                text: render_sentence(sentence),
            })
            .collect();

        Ok(Summary {
            text,
            sentences: scored,
            iterations: result.iterations,
            converged: result.converged,
        })
    }
}

/// Summarize with default settings and no stopword filtering.
///
/// Convenience wrapper returning only the summary text.
pub fn summarize(sentences: &[Sentence], top_n: usize) -> Result<String, SummarizeError> {
    Summarizer::new()
        .summarize(sentences, top_n)
        .map(|summary| summary.text)
}

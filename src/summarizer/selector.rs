//! Top-K sentence selection and summary assembly
//!
//! Selected sentences are emitted in rank order (highest score first), not
//! original document order — the most important sentence leads the summary.
//! Ties are broken by original position so output is deterministic.
//!
//! Assembly follows Khmer writing conventions: tokens re-join with the
//! zero-width space, sentences join with the khan mark, and the artifacts
//! of naive concatenation (doubled khan, space before khan) collapse to the
//! single canonical form.

use crate::types::Sentence;

/// Invisible separator placed between words inside a sentence.
const WORD_JOINER: &str = "\u{200B}";

/// Khmer sentence terminator (khan).
const KHAN: &str = "។";

/// Separator placed between selected sentences before cleanup.
const SENTENCE_JOINER: &str = "។ ";

/// Selects the top-ranked sentences and assembles the summary text.
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    top_n: usize,
}

impl SentenceSelector {
    /// Create a selector for the `top_n` highest-scored sentences.
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Pick the top sentences by score.
    ///
    /// Sorting is score-descending with ties broken by original index
    /// ascending. The requested count is clamped to the number of available
    /// sentences, so the result always has `min(top_n, N)` entries and no
    /// duplicates.
    pub fn select<'a>(
        &self,
        sentences: &'a [Sentence],
        scores: &[f64],
    ) -> Vec<(&'a Sentence, f64)> {
        let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.top_n.min(sentences.len()));

        ranked
            .into_iter()
            .map(|(index, score)| (&sentences[index], score))
            .collect()
    }

    /// Join the selected sentences into final display text.
    pub fn assemble(selected: &[&Sentence]) -> String {
        let joined: Vec<String> = selected.iter().map(|s| render_sentence(s)).collect();
        joined
            .join(SENTENCE_JOINER)
            .replace("។។", KHAN)
            .replace(" ។", KHAN)
    }
}

/// Join one sentence's tokens into display text.
pub fn render_sentence(sentence: &Sentence) -> String {
    sentence.tokens.join(WORD_JOINER)
}

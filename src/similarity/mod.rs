//! Pairwise sentence similarity
//!
//! Sentences are compared by building frequency vectors over the combined
//! vocabulary of the pair and taking the cosine of the angle between them.
//! The vocabulary index lives only for one pair; nothing is cached across
//! calls, so sentence pairs can be scored in any order or in parallel.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// Build index-aligned frequency vectors for a sentence pair.
///
/// The vocabulary is the set union of both sentences' lower-cased tokens;
/// each term gets one vector slot via an explicit term-to-slot map for O(1)
/// lookups. Stopword occurrences are not counted, so their slots stay zero
/// from that sentence's side. A sentence made entirely of stopwords yields
/// an all-zero vector.
pub fn pair_vectors(
    a: &Sentence,
    b: &Sentence,
    stopwords: &StopwordFilter,
) -> (Vec<f64>, Vec<f64>) {
    let lower_a: Vec<String> = a.tokens.iter().map(|t| t.to_lowercase()).collect();
    let lower_b: Vec<String> = b.tokens.iter().map(|t| t.to_lowercase()).collect();

    let mut slots: FxHashMap<&str, usize> =
        FxHashMap::with_capacity_and_hasher(lower_a.len() + lower_b.len(), Default::default());
    for term in lower_a.iter().chain(lower_b.iter()) {
        let next = slots.len();
        slots.entry(term.as_str()).or_insert(next);
    }

    let mut u = vec![0.0; slots.len()];
    let mut v = vec![0.0; slots.len()];
    for term in &lower_a {
        if stopwords.is_stopword(term) {
            continue;
        }
        u[slots[term.as_str()]] += 1.0;
    }
    for term in &lower_b {
        if stopwords.is_stopword(term) {
            continue;
        }
        v[slots[term.as_str()]] += 1.0;
    }

    (u, v)
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude, so sentences with no
/// countable tokens never produce a NaN score.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());

    let dot: f64 = u.iter().zip(v.iter()).map(|(x, y)| x * y).sum();
    let norm_u = u.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_v = v.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }
    dot / (norm_u * norm_v)
}

/// Similarity between two sentences in `[0, 1]`.
pub fn sentence_similarity(a: &Sentence, b: &Sentence, stopwords: &StopwordFilter) -> f64 {
    let (u, v) = pair_vectors(a, b, stopwords);
    cosine_similarity(&u, &v)
}

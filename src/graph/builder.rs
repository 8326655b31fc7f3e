//! Similarity graph construction
//!
//! Every pair of sentences is scored with cosine similarity and the score
//! becomes the edge weight in a dense undirected graph. Similarity is
//! symmetric, so only the upper triangle is computed and mirrored. Pairwise
//! scoring is independent per pair; for larger documents the rows fan out
//! on the rayon pool.

use crate::graph::dense::DenseGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::similarity::sentence_similarity;
use crate::types::Sentence;
use rayon::prelude::*;

/// Sentence count above which pairwise scoring runs in parallel.
///
/// Below this the per-pair work is too small to amortize the pool overhead.
const PARALLEL_THRESHOLD: usize = 64;

/// Builds the N×N sentence similarity graph.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder {
    stopwords: StopwordFilter,
}

impl SimilarityGraphBuilder {
    /// Create a builder with no stopword filtering.
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::empty(),
        }
    }

    /// Set the stopword filter applied during vectorization.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Build the similarity graph for the full sentence array.
    ///
    /// The result is symmetric with a zero diagonal and entries in `[0, 1]`.
    pub fn build(&self, sentences: &[Sentence]) -> DenseGraph {
        if sentences.len() < PARALLEL_THRESHOLD {
            self.build_sequential(sentences)
        } else {
            self.build_parallel(sentences)
        }
    }

    fn build_sequential(&self, sentences: &[Sentence]) -> DenseGraph {
        let n = sentences.len();
        let mut graph = DenseGraph::new(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let w = sentence_similarity(&sentences[i], &sentences[j], &self.stopwords);
                graph.set_weight(i, j, w);
                graph.set_weight(j, i, w);
            }
        }

        graph
    }

    fn build_parallel(&self, sentences: &[Sentence]) -> DenseGraph {
        let n = sentences.len();

        // Score each upper-triangle row independently, then mirror.
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| sentence_similarity(&sentences[i], &sentences[j], &self.stopwords))
                    .collect()
            })
            .collect();

        let mut graph = DenseGraph::new(n);
        for (i, row) in rows.into_iter().enumerate() {
            for (offset, w) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                graph.set_weight(i, j, w);
                graph.set_weight(j, i, w);
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        vec![
            Sentence::from_words(&["cat", "sat", "mat"], 0),
            Sentence::from_words(&["cat", "sat", "hat"], 1),
            Sentence::from_words(&["dog", "ran", "far"], 2),
        ]
    }

    #[test]
    fn test_diagonal_is_zero() {
        let graph = SimilarityGraphBuilder::new().build(&sentences());
        for i in 0..graph.num_nodes {
            assert_eq!(graph.weight(i, i), 0.0);
        }
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let graph = SimilarityGraphBuilder::new().build(&sentences());
        for i in 0..graph.num_nodes {
            for j in 0..graph.num_nodes {
                assert!((graph.weight(i, j) - graph.weight(j, i)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_entries_within_bounds() {
        let graph = SimilarityGraphBuilder::new().build(&sentences());
        for i in 0..graph.num_nodes {
            for &w in graph.row(i) {
                assert!((0.0..=1.0 + 1e-12).contains(&w));
            }
        }
    }

    #[test]
    fn test_related_sentences_score_higher() {
        let graph = SimilarityGraphBuilder::new().build(&sentences());
        // Sentences 0 and 1 share two of three tokens; sentence 2 is disjoint.
        assert!(graph.weight(0, 1) > graph.weight(0, 2));
        assert_eq!(graph.weight(0, 2), 0.0);
        assert_eq!(graph.weight(1, 2), 0.0);
    }

    #[test]
    fn test_empty_input() {
        let graph = SimilarityGraphBuilder::new().build(&[]);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_single_sentence() {
        let graph =
            SimilarityGraphBuilder::new().build(&[Sentence::from_words(&["alone"], 0)]);
        assert_eq!(graph.num_nodes, 1);
        assert_eq!(graph.dangling_nodes(), vec![0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Enough sentences to cross the parallel threshold, built from a
        // deterministic cyclic vocabulary.
        let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
        let many: Vec<Sentence> = (0..80)
            .map(|i| {
                Sentence::from_words(
                    &[words[i % 6], words[(i + 1) % 6], words[(i + 2) % 6]],
                    i,
                )
            })
            .collect();

        let builder = SimilarityGraphBuilder::new();
        let parallel = builder.build(&many);
        let sequential = builder.build_sequential(&many);

        assert_eq!(parallel.num_nodes, sequential.num_nodes);
        for i in 0..parallel.num_nodes {
            for j in 0..parallel.num_nodes {
                assert!((parallel.weight(i, j) - sequential.weight(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_stopword_filter_applied() {
        let stopwords = StopwordFilter::from_list(&["the"]);
        let sents = vec![
            Sentence::from_words(&["the", "cat"], 0),
            Sentence::from_words(&["the", "dog"], 1),
        ];

        let with_filter = SimilarityGraphBuilder::new()
            .with_stopwords(stopwords)
            .build(&sents);
        let without_filter = SimilarityGraphBuilder::new().build(&sents);

        // "the" is the only shared term; filtering it disconnects the pair.
        assert_eq!(with_filter.weight(0, 1), 0.0);
        assert!(without_filter.weight(0, 1) > 0.0);
    }
}

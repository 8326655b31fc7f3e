//! Weighted PageRank via power iteration
//!
//! Implements the classic damped PageRank over the dense similarity graph.
//! Each iteration redistributes every node's score to its neighbors in
//! proportion to edge weight; isolated nodes spread their mass uniformly,
//! so they still end up holding the teleportation share.

use super::PageRankResult;
use crate::graph::dense::DenseGraph;

/// Weighted PageRank implementation
#[derive(Debug, Clone)]
pub struct WeightedPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 score delta
    pub threshold: f64,
}

impl Default for WeightedPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl WeightedPageRank {
    /// Create a new WeightedPageRank with default settings.
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
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph.
    ///
    /// Returns the last iterate even if convergence wasn't achieved, with
    /// `converged = false`; callers decide whether to log or reject.
    pub fn run(&self, graph: &DenseGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly.
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        // Row sums are fixed for the whole run; precompute them once.
        let total_weights: Vec<f64> = (0..n).map(|i| graph.node_total_weight(i)).collect();
        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Mass held by isolated sentences is spread uniformly.
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores through edges proportionally to weight.
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = total_weights[node];
                if total_weight > 0.0 {
                    let scale = self.damping * node_score / total_weight;
                    for (neighbor, &weight) in graph.row(node).iter().enumerate() {
                        if weight > 0.0 {
                            new_scores[neighbor] += scale * weight;
                        }
                    }
                }
            }

            // Convergence delta (L1 norm).
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Scores already sum to ~1; renormalize for numerical stability.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_triangle_graph() -> DenseGraph {
        let mut g = DenseGraph::new(3);
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            g.set_weight(a, b, 1.0);
            g.set_weight(b, a, 1.0);
        }
        g
    }

    fn build_weighted_pair_plus_outlier() -> DenseGraph {
        // Nodes 0 and 1 strongly connected, node 2 isolated.
        let mut g = DenseGraph::new(3);
        g.set_weight(0, 1, 0.9);
        g.set_weight(1, 0, 0.9);
        g
    }

    #[test]
    fn test_uniform_complete_graph_equal_scores() {
        let graph = build_triangle_graph();
        let result = WeightedPageRank::new().run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_weighted_pair_plus_outlier();
        let result = WeightedPageRank::new().run(&graph);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scores_non_negative() {
        let graph = build_weighted_pair_plus_outlier();
        let result = WeightedPageRank::new().run(&graph);
        assert!(result.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_connected_pair_outranks_isolated_node() {
        let graph = build_weighted_pair_plus_outlier();
        let result = WeightedPageRank::new().run(&graph);

        assert!(result.scores[0] > result.scores[2]);
        assert!(result.scores[1] > result.scores[2]);
        // The isolated node still holds a residual teleportation share.
        assert!(result.scores[2] > 0.0);
    }

    #[test]
    fn test_all_zero_weights_yields_uniform() {
        let graph = DenseGraph::new(4);
        let result = WeightedPageRank::new().run(&graph);

        // Every node is dangling: the distribution stays uniform.
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_node() {
        let graph = DenseGraph::new(1);
        let result = WeightedPageRank::new().run(&graph);

        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DenseGraph::default();
        let result = WeightedPageRank::new().run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_triangle_graph();
        let result = WeightedPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0) // Never converge
            .run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        // Last iterate is still a valid distribution.
        assert_eq!(result.scores.len(), 3);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_damping_factor() {
        // A hub: node 0 connected to everything, spokes only to the hub.
        let mut graph = DenseGraph::new(4);
        for spoke in 1..4 {
            graph.set_weight(0, spoke, 1.0);
            graph.set_weight(spoke, 0, 1.0);
        }

        let low = WeightedPageRank::new().with_damping(0.5).run(&graph);
        let high = WeightedPageRank::new().with_damping(0.95).run(&graph);

        // Higher damping follows edges more, so the hub advantage grows.
        let advantage_low = low.scores[0] - low.scores[1];
        let advantage_high = high.scores[0] - high.scores[1];
        assert!(advantage_high > advantage_low);
    }
}

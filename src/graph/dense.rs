//! Dense adjacency-matrix graph representation
//!
//! The sentence similarity graph is complete in the typical case (most
//! sentence pairs share at least one term), so a dense N×N weight matrix
//! beats sparse storage: PageRank's inner loop becomes a contiguous row
//! scan.

/// An undirected weighted graph stored as a row-major N×N matrix.
///
/// `weight(i, j)` and `weight(j, i)` hold the same value and the diagonal
/// is always zero; self-loops are never stored.
#[derive(Debug, Clone)]
pub struct DenseGraph {
    /// Number of nodes.
    pub num_nodes: usize,
    /// Row-major edge weights, `num_nodes * num_nodes` entries.
    weights: Vec<f64>,
}

impl DenseGraph {
    /// Create a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            weights: vec![0.0; num_nodes * num_nodes],
        }
    }

    /// Get the weight of the edge between two nodes.
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.num_nodes + to]
    }

    /// Set the weight of one directed entry.
    ///
    /// Diagonal writes are ignored so the zero-diagonal invariant cannot be
    /// broken by callers.
    pub fn set_weight(&mut self, from: usize, to: usize, weight: f64) {
        if from == to {
            return;
        }
        self.weights[from * self.num_nodes + to] = weight;
    }

    /// The full weight row of a node.
    pub fn row(&self, node: usize) -> &[f64] {
        let start = node * self.num_nodes;
        &self.weights[start..start + self.num_nodes]
    }

    /// Iterate over the neighbors of a node with non-zero edge weight.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|(_, &w)| w > 0.0)
            .map(|(i, &w)| (i, w))
    }

    /// Total outgoing weight of a node.
    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.row(node).iter().sum()
    }

    /// Nodes with no outgoing weight (sentences similar to nothing).
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes)
            .filter(|&n| self.node_total_weight(n) == 0.0)
            .collect()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

impl Default for DenseGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

//! Compressed Sparse Row (CSR) graph representation
//!
//! The frozen form of the similarity graph. Every node keeps its neighbors
//! in one contiguous slice, sorted by node ID, which is what PageRank's power
//! iteration walks on every pass.

use super::builder::GraphBuilder;

/// A frozen, undirected similarity graph
///
/// Each undirected edge is stored once per endpoint.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    pub num_nodes: usize,
    /// Node i's neighbors are at offsets[i]..offsets[i+1]
    pub offsets: Vec<usize>,
    pub neighbors: Vec<u32>,
    /// Similarity of each stored edge, parallel to `neighbors`
    pub weights: Vec<f64>,
    /// Weighted degree: sum of a node's edge weights
    pub strength: Vec<f64>,
    /// Sentence index each node stands for
    pub sentences: Vec<usize>,
}

impl CsrGraph {
    /// Freeze a [`GraphBuilder`]
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut offsets = Vec::with_capacity(num_nodes + 1);
        let mut neighbors = Vec::with_capacity(builder.edge_count() * 2);
        let mut weights = Vec::with_capacity(builder.edge_count() * 2);
        let mut strength = Vec::with_capacity(num_nodes);
        let mut sentences = Vec::with_capacity(num_nodes);

        offsets.push(0);
        for (_, node) in builder.nodes() {
            let mut edges: Vec<(u32, f64)> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_unstable_by_key(|&(target, _)| target);

            strength.push(edges.iter().map(|&(_, w)| w).sum());
            sentences.push(node.sentence);
            for (target, weight) in edges {
                neighbors.push(target);
                weights.push(weight);
            }
            offsets.push(neighbors.len());
        }

        Self {
            num_nodes,
            offsets,
            neighbors,
            weights,
            strength,
            sentences,
        }
    }

    /// `(neighbor, weight)` pairs of a node
    pub fn edges(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let range = self.offsets[node as usize]..self.offsets[node as usize + 1];
        self.neighbors[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// Sentence index a node stands for
    pub fn sentence(&self, node: u32) -> usize {
        self.sentences[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            offsets: vec![0],
            neighbors: Vec::new(),
            weights: Vec::new(),
            strength: Vec::new(),
            sentences: Vec::new(),
        }
    }
}

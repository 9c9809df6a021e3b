//! Similarity graph builder
//!
//! Nodes are sentence indices, edges carry the cosine similarity of the two
//! sentences' TF-IDF vectors. A sentence becomes a node only when it gets a
//! positive-weight edge, so isolated sentences never appear in the graph.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::summarizer::unit_vector::UnitVector;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// Index of the sentence this node stands for
    pub sentence: usize,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    pub fn new(sentence: usize) -> Self {
        Self {
            sentence,
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable undirected graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps sentence index -> node ID
    sentence_to_id: FxHashMap<usize, u32>,
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            sentence_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create the node for a sentence, returning its ID
    pub fn get_or_create_node(&mut self, sentence: usize) -> u32 {
        if let Some(&id) = self.sentence_to_id.get(&sentence) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.sentence_to_id.insert(sentence, id);
        self.nodes.push(BuilderNode::new(sentence));
        id
    }

    /// Set the weight of the undirected edge between two sentences
    ///
    /// Non-positive weights and self-loops are ignored and create no nodes.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        if a == b || weight <= 0.0 || weight.is_nan() {
            return;
        }
        let id_a = self.get_or_create_node(a);
        let id_b = self.get_or_create_node(b);

        self.nodes[id_a as usize].edges.insert(id_b, weight);
        self.nodes[id_b as usize].edges.insert(id_a, weight);
    }

    /// Build the similarity graph over all unordered sentence pairs
    ///
    /// `vectors[i]` is the vector of sentence `i`. With the `parallel`
    /// feature, inputs of at least `parallel_threshold` sentences compute
    /// similarity rows on the rayon pool; edges are inserted in the same order
    /// either way, so the resulting graph is identical.
    pub fn from_vectors(vectors: &[UnitVector], parallel_threshold: usize) -> Self {
        let rows = similarity_rows(vectors, parallel_threshold);

        let mut builder = Self::with_capacity(vectors.len());
        for (i, row) in rows.into_iter().enumerate() {
            for (j, weight) in row {
                builder.add_edge(i, j, weight);
            }
        }
        builder
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn get_node_id(&self, sentence: usize) -> Option<u32> {
        self.sentence_to_id.get(&sentence).copied()
    }

    /// Weight of the edge between two sentences, if any
    pub fn edge_weight(&self, a: usize, b: usize) -> Option<f64> {
        let id_a = self.get_node_id(a)?;
        let id_b = self.get_node_id(b)?;
        self.nodes[id_a as usize].edges.get(&id_b).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Positive similarities `(j, weight)` with `j > i` for sentence `i`
fn similarity_row(vectors: &[UnitVector], i: usize) -> Vec<(usize, f64)> {
    ((i + 1)..vectors.len())
        .filter_map(|j| {
            let sim = vectors[i].cosine_similarity(&vectors[j]);
            (sim > 0.0).then_some((j, sim))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn similarity_rows(vectors: &[UnitVector], parallel_threshold: usize) -> Vec<Vec<(usize, f64)>> {
    if vectors.len() >= parallel_threshold {
        tracing::debug!(sentences = vectors.len(), "computing similarity rows in parallel");
        return (0..vectors.len())
            .into_par_iter()
            .map(|i| similarity_row(vectors, i))
            .collect();
    }
    (0..vectors.len()).map(|i| similarity_row(vectors, i)).collect()
}

#[cfg(not(feature = "parallel"))]
fn similarity_rows(vectors: &[UnitVector], _parallel_threshold: usize) -> Vec<Vec<(usize, f64)>> {
    (0..vectors.len()).map(|i| similarity_row(vectors, i)).collect()
}

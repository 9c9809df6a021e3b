//! Weighted PageRank
//!
//! Power iteration with edge-weight-proportional transitions, uniform
//! teleportation and redistribution of dangling-node mass.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Each pass pulls score from a node's neighbors, so a node's new score
    /// depends only on the previous iterate. Returns the last iterate even
    /// without convergence, with `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        let uniform = 1.0 / n as f64;

        let mut scores = vec![uniform; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Nodes without weight would leak mass; spread it uniformly
            let leaked: f64 = (0..n)
                .filter(|&u| graph.strength[u] <= 0.0)
                .map(|u| scores[u])
                .sum();
            let base = (1.0 - self.damping) * uniform + self.damping * leaked * uniform;

            let next: Vec<f64> = (0..n as u32)
                .map(|v| {
                    let inflow: f64 = graph
                        .edges(v)
                        .map(|(u, w)| scores[u as usize] * w / graph.strength[u as usize])
                        .sum();
                    base + self.damping * inflow
                })
                .collect();

            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            scores = next;
        }

        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        let converged = delta <= self.threshold;
        if !converged {
            tracing::warn!(
                iterations,
                delta,
                threshold = self.threshold,
                "pagerank stopped before converging"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 0.5);
        builder.add_edge(1, 2, 0.5);
        builder.add_edge(2, 0, 0.5);
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Sentence 0 is similar to three otherwise unrelated sentences
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 0.3);
        builder.add_edge(0, 2, 0.3);
        builder.add_edge(0, 3, 0.3);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = StandardPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_two_node_graph_equal_scores() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 1.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!((result.scores[0] - 0.5).abs() < 1e-9);
        assert!((result.scores[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = StandardPageRank::new()
            .with_max_iterations(500)
            .run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_heavier_edges_attract_more_score() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1, 0.9);
        builder.add_edge(0, 2, 0.1);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&build_star_graph());
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();
        let low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let high = StandardPageRank::new().with_damping(0.95).run(&graph);

        let advantage_low = low.scores[0] - low.scores[1];
        let advantage_high = high.scores[0] - high.scores[1];
        assert!(advantage_high > advantage_low);
    }
}

//! TextRank sentence ranking
//!
//! Sentences are embedded as TF-IDF vectors, connected by cosine similarity,
//! and scored with weighted PageRank. Sentences without any positive
//! similarity are not graph nodes and score 0.0.
//!
//! Equal scores keep document order: the sort is stable over sentences in
//! index order.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::tfidf::TfIdfVectorizer;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::model::LanguageModel;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{RankedSentence, Sentence};

/// Sentence count from which similarity rows are computed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Everything the ranking stage produced
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Sentences in segmentation order
    pub sentences: Vec<Sentence>,
    /// All sentences by descending score; empty when the graph has no nodes
    pub ranked: Vec<RankedSentence>,
    pub graph_nodes: usize,
    /// Undirected edge count
    pub graph_edges: usize,
    pub iterations: usize,
    pub converged: bool,
}

impl Ranking {
    /// First `top_n` ranked texts, skipping repeated texts
    pub fn top_texts(&self, top_n: usize) -> Vec<String> {
        let mut seen = FxHashSet::default();
        self.ranked
            .iter()
            .filter(|s| seen.insert(s.text.as_str()))
            .take(top_n)
            .map(|s| s.text.clone())
            .collect()
    }
}

/// Ranks the sentences of a text by graph centrality
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    model: Arc<LanguageModel>,
    pagerank: StandardPageRank,
    parallel_threshold: usize,
}

impl SentenceRanker {
    pub fn new(model: Arc<LanguageModel>) -> Self {
        Self {
            model,
            pagerank: StandardPageRank::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_pagerank(mut self, pagerank: StandardPageRank) -> Self {
        self.pagerank = pagerank;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The `top_n` highest-ranked sentence texts
    ///
    /// Empty when the text has fewer than two sentences or no pair of
    /// sentences shares a term.
    pub fn rank(&self, text: &str, top_n: usize) -> Vec<String> {
        self.ranking(text).top_texts(top_n)
    }

    /// Run the full ranking stage and keep the intermediate details
    pub fn ranking(&self, text: &str) -> Ranking {
        let sentences = self.model.sentences(text);
        if sentences.len() < 2 {
            return Ranking {
                sentences,
                converged: true,
                ..Ranking::default()
            };
        }

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let vectors = TfIdfVectorizer::new().fit_transform(&texts);

        let builder = GraphBuilder::from_vectors(&vectors, self.parallel_threshold);
        let graph_edges = builder.edge_count();
        if builder.is_empty() {
            return Ranking {
                sentences,
                converged: true,
                ..Ranking::default()
            };
        }

        let graph = CsrGraph::from_builder(&builder);
        let result = self.pagerank.run(&graph);

        let mut scores = vec![0.0; sentences.len()];
        for node in 0..graph.num_nodes as u32 {
            scores[graph.sentence(node)] = result.score(node);
        }

        let mut ranked: Vec<RankedSentence> = sentences
            .iter()
            .map(|s| RankedSentence {
                index: s.index,
                score: scores[s.index],
                text: s.text.clone(),
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            sentences = sentences.len(),
            nodes = graph.num_nodes,
            edges = graph_edges,
            iterations = result.iterations,
            "ranked sentences"
        );

        Ranking {
            sentences,
            ranked,
            graph_nodes: graph.num_nodes,
            graph_edges,
            iterations: result.iterations,
            converged: result.converged,
        }
    }
}

/// Rank with the shared English model and default PageRank settings
pub fn rank(text: &str, top_n: usize) -> crate::errors::Result<Vec<String>> {
    Ok(SentenceRanker::new(LanguageModel::shared()?).rank(text, top_n))
}

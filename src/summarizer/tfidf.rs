//! TF-IDF sentence vectors
//!
//! The vocabulary is induced from the sentence set passed to
//! [`TfIdfVectorizer::fit_transform`]; nothing is persisted between calls.
//! Weights follow the common smoothed formulation: raw term counts times
//! `ln((1 + n) / (1 + df)) + 1`, then L2 normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::unit_vector::UnitVector;

// Terms are runs of two or more word characters
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Term-weighting over an arbitrary list of strings
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Document frequency per term from the last fit
    document_frequency: FxHashMap<String, usize>,
    num_documents: usize,
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercased terms of a single document
    pub fn terms(text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TERM_PATTERN
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Learn the vocabulary from `documents` and return one unit vector each
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<UnitVector> {
        let term_counts: Vec<FxHashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = FxHashMap::default();
                for term in Self::terms(doc.as_ref()) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        self.num_documents = documents.len();
        self.document_frequency.clear();
        for counts in &term_counts {
            for term in counts.keys() {
                *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        term_counts
            .into_iter()
            .map(|counts| {
                let weights = counts
                    .into_iter()
                    .map(|(term, tf)| {
                        let idf = self.idf(&term);
                        (term, tf as f64 * idf)
                    })
                    .collect();
                UnitVector::from_dimensions(weights)
            })
            .collect()
    }

    /// Smoothed inverse document frequency; 0.0 for unseen terms
    pub fn idf(&self, term: &str) -> f64 {
        match self.document_frequency.get(term) {
            Some(&df) => ((1.0 + self.num_documents as f64) / (1.0 + df as f64)).ln() + 1.0,
            None => 0.0,
        }
    }

    /// Number of distinct terms seen in the last fit
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }
}

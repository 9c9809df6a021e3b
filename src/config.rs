//! Summarizer configuration
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "top_n": 10,
//!   "candidate_multiplier": 2,
//!   "language": "en",
//!   "damping": 0.85,
//!   "max_iterations": 100,
//!   "threshold": 1e-6,
//!   "parallel_threshold": 256,
//!   "style": "annotated",
//!   "keywords": ["momentum", "carry"]
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults. Unknown
//! fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::pagerank::standard::StandardPageRank;
use crate::strategy::composer::ComposeStyle;
use crate::summarizer::ranker::DEFAULT_PARALLEL_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Maximum number of sentences in the report
    pub top_n: usize,
    /// The ranker returns `top_n * candidate_multiplier` sentences before
    /// the keyword filter narrows them down to `top_n`
    pub candidate_multiplier: usize,
    /// Stopword language
    pub language: String,
    pub damping: f64,
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1)
    pub threshold: f64,
    /// Sentence count from which similarity is computed in parallel
    pub parallel_threshold: usize,
    pub style: ComposeStyle,
    /// Replaces the default domain keywords when set
    pub keywords: Option<Vec<String>>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        let pagerank = StandardPageRank::default();
        Self {
            top_n: 10,
            candidate_multiplier: 2,
            language: "en".to_string(),
            damping: pagerank.damping,
            max_iterations: pagerank.max_iterations,
            threshold: pagerank.threshold,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            style: ComposeStyle::default(),
            keywords: None,
        }
    }
}

impl SummarizerConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_style(mut self, style: ComposeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Number of ranked sentences requested before filtering
    pub fn candidate_count(&self) -> usize {
        self.top_n.saturating_mul(self.candidate_multiplier)
    }

    /// PageRank settings derived from this configuration
    pub fn pagerank(&self) -> StandardPageRank {
        StandardPageRank::new()
            .with_damping(self.damping)
            .with_max_iterations(self.max_iterations)
            .with_threshold(self.threshold)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".to_string()));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.threshold > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.candidate_multiplier == 0 {
            return Err(Error::InvalidConfig(
                "candidate_multiplier must be at least 1".to_string(),
            ));
        }
        if let Some(keywords) = &self.keywords {
            if keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(Error::InvalidConfig(
                    "keywords override must contain at least one keyword".to_string(),
                ));
            }
        }
        Ok(())
    }
}

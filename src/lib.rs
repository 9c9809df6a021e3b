//! TextRank sentence extraction for quantitative research papers
//!
//! A document is cleaned and lemmatized, its sentences are ranked by
//! PageRank over a TF-IDF cosine similarity graph, and the top sentences
//! that talk about trading-strategy design are sorted into entry, exit,
//! indicator, risk and frequency categories.
//!
//! ```no_run
//! use strategy_textrank::{summarize, ReportOutcome};
//!
//! let report = summarize("Buy when the RSI crosses 30. Sell when the RSI crosses 70.", 5)?;
//! if report.outcome == ReportOutcome::Complete {
//!     println!("{report}");
//! }
//! # Ok::<(), strategy_textrank::Error>(())
//! ```

pub mod config;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod strategy;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use errors::{Error, Result};
pub use nlp::model::LanguageModel;
pub use nlp::normalizer::{normalize, Normalizer};
pub use pipeline::loader::{DocumentLoader, TextFileLoader};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageReport, TracingObserver};
pub use pipeline::runner::Summarizer;
pub use strategy::classifier::{classify, CategorizedSentences};
pub use strategy::composer::{compose, ComposeStyle};
pub use strategy::filter::{filter, DomainFilter, DEFAULT_KEYWORDS};
pub use strategy::report::{Report, ReportOutcome};
pub use summarizer::ranker::{rank, Ranking, SentenceRanker};
pub use types::{Category, Document, RankedSentence, Sentence};

/// Summarize document text with the default configuration, keeping at most
/// `top_n` sentences
///
/// Fails only when the English language model cannot be loaded.
pub fn summarize(document_text: &str, top_n: usize) -> Result<Report> {
    let summarizer = Summarizer::new(SummarizerConfig::default().with_top_n(top_n))?;
    Ok(summarizer.summarize(document_text))
}

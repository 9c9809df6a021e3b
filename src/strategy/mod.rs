//! Trading-strategy extraction
//!
//! Keyword filtering of ranked sentences, first-match category assignment,
//! and composition of the categorized sentences into a report.

pub mod classifier;
pub mod composer;
pub mod filter;
pub mod report;

//! Summarization pipeline
//!
//! [`runner::Summarizer`] drives the stages, [`observer`] exposes stage
//! boundaries, and [`loader`] turns a document path into text.

pub mod loader;
pub mod observer;
pub mod runner;

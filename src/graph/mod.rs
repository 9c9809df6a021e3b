//! Sentence similarity graph
//!
//! [`builder::GraphBuilder`] collects edges during construction and
//! [`csr::CsrGraph`] is the frozen form PageRank iterates over.

pub mod builder;
pub mod csr;

//! Extractive summarization
//!
//! TF-IDF sentence vectors, cosine similarity, and TextRank sentence ranking.

pub mod ranker;
pub mod tfidf;
pub mod unit_vector;

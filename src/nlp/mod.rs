//! Natural Language Processing components
//!
//! Tokenization, sentence segmentation, stopword filtering, lemmatization,
//! and the text normalizer built on top of them.

pub mod lemmatizer;
pub mod model;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

//! Language model: the linguistic collaborator used by normalization and
//! ranking.
//!
//! A model bundles a stopword list, a lemmatizer, and UAX #29 segmentation.
//! It is immutable once built. The English model is loaded once per process
//! through [`LanguageModel::shared`].

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::lemmatizer::{Lemmatize, RuleLemmatizer};
use super::stopwords::StopwordFilter;
use super::tokenizer;
use crate::errors::Result;
use crate::strategy::filter::domain_terms;
use crate::types::Sentence;

static SHARED_ENGLISH: OnceCell<Arc<LanguageModel>> = OnceCell::new();

/// Tokenization, stopword and lemma provider
pub struct LanguageModel {
    language: String,
    stopwords: StopwordFilter,
    lemmatizer: Box<dyn Lemmatize>,
}

impl fmt::Debug for LanguageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageModel")
            .field("language", &self.language)
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl LanguageModel {
    /// Load the model for a language
    ///
    /// Words of the domain keywords are never stopwords, otherwise
    /// normalization would delete terms like "buy" or "take" before the
    /// filter and classifier see them.
    ///
    /// Fails with [`Error::ModelUnavailable`](crate::Error::ModelUnavailable)
    /// when no stopword list exists for it.
    pub fn load(language: &str) -> Result<Self> {
        let mut stopwords = StopwordFilter::new(language)?;
        stopwords.remove_stopwords(&domain_terms());
        tracing::debug!(language, stopwords = stopwords.len(), "loaded language model");
        Ok(Self {
            language: language.to_lowercase(),
            stopwords,
            lemmatizer: Box::new(RuleLemmatizer::new()),
        })
    }

    /// The process-wide English model, loaded on first use
    pub fn shared() -> Result<Arc<Self>> {
        SHARED_ENGLISH
            .get_or_try_init(|| Self::load("en").map(Arc::new))
            .cloned()
    }

    /// Load `language`, reusing the shared instance for English
    pub fn for_language(language: &str) -> Result<Arc<Self>> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Self::shared(),
            _ => Self::load(language).map(Arc::new),
        }
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Stop treating the words of `keywords` as stopwords
    pub fn keep_words<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        let words: Vec<&str> = keywords
            .iter()
            .flat_map(|kw| kw.as_ref().split(|c: char| c.is_whitespace() || c == '-'))
            .filter(|w| !w.is_empty())
            .collect();
        self.stopwords.remove_stopwords(&words);
        self
    }

    /// Replace the lemmatizer
    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatize + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.is_stopword(token)
    }

    pub fn lemma(&self, token: &str) -> String {
        self.lemmatizer.lemma(token)
    }

    /// Sentence boundary segmentation
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        tokenizer::split_sentences(text)
    }

    /// Word tokenization (punctuation tokens included, whitespace skipped)
    pub fn words<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        tokenizer::split_words(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_model_is_reused() {
        let a = LanguageModel::shared().unwrap();
        let b = LanguageModel::for_language("English").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.language(), "en");
    }

    #[test]
    fn test_unknown_language_fails() {
        assert!(LanguageModel::load("xx").is_err());
        assert!(LanguageModel::for_language("xx").is_err());
    }

    #[test]
    fn test_domain_words_are_not_stopwords() {
        let model = LanguageModel::shared().unwrap();

        for word in ["buy", "take", "top", "bottom", "stop", "Buy"] {
            assert!(!model.is_stopword(word), "{word}");
        }
        assert!(model.is_stopword("the"));
        assert!(model.is_stopword("when"));
    }

    #[test]
    fn test_keep_words_unblocks_custom_keywords() {
        let model = LanguageModel::load("en").unwrap();
        assert!(model.is_stopword("after"));

        let model = model.keep_words(&["after hours"]);
        assert!(!model.is_stopword("after"));
    }

    #[test]
    fn test_custom_stopwords() {
        let model = LanguageModel::load("en")
            .unwrap()
            .with_stopwords(StopwordFilter::from_list(&["momentum"]));
        assert!(model.is_stopword("Momentum"));
        assert!(!model.is_stopword("the"));
    }

    struct Identity;

    impl Lemmatize for Identity {
        fn lemma(&self, word: &str) -> String {
            word.to_string()
        }
    }

    #[test]
    fn test_custom_lemmatizer() {
        let model = LanguageModel::load("en").unwrap().with_lemmatizer(Identity);
        assert_eq!(model.lemma("Strategies"), "Strategies");
    }

    #[test]
    fn test_lemma_delegates() {
        let model = LanguageModel::load("en").unwrap();
        assert_eq!(model.lemma("strategies"), "strategy");
    }
}

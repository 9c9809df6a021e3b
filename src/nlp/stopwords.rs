//! Stopword lists
//!
//! Backed by the `stop-words` crate. Unlike a best-effort filter, an
//! unsupported language is an error: normalization without a stopword list
//! would silently change every downstream score.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::{Error, Result};

/// A lowercase stopword set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for a language code or English name
    pub fn new(language: &str) -> Result<Self> {
        let lang = Self::resolve(language).ok_or_else(|| Error::ModelUnavailable {
            language: language.to_string(),
            reason: "no stopword list for this language".to_string(),
        })?;

        let stopwords: FxHashSet<String> = get(lang).iter().map(|s| s.to_lowercase()).collect();
        if stopwords.is_empty() {
            return Err(Error::ModelUnavailable {
                language: language.to_string(),
                reason: "stopword list is empty".to_string(),
            });
        }

        Ok(Self { stopwords })
    }

    /// Build a filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A filter that keeps every token
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords
            .extend(words.iter().map(|w| w.to_lowercase()));
    }

    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn resolve(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}

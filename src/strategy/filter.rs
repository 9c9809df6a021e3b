//! Keyword relevance filter

use crate::types::Category;

/// Terms that mark a sentence as describing trading-strategy design
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "strategy",
    "indicator",
    "trend",
    "moving average",
    "rsi",
    "bollinger bands",
    "entry",
    "exit",
    "signal",
    "stop-loss",
    "take profit",
    "risk management",
    "momentum",
    "position sizing",
    "double bottom",
    "double top",
    "support",
    "resistance",
    "market timing",
    "swing trading",
];

/// Keeps sentences whose lowercase form contains a keyword
#[derive(Debug, Clone)]
pub struct DomainFilter {
    keywords: Vec<String>,
}

impl Default for DomainFilter {
    fn default() -> Self {
        Self::from_list(DEFAULT_KEYWORDS)
    }
}

impl DomainFilter {
    /// Build a filter from a keyword list; keywords are lowercased
    pub fn from_list<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        keywords.dedup();
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_relevant(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw.as_str()))
    }

    /// Relevant sentences in their input order
    pub fn filter<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<String> {
        sentences
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| self.is_relevant(s))
            .map(str::to_string)
            .collect()
    }
}

/// Single words of the default filter keywords and every category keyword
///
/// Multi-word and hyphenated keywords are split into their words.
pub fn domain_terms() -> Vec<&'static str> {
    let mut terms: Vec<&'static str> = DEFAULT_KEYWORDS
        .iter()
        .chain(Category::ALL.iter().flat_map(|c| c.keywords()))
        .copied()
        .flat_map(|kw: &'static str| kw.split(|c: char| c.is_whitespace() || c == '-'))
        .filter(|w| !w.is_empty())
        .collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Filter `sentences` by an explicit keyword set
pub fn filter<S: AsRef<str>, K: AsRef<str>>(sentences: &[S], keywords: &[K]) -> Vec<String> {
    DomainFilter::from_list(keywords).filter(sentences)
}

//! Text normalization
//!
//! Cleans raw extracted document text and reduces it to lowercase,
//! alphabetic-only lemmas. Sentence boundaries are kept as single newlines so
//! the ranker can still segment the output.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::LanguageModel;
use super::tokenizer::is_alpha;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

static BOILERPLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Electronic copy available at: .*").unwrap());

// Page numbers: a line holding only digits. Trailing \s* may also swallow
// the line break and following blank lines, which step 4 would collapse anyway.
static PAGE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\s*$").unwrap());

static NEWLINES_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Cleans and lemmatizes document text
#[derive(Debug, Clone)]
pub struct Normalizer {
    model: Arc<LanguageModel>,
}

impl Normalizer {
    pub fn new(model: Arc<LanguageModel>) -> Self {
        Self { model }
    }

    /// Strip URLs, boilerplate and page numbers, then flatten line breaks
    pub fn clean(&self, raw: &str) -> String {
        let text = URL_PATTERN.replace_all(raw, "");
        let text = BOILERPLATE_PATTERN.replace_all(&text, "");
        let text = PAGE_NUMBER_PATTERN.replace_all(&text, "");
        let text = NEWLINES_PATTERN.replace_all(&text, " ");
        text.trim().to_string()
    }

    /// Full normalization: [`clean`](Self::clean), then per sentence drop
    /// stopwords, lemmatize, and keep alphabetic tokens only
    ///
    /// Sentences that end up empty are dropped; the rest are joined with `\n`.
    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = self.clean(raw);

        self.model
            .sentences(&cleaned)
            .iter()
            .map(|sentence| self.lemmatize_sentence(&sentence.text))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn lemmatize_sentence(&self, sentence: &str) -> String {
        let lemmatized = self
            .model
            .words(sentence)
            .filter(|token| !self.model.is_stopword(token))
            .map(|token| self.model.lemma(token))
            .collect::<Vec<_>>()
            .join(" ");

        self.model
            .words(&lemmatized)
            .filter(|token| is_alpha(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalize with the shared English model
///
/// Fails only when the model cannot be loaded.
pub fn normalize(raw: &str) -> crate::errors::Result<String> {
    Ok(Normalizer::new(LanguageModel::shared()?).normalize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;

    fn normalizer() -> Normalizer {
        let model = LanguageModel::load("en")
            .unwrap()
            .with_stopwords(StopwordFilter::from_list(&["the", "a", "at", "is", "when"]));
        Normalizer::new(Arc::new(model))
    }

    #[test]
    fn test_clean_removes_urls_and_boilerplate() {
        let raw = "See https://ssrn.com/abstract=123 for data.\nElectronic copy available at: https://x.y/z\nMore text";
        let cleaned = normalizer().clean(raw);

        assert!(!cleaned.contains("http"));
        assert!(!cleaned.to_lowercase().contains("electronic copy"));
        assert!(cleaned.contains("More text"));
    }

    #[test]
    fn test_clean_removes_page_numbers() {
        let raw = "First page ends here.\n12\nSecond page starts.\n  7  \nDone.";
        let cleaned = normalizer().clean(raw);

        assert_eq!(cleaned, "First page ends here. Second page starts. Done.");
    }

    #[test]
    fn test_clean_keeps_inline_numbers() {
        let cleaned = normalizer().clean("Hold for 12 months.\n");
        assert_eq!(cleaned, "Hold for 12 months.");
    }

    #[test]
    fn test_clean_collapses_newlines() {
        let cleaned = normalizer().clean("alpha\n\n\nbeta\ngamma");
        assert_eq!(cleaned, "alpha beta gamma");
    }

    #[test]
    fn test_normalize_lemmatizes_and_drops_stopwords() {
        let normalized = normalizer().normalize("The strategies bought stocks when prices fell.");
        assert_eq!(normalized, "strategy buy stock price fall");
    }

    #[test]
    fn test_normalize_keeps_only_alphabetic_tokens() {
        let normalized = normalizer().normalize("Set a stop-loss at 5% below RSI14 levels.");
        assert_eq!(normalized, "set stop loss below level");
    }

    #[test]
    fn test_normalize_keeps_sentence_boundaries() {
        let normalized =
            normalizer().normalize("Momentum is strong.\n\n3\nThe trend reverses quickly.");
        assert_eq!(normalized, "momentum strong\ntrend reverse quickly");
        assert!(!normalized.contains("\n\n"));
    }

    #[test]
    fn test_normalize_drops_sentences_left_empty() {
        let normalized = normalizer().normalize("The a. Momentum wins. 42!");
        assert_eq!(normalized, "momentum win");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalizer().normalize(""), "");
        assert_eq!(normalizer().normalize("https://only.a/url"), "");
    }
}

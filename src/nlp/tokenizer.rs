//! Word and sentence segmentation
//!
//! Uses UAX #29 boundaries from `unicode-segmentation`. Line feeds are
//! paragraph separators under UAX #29, so newline-joined text segments one
//! sentence per line.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Split text into trimmed, non-empty sentences
///
/// Indices are assigned after empty segments are discarded, so they are
/// contiguous from 0.
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, text)| Sentence {
            index,
            text: text.to_string(),
        })
        .collect()
}

/// Split text into word-boundary tokens, skipping whitespace
///
/// Punctuation comes out as separate tokens (`"stop-loss"` yields
/// `"stop"`, `"-"`, `"loss"`).
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds().filter(|t| !t.trim().is_empty())
}

/// Whether a token consists only of alphabetic characters
pub fn is_alpha(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_indices() {
        let sentences = split_sentences("Buy the dip. Sell the rip!  Hold otherwise?");
        let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(texts, vec!["Buy the dip.", "Sell the rip!", "Hold otherwise?"]);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
        }
    }

    #[test]
    fn test_newline_is_sentence_boundary() {
        let sentences = split_sentences("momentum strategy work\nvolatility rise sharply");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].text, "volatility rise sharply");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_words_separates_punctuation() {
        let words: Vec<_> = split_words("Set stop-loss at 5%.").collect();
        assert_eq!(words, vec!["Set", "stop", "-", "loss", "at", "5", "%", "."]);
    }

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha("momentum"));
        assert!(is_alpha("Énergie"));
        assert!(!is_alpha("rsi14"));
        assert!(!is_alpha("-"));
        assert!(!is_alpha(""));
    }
}

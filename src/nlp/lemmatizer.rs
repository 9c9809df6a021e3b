//! Lemmatization
//!
//! The [`Lemmatize`] trait is the seam for plugging in a real morphological
//! analyzer. [`RuleLemmatizer`] is a dictionary-plus-suffix-rules English
//! lemmatizer: irregular forms are looked up first, then inflectional
//! suffixes (`-s`, `-es`, `-ies`, `-ed`, `-ing`) are stripped.

use rustc_hash::FxHashMap;

/// Maps a lowercase word to its base form
pub trait Lemmatize: Send + Sync {
    fn lemma(&self, word: &str) -> String;
}

/// Irregular and spelling-sensitive forms that suffix rules get wrong
const EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("is", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("went", "go"),
    ("gone", "go"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("held", "hold"),
    ("made", "make"),
    ("making", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("taking", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("lost", "lose"),
    ("losing", "lose"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("rising", "rise"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("saw", "see"),
    ("seen", "see"),
    ("ran", "run"),
    ("set", "set"),
    ("trading", "trade"),
    ("traded", "trade"),
    ("using", "use"),
    ("used", "use"),
    ("closing", "close"),
    ("closed", "close"),
    ("moving", "move"),
    ("moved", "move"),
    ("indices", "index"),
    ("data", "data"),
    ("analyses", "analysis"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

/// Rule-based English lemmatizer
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    exceptions: FxHashMap<&'static str, &'static str>,
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: EXCEPTIONS.iter().copied().collect(),
        }
    }

    fn strip_plural(word: &str) -> Option<String> {
        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() >= 2 {
                return Some(format!("{stem}y"));
            }
        }
        for suffix in ["sses", "xes", "ches", "shes", "zes"] {
            if word.ends_with(suffix) {
                return Some(word[..word.len() - 2].to_string());
            }
        }
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return Some(word[..word.len() - 1].to_string());
        }
        None
    }

    fn strip_verbal(word: &str) -> Option<String> {
        if word.ends_with("eed") {
            return None;
        }
        let stem = word
            .strip_suffix("ing")
            .or_else(|| word.strip_suffix("ed"))?;
        if stem.len() < 3 || !stem.chars().any(is_vowel) {
            return None;
        }
        if word.ends_with("ied") {
            return Some(format!("{}y", &stem[..stem.len() - 1]));
        }

        let chars: Vec<char> = stem.chars().collect();
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];

        // stopp -> stop, but sell/miss/buzz keep the double letter
        if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z' | 'f') {
            return Some(chars[..chars.len() - 1].iter().collect());
        }

        // Restore a silent e dropped before the suffix (rebalanc -> rebalance)
        let restore_e = matches!(last, 'v' | 'c' | 'z')
            || stem.ends_with("dg")
            || stem.ends_with("rg")
            || stem.ends_with("ur")
            || stem.ends_with("iz")
            || (stem.ends_with("at") && chars.len() >= 3 && !is_vowel(chars[chars.len() - 3]));
        if restore_e {
            return Some(format!("{stem}e"));
        }

        Some(stem.to_string())
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

impl Lemmatize for RuleLemmatizer {
    fn lemma(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(base) = self.exceptions.get(lower.as_str()) {
            return (*base).to_string();
        }
        if lower.chars().count() <= 3 || !lower.is_ascii() {
            return lower;
        }
        if lower.ends_with("ing") || lower.ends_with("ed") {
            if let Some(base) = Self::strip_verbal(&lower) {
                return base;
            }
        }
        Self::strip_plural(&lower).unwrap_or(lower)
    }
}

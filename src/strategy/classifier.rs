//! Category assignment
//!
//! Each sentence goes to the first [`Category`] (in priority order) whose
//! keywords it contains, stored with that category's label prefix.
//! Sentences matching no category are dropped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::Category;

/// Labelled sentences per category, iterated in priority order
///
/// Only categories that received at least one sentence are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorizedSentences {
    sections: BTreeMap<Category, Vec<String>>,
}

impl CategorizedSentences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-labelled sentence
    pub fn push(&mut self, category: Category, labelled: String) {
        self.sections.entry(category).or_default().push(labelled);
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.sections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty categories in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.sections
            .iter()
            .filter(|(_, sentences)| !sentences.is_empty())
            .map(|(category, sentences)| (*category, sentences.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(Vec::is_empty)
    }

    /// Total number of sentences across categories
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}

/// First category whose keywords occur in the sentence
pub fn categorize(sentence: &str) -> Option<Category> {
    let lower = sentence.to_lowercase();
    Category::ALL.into_iter().find(|c| c.matches(&lower))
}

/// Bucket sentences into categories, first match wins
pub fn classify<S: AsRef<str>>(sentences: &[S]) -> CategorizedSentences {
    let mut categorized = CategorizedSentences::new();
    for sentence in sentences.iter().map(AsRef::as_ref) {
        if let Some(category) = categorize(sentence) {
            categorized.push(category, format!("{}: {}", category.label(), sentence));
        }
    }
    categorized
}

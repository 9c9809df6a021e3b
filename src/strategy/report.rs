//! Summary report returned by the pipeline

use std::fmt;

use serde::Serialize;

use super::classifier::CategorizedSentences;
use super::composer::{compose, ComposeStyle};
use crate::types::Category;

/// Why a report has the content it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    /// At least one sentence was categorized
    Complete,
    /// The document had no usable text after normalization
    NoText,
    /// Text was present but no sentence could be ranked
    NoRankedSentences,
    /// Ranked sentences existed but none matched the domain keywords or a
    /// category
    NoRelevantSentences,
}

/// Categorized summary of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub outcome: ReportOutcome,
    pub sections: CategorizedSentences,
    #[serde(skip)]
    style: ComposeStyle,
}

impl Report {
    pub fn new(sections: CategorizedSentences, style: ComposeStyle) -> Self {
        let outcome = if sections.is_empty() {
            ReportOutcome::NoRelevantSentences
        } else {
            ReportOutcome::Complete
        };
        Self {
            outcome,
            sections,
            style,
        }
    }

    /// An empty report explaining why nothing was found
    pub fn empty(outcome: ReportOutcome) -> Self {
        Self {
            outcome,
            sections: CategorizedSentences::new(),
            style: ComposeStyle::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Labelled sentences of one category
    pub fn section(&self, category: Category) -> &[String] {
        self.sections.get(category)
    }

    /// Non-empty categories in priority order
    pub fn categories(&self) -> Vec<Category> {
        self.sections.iter().map(|(category, _)| category).collect()
    }

    /// Compose the report with an explicit style
    pub fn render(&self, style: ComposeStyle) -> String {
        compose(&self.sections, style)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(self.style))
    }
}

//! Plain-text report composition

use serde::{Deserialize, Serialize};

use super::classifier::CategorizedSentences;

/// Whether bullets carry the category's clarifying example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeStyle {
    Plain,
    #[default]
    Annotated,
}

/// Render categorized sentences as a text block
///
/// Each non-empty category becomes a `Title:` header, one `- ` bullet per
/// sentence, and a blank separator line. The result ends with a single
/// newline, or is empty when there is nothing to report.
pub fn compose(categorized: &CategorizedSentences, style: ComposeStyle) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (category, sentences) in categorized.iter() {
        lines.push(format!("{}:", category.title()));
        for sentence in sentences {
            match (style, category.hint()) {
                (ComposeStyle::Annotated, Some(hint)) => lines.push(format!("- {sentence} ({hint})")),
                _ => lines.push(format!("- {sentence}")),
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

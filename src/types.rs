//! Core data types shared across the pipeline stages

use serde::Serialize;

/// Raw text produced by a document loader
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A segmented sentence
///
/// `index` reflects segmentation order and is only assigned to sentences
/// whose trimmed text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

/// A sentence together with its centrality score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    /// Index of the sentence in segmentation order
    pub index: usize,
    /// PageRank score, 0.0 when the sentence had no similarity edges
    pub score: f64,
    pub text: String,
}

/// Trading-strategy component a sentence describes
///
/// Variant order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EntryConditions,
    ExitConditions,
    IndicatorsUsed,
    RiskManagement,
    TradeFrequencyAndUniverse,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 5] = [
        Category::EntryConditions,
        Category::ExitConditions,
        Category::IndicatorsUsed,
        Category::RiskManagement,
        Category::TradeFrequencyAndUniverse,
    ];

    /// Keywords matched case-insensitively as substrings
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::EntryConditions => &[
                "entry",
                "buy",
                "enter",
                "double bottom",
                "double top",
                "support",
            ],
            Category::ExitConditions => &["exit", "sell", "stop-loss", "take profit", "resistance"],
            Category::IndicatorsUsed => &[
                "indicator",
                "moving average",
                "rsi",
                "bollinger bands",
                "sentiment",
            ],
            Category::RiskManagement => &[
                "risk management",
                "leverage",
                "position sizing",
                "drawdown",
                "portfolio",
            ],
            Category::TradeFrequencyAndUniverse => {
                &["frequency", "monthly", "daily", "etf", "universe"]
            }
        }
    }

    /// Prefix prepended to every sentence assigned to this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::EntryConditions => "Entry Signal",
            Category::ExitConditions => "Exit Signal",
            Category::IndicatorsUsed => "Indicator Used",
            Category::RiskManagement => "Risk Management Rule",
            Category::TradeFrequencyAndUniverse => "Trade Frequency/Universe",
        }
    }

    /// Human-readable header used by the composer
    pub fn title(&self) -> &'static str {
        match self {
            Category::EntryConditions => "Entry Conditions",
            Category::ExitConditions => "Exit Conditions",
            Category::IndicatorsUsed => "Indicators Used",
            Category::RiskManagement => "Risk Management",
            Category::TradeFrequencyAndUniverse => "Trade Frequency and Universe",
        }
    }

    /// Static clarifying example appended in annotated reports
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Category::EntryConditions => Some(
                "e.g., look for confirmation with RSI above 30 or a breakout above resistance",
            ),
            Category::ExitConditions => Some(
                "e.g., set a stop-loss at 5% below entry price or take profit at a 10% gain",
            ),
            Category::IndicatorsUsed => {
                Some("e.g., use a 50-day moving average for trend confirmation")
            }
            Category::RiskManagement => {
                Some("e.g., maintain leverage below 2:1 and limit drawdown to 10%")
            }
            Category::TradeFrequencyAndUniverse => None,
        }
    }

    /// Whether the lowercased sentence contains any of this category's keywords
    pub fn matches(&self, lowercase_sentence: &str) -> bool {
        self.keywords()
            .iter()
            .any(|kw| lowercase_sentence.contains(kw))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

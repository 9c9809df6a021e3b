//! Pipeline runner: orchestrates stage execution.
//!
//! [`Summarizer::run`] executes the stages in order, each consuming the
//! previous stage's output:
//! 1. Normalize (clean, lemmatize)
//! 2. Rank (TF-IDF similarity graph + PageRank)
//! 3. Filter (domain keywords, then truncate to `top_n`)
//! 4. Classify (first-match categories)
//! 5. Report
//!
//! Empty intermediate results short-circuit into an empty [`Report`] whose
//! [`ReportOutcome`] says which stage came up empty.

use std::path::Path;
use std::sync::Arc;

use crate::config::SummarizerConfig;
use crate::errors::Result;
use crate::nlp::model::LanguageModel;
use crate::nlp::normalizer::Normalizer;
use crate::pipeline::loader::DocumentLoader;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_CLASSIFY, STAGE_FILTER,
    STAGE_NORMALIZE, STAGE_RANK, STAGE_REPORT,
};
use crate::strategy::classifier::classify;
use crate::strategy::filter::DomainFilter;
use crate::strategy::report::{Report, ReportOutcome};
use crate::summarizer::ranker::SentenceRanker;

/// Enter a tracing span for a pipeline stage
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// End-to-end summarizer: raw document text in, categorized report out
///
/// Holds no mutable state; one instance can serve many documents.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    normalizer: Normalizer,
    ranker: SentenceRanker,
    filter: DomainFilter,
}

impl Summarizer {
    /// Validate `config` and load its language model
    ///
    /// Fails when the configuration is invalid or the language model is
    /// unavailable; both are fatal.
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let model = match &config.keywords {
            Some(keywords) => Arc::new(LanguageModel::load(&config.language)?.keep_words(keywords)),
            None => LanguageModel::for_language(&config.language)?,
        };
        Ok(Self::assemble(config, model))
    }

    /// Build a summarizer around an already loaded model
    pub fn with_model(config: SummarizerConfig, model: Arc<LanguageModel>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, model))
    }

    fn assemble(config: SummarizerConfig, model: Arc<LanguageModel>) -> Self {
        let ranker = SentenceRanker::new(Arc::clone(&model))
            .with_pagerank(config.pagerank())
            .with_parallel_threshold(config.parallel_threshold);
        let filter = match &config.keywords {
            Some(keywords) => DomainFilter::from_list(keywords),
            None => DomainFilter::default(),
        };
        Self {
            normalizer: Normalizer::new(model),
            ranker,
            filter,
            config,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize document text
    pub fn summarize(&self, text: &str) -> Report {
        self.run(text, &mut NoopObserver)
    }

    /// Load a document and summarize it
    ///
    /// A loader failure is logged and yields an empty report with
    /// [`ReportOutcome::NoText`].
    pub fn summarize_path(&self, loader: &impl DocumentLoader, path: &Path) -> Report {
        match loader.load(path) {
            Ok(document) => self.summarize(&document.text),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not load document");
                Report::empty(ReportOutcome::NoText)
            }
        }
    }

    /// Run every stage, notifying `observer` at each boundary
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> Report {
        let top_n = self.config.top_n;

        // Stage 1: Normalize
        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            observer.on_stage_start(STAGE_NORMALIZE);
            let clock = StageClock::start();
            let normalized = self.normalizer.normalize(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(normalized.lines().count())
                .build();
            observer.on_stage_end(STAGE_NORMALIZE, &report);
            normalized
        };
        if normalized.is_empty() {
            tracing::info!("no text left after normalization");
            return Report::empty(ReportOutcome::NoText);
        }

        // Stage 2: Rank
        let (candidates, sentence_count) = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = self.ranker.ranking(&normalized);
            let mut candidates = ranking.top_texts(self.config.candidate_count());
            if candidates.is_empty() && ranking.sentences.len() == 1 {
                // A lone sentence has no similarity edges but is the whole document
                candidates.push(ranking.sentences[0].text.clone());
            }
            let report = StageReportBuilder::new(clock.elapsed())
                .items(candidates.len())
                .nodes(ranking.graph_nodes)
                .edges(ranking.graph_edges)
                .iterations(ranking.iterations)
                .converged(ranking.converged)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            (candidates, ranking.sentences.len())
        };
        if candidates.is_empty() {
            tracing::info!(
                sentences = sentence_count,
                "no sentences ranked for summarization"
            );
            return Report::empty(ReportOutcome::NoRankedSentences);
        }

        // Stage 3: Filter
        let relevant = {
            trace_stage!(STAGE_FILTER);
            observer.on_stage_start(STAGE_FILTER);
            let clock = StageClock::start();
            let mut relevant = self.filter.filter(&candidates);
            relevant.truncate(top_n);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(relevant.len())
                .build();
            observer.on_stage_end(STAGE_FILTER, &report);
            relevant
        };
        if relevant.is_empty() {
            tracing::info!(
                candidates = candidates.len(),
                "no strategy-related sentences found"
            );
            return Report::empty(ReportOutcome::NoRelevantSentences);
        }

        // Stage 4: Classify
        let categorized = {
            trace_stage!(STAGE_CLASSIFY);
            observer.on_stage_start(STAGE_CLASSIFY);
            let clock = StageClock::start();
            let categorized = classify(&relevant);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(categorized.len())
                .build();
            observer.on_stage_end(STAGE_CLASSIFY, &report);
            categorized
        };

        // Stage 5: Report
        trace_stage!(STAGE_REPORT);
        observer.on_stage_start(STAGE_REPORT);
        let clock = StageClock::start();
        let result = Report::new(categorized, self.config.style);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(result.categories().len())
            .build();
        observer.on_stage_end(STAGE_REPORT, &report);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::pipeline::loader::TextFileLoader;
    use crate::pipeline::observer::StageReport;
    use crate::strategy::composer::ComposeStyle;
    use crate::types::Category;

    /// Records stage boundaries in order
    #[derive(Default)]
    struct RecordingObserver {
        events: Vec<String>,
        reports: Vec<(&'static str, StageReport)>,
    }

    impl PipelineObserver for RecordingObserver {
        fn on_stage_start(&mut self, stage: &'static str) {
            self.events.push(format!("start:{stage}"));
        }

        fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
            self.events.push(format!("end:{stage}"));
            self.reports.push((stage, report.clone()));
        }
    }

    fn model() -> Arc<LanguageModel> {
        let stopwords = StopwordFilter::from_list(&["the", "a", "an", "is", "are", "on", "at", "of"]);
        Arc::new(LanguageModel::load("en").unwrap().with_stopwords(stopwords))
    }

    fn summarizer(config: SummarizerConfig) -> Summarizer {
        Summarizer::with_model(config, model()).unwrap()
    }

    const PAPER: &str = "The momentum strategy buys recent winners.\n\
        3\n\
        The momentum strategy sells recent losers.\n\
        Momentum signals use a moving average indicator.\n\
        Portfolio leverage is capped at two.\n\
        Bonds are boring.";

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = SummarizerConfig {
            damping: 2.0,
            ..SummarizerConfig::default()
        };
        let err = Summarizer::new(config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        let err = Summarizer::new(SummarizerConfig::default().with_top_n(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_custom_keywords_survive_stopwords() {
        let config = SummarizerConfig::default().with_keywords(["after hours"]);
        let summarizer = Summarizer::new(config).unwrap();

        assert_eq!(summarizer.normalizer.normalize("Buy after hours."), "buy after hour");
    }

    #[test]
    fn test_unknown_language_is_fatal() {
        let config = SummarizerConfig {
            language: "xx".to_string(),
            ..SummarizerConfig::default()
        };
        let err = Summarizer::new(config).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_text_has_no_text_outcome() {
        let report = summarizer(SummarizerConfig::default()).summarize("  \n12\n");
        assert_eq!(report.outcome, ReportOutcome::NoText);
        assert!(report.is_empty());
    }

    #[test]
    fn test_unrelated_sentences_have_no_ranked_outcome() {
        let report = summarizer(SummarizerConfig::default()).summarize("Apples grow. Rivers flow.");
        assert_eq!(report.outcome, ReportOutcome::NoRankedSentences);
    }

    #[test]
    fn test_single_sentence_passes_through() {
        let report = summarizer(SummarizerConfig::default()).summarize("Buy on the momentum signal.");

        assert_eq!(report.outcome, ReportOutcome::Complete);
        assert_eq!(
            report.section(Category::EntryConditions),
            &["Entry Signal: buy momentum signal".to_string()]
        );
    }

    #[test]
    fn test_irrelevant_ranked_sentences() {
        let report = summarizer(SummarizerConfig::default())
            .summarize("Bonds pay coupons. Bonds pay interest.");
        assert_eq!(report.outcome, ReportOutcome::NoRelevantSentences);
    }

    #[test]
    fn test_paper_is_categorized() {
        let report = summarizer(SummarizerConfig::default()).summarize(PAPER);

        assert_eq!(report.outcome, ReportOutcome::Complete);
        assert_eq!(
            report.section(Category::EntryConditions),
            &["Entry Signal: momentum strategy buy recent winner".to_string()]
        );
        assert_eq!(
            report.section(Category::ExitConditions),
            &["Exit Signal: momentum strategy sell recent loser".to_string()]
        );
        assert_eq!(
            report.section(Category::IndicatorsUsed),
            &["Indicator Used: momentum signal use move average indicator".to_string()]
        );
        // Risk sentence shares no term with the others and has no domain keyword
        assert!(report.section(Category::RiskManagement).is_empty());
    }

    #[test]
    fn test_top_n_limits_report() {
        let config = SummarizerConfig::default().with_top_n(1);
        let report = summarizer(config).summarize(PAPER);
        assert_eq!(report.sections.len(), 1);
    }

    #[test]
    fn test_custom_keywords() {
        let config = SummarizerConfig::default().with_keywords(["leverage"]);
        let report = summarizer(config)
            .summarize("Portfolio leverage is capped. Portfolio leverage is reviewed monthly.");

        assert_eq!(report.categories(), vec![Category::RiskManagement]);
        assert_eq!(report.section(Category::RiskManagement).len(), 2);
    }

    #[test]
    fn test_plain_style_display() {
        let config = SummarizerConfig::default().with_style(ComposeStyle::Plain);
        let report = summarizer(config).summarize("Buy on the momentum signal.");
        assert_eq!(
            report.to_string(),
            "Entry Conditions:\n- Entry Signal: buy momentum signal\n"
        );
    }

    #[test]
    fn test_observer_sees_every_stage_in_order() {
        let mut observer = RecordingObserver::default();
        summarizer(SummarizerConfig::default()).run(PAPER, &mut observer);

        let stages: Vec<_> = observer.reports.iter().map(|(stage, _)| *stage).collect();
        assert_eq!(
            stages,
            vec![STAGE_NORMALIZE, STAGE_RANK, STAGE_FILTER, STAGE_CLASSIFY, STAGE_REPORT]
        );
        assert_eq!(observer.events[0], "start:normalize");
        assert_eq!(observer.events[1], "end:normalize");

        let (_, rank) = &observer.reports[1];
        assert!(rank.nodes.unwrap() >= 2);
        assert_eq!(rank.converged, Some(true));
    }

    #[test]
    fn test_observer_stops_at_short_circuit() {
        let mut observer = RecordingObserver::default();
        summarizer(SummarizerConfig::default()).run("", &mut observer);
        assert_eq!(observer.events, vec!["start:normalize", "end:normalize"]);
    }

    #[test]
    fn test_missing_document_yields_no_text() {
        let report = summarizer(SummarizerConfig::default())
            .summarize_path(&TextFileLoader, Path::new("/nonexistent/paper.txt"));
        assert_eq!(report.outcome, ReportOutcome::NoText);
    }
}

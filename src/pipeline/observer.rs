//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers are notified at stage boundaries without coupling to stage
//! logic. The observer is passed explicitly to [`Summarizer::run`]
//! (see [`super::runner`]), so no global logging state is needed.
//!
//! [`Summarizer::run`]: super::runner::Summarizer::run

use std::time::{Duration, Instant};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_FILTER: &str = "filter";
pub const STAGE_CLASSIFY: &str = "classify";
pub const STAGE_REPORT: &str = "report";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Number of items the stage produced (sentences, categories, ...)
    pub items: Option<usize>,
    pub nodes: Option<usize>,
    pub edges: Option<usize>,
    pub iterations: Option<usize>,
    pub converged: Option<bool>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Fluent construction of a [`StageReport`]
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Receives stage boundary notifications
///
/// All methods default to no-ops.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that emits one `tracing` debug event per finished stage
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed.as_micros() as u64,
            items = ?report.items,
            nodes = ?report.nodes,
            edges = ?report.edges,
            iterations = ?report.iterations,
            converged = ?report.converged,
            "stage finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(4)
            .nodes(5)
            .edges(6)
            .iterations(7)
            .converged(true)
            .build();

        assert_eq!(report.elapsed, Duration::from_millis(3));
        assert_eq!(report.items, Some(4));
        assert_eq!(report.nodes, Some(5));
        assert_eq!(report.edges, Some(6));
        assert_eq!(report.iterations, Some(7));
        assert_eq!(report.converged, Some(true));
    }

    #[test]
    fn test_plain_report_has_no_counts() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.items.is_none());
        assert!(report.converged.is_none());
    }

    #[test]
    fn test_default_observer_methods_are_callable() {
        let mut observer = NoopObserver;
        observer.on_stage_start(STAGE_RANK);
        observer.on_stage_end(STAGE_RANK, &StageReport::default());

        let mut tracing_observer = TracingObserver;
        tracing_observer.on_stage_end(STAGE_RANK, &StageReport::default());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}

//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling
//! to stage logic. Use cases include timing stages, capturing
//! intermediate artifacts, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{AnnotatedPair, MergedRecord, RawPair};

/// Stage names, in execution order.
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_ADJECTIVE_TARGETS: &str = "adjective_targets";
pub const STAGE_CLAUSE_CLUSTERS: &str = "clause_clusters";
pub const STAGE_ANNOTATE: &str = "annotate";
pub const STAGE_MERGE: &str = "merge";

/// Wall-clock timer for one stage.
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

/// Metrics reported at the end of a stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageReport {
    duration: Duration,
    sentences: Option<usize>,
    pairs: Option<usize>,
    skipped: Option<usize>,
    records: Option<usize>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sentences processed, when the stage counts them.
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Raw or annotated pairs produced, when the stage counts them.
    pub fn pairs(&self) -> Option<usize> {
        self.pairs
    }

    /// Sentences skipped due to parse failure, when the stage tracks it.
    pub fn skipped(&self) -> Option<usize> {
        self.skipped
    }

    /// Merged records produced, when the stage counts them.
    pub fn records(&self) -> Option<usize> {
        self.records
    }
}

/// Builder for stage reports that carry metrics.
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    pub fn sentences(mut self, count: usize) -> Self {
        self.report.sentences = Some(count);
        self
    }

    pub fn pairs(mut self, count: usize) -> Self {
        self.report.pairs = Some(count);
        self
    }

    pub fn skipped(mut self, count: usize) -> Self {
        self.report.skipped = Some(count);
        self
    }

    pub fn records(mut self, count: usize) -> Self {
        self.report.records = Some(count);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks at stage boundaries. All methods default to no-ops so
/// implementations override only what they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// The segmented sentences of the review.
    fn on_sentences(&mut self, _sentences: &[String]) {}
    /// Raw pairs from one strategy, identified by its stage name.
    fn on_raw_pairs(&mut self, _stage: &'static str, _pairs: &[RawPair]) {}
    /// Both strategies' annotated pairs, concatenated.
    fn on_annotated(&mut self, _pairs: &[AnnotatedPair]) {}
    /// The final merged records.
    fn on_records(&mut self, _records: &[MergedRecord]) {}
}

/// Observer that ignores everything — zero-overhead execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a report per stage, for profiling.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

//! Pipeline orchestration
//!
//! Collaborator traits, the stage observer protocol, and the runner that
//! threads one review through both extraction strategies, annotation,
//! and the ensemble merge.

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::AbsaPipeline;
pub use traits::{DependencyParser, PolarityScorer, PosTagger, SentimentScore, ValenceScorer};

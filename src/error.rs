//! Error types for the extraction pipeline.

use thiserror::Error;

/// A per-sentence dependency parse failure.
///
/// Carried in the parser collaborator's `Result`; the pipeline folds it
/// into "skip this sentence and continue".
#[derive(Debug, Clone, Error)]
#[error("dependency parse failed for sentence {sentence_index}: {reason}")]
pub struct ParseError {
    /// Index of the failed sentence within the review.
    pub sentence_index: usize,
    /// Parser-provided failure description.
    pub reason: String,
}

impl ParseError {
    pub fn new(sentence_index: usize, reason: impl Into<String>) -> Self {
        Self {
            sentence_index,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced to the pipeline caller.
#[derive(Debug, Clone, Error)]
pub enum AbsaError {
    /// The review reduced to an empty string after formatting.
    /// Raised before any collaborator is invoked.
    #[error("review is empty after formatting")]
    EmptyReview,
}

//! Extraction strategies
//!
//! Two independent strategies mine (aspect, description) pairs from the
//! same review:
//! - adjective/adverb target extraction over per-sentence dependency
//!   graphs (bounded two-hop traversal),
//! - clause feature-description clustering over POS-filtered candidates
//!   and review-wide dependency edges.

pub mod adjective;
pub mod clause;

pub use adjective::AdjectiveTargetExtractor;
pub use clause::{ClauseClusterer, WordExpansions};

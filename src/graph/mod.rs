//! Sentence graph construction and access
//!
//! This module wraps dependency parser output into an arena-backed,
//! index-addressable node structure, and resolves negation bindings.

pub mod arena;
pub mod negation;

pub use arena::{DepEdge, NodeId, ParsedNode, SentenceGraph};
pub use negation::NegationBindings;

//! Natural Language Processing components
//!
//! This module provides review formatting, sentence segmentation, and
//! stopword filtering.

pub mod segment;
pub mod stopwords;

pub use segment::{format_review, split_sentences};
pub use stopwords::StopwordFilter;

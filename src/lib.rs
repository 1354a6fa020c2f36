//! # aspect-ensemble
//!
//! Aspect-based sentiment extraction from free-text customer reviews.
//!
//! One review goes in; an ordered list of `(aspect, description,
//! polarity, subjectivity)` records comes out. Two independent
//! strategies mine (attribute, opinion-phrase) pairs from the same
//! dependency parses — a bounded adjective/adverb target traversal and a
//! clause-level feature clusterer — and an ensemble merge deduplicates
//! their combined output, summing polarity where both agree on a key.
//!
//! Parsing, tagging, and sentiment scoring are external collaborators
//! behind the traits in [`pipeline::traits`]; the core is deterministic
//! given their outputs.
//!
//! ```
//! use aspect_ensemble::error::ParseError;
//! use aspect_ensemble::graph::ParsedNode;
//! use aspect_ensemble::pipeline::{
//!     AbsaPipeline, DependencyParser, PolarityScorer, PosTagger, SentimentScore, ValenceScorer,
//! };
//! use aspect_ensemble::types::{DepLabel, PennTag, PosClass, TaggedWord};
//!
//! struct TinyParser;
//! impl DependencyParser for TinyParser {
//!     fn parse(&self, sentence: &str) -> Result<Vec<ParsedNode>, ParseError> {
//!         match sentence {
//!             "Great camera" => Ok(vec![
//!                 ParsedNode::new("Great", PosClass::Adjective, DepLabel::Amod, Some(1)),
//!                 ParsedNode::new("camera", PosClass::Noun, DepLabel::Root, None),
//!             ]),
//!             _ => Err(ParseError::new(0, "unknown sentence")),
//!         }
//!     }
//! }
//!
//! struct TinyTagger;
//! impl PosTagger for TinyTagger {
//!     fn tag(&self, sentence: &str) -> Vec<TaggedWord> {
//!         sentence
//!             .split_whitespace()
//!             .map(|w| TaggedWord::new(w, PennTag::parse(if w == "camera" { "NN" } else { "JJ" })))
//!             .collect()
//!     }
//! }
//!
//! struct TinyScorer;
//! impl PolarityScorer for TinyScorer {
//!     fn score(&self, _phrase: &str) -> SentimentScore {
//!         SentimentScore { polarity: 0.8, subjectivity: 0.7 }
//!     }
//! }
//! impl ValenceScorer for TinyScorer {
//!     fn compound(&self, _phrase: &str) -> f64 {
//!         0.6
//!     }
//! }
//!
//! let pipeline = AbsaPipeline::new(TinyParser, TinyTagger, TinyScorer, TinyScorer);
//! let records = pipeline.run("Great camera.").unwrap();
//! assert!(records.iter().any(|r| r.aspect == "camera"));
//! ```

pub mod ensemble;
pub mod error;
pub mod graph;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod strategy;
pub mod types;

pub use ensemble::EnsembleMerger;
pub use error::{AbsaError, ParseError};
pub use pipeline::{AbsaPipeline, DependencyParser, PolarityScorer, PosTagger, ValenceScorer};
pub use types::{AbsaConfig, AnnotatedPair, MergedRecord, RawPair};

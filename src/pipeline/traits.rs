//! Collaborator trait definitions for the pipeline.
//!
//! Each trait represents one external service boundary. Implementations
//! are statically dispatched; batch processing additionally requires
//! `Sync` so reviews can be fanned out across threads.
//!
//! Calls are synchronous and unbounded: a collaborator that never returns
//! stalls its review. Timeout enforcement belongs in a wrapping adapter
//! implementation, not in the core.

use crate::error::ParseError;
use crate::graph::arena::ParsedNode;
use crate::types::TaggedWord;

/// Dependency parser over a single sentence.
///
/// # Contract
///
/// - **Input**: one sentence string.
/// - **Output**: nodes in surface order, each with text, coarse POS
///   class, dependency label, and parent index, such that a
///   [`SentenceGraph`](crate::graph::SentenceGraph) can be built from
///   them. Exactly one node (the root) has no parent.
/// - **Failure**: a [`ParseError`]; the caller folds it into "skip this
///   sentence and continue". `Ok` output that violates the contract
///   (out-of-range parent indices, zero or multiple roots) is rejected
///   when the sentence graph is built and the sentence is skipped the
///   same way.
pub trait DependencyParser {
    /// Parse one sentence into dependency nodes.
    fn parse(&self, sentence: &str) -> Result<Vec<ParsedNode>, ParseError>;
}

/// Fine-grained POS tagger over a single sentence.
///
/// The clause clusterer needs Penn-style tags (NN vs. NNS vs. JJ…) that
/// the parser's coarse classes cannot express; tokenization happens
/// inside the tagger.
pub trait PosTagger {
    /// Tokenize and tag one sentence.
    fn tag(&self, sentence: &str) -> Vec<TaggedWord>;
}

/// Output of the polarity/subjectivity scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Signed sentiment strength in [-1, 1].
    pub polarity: f64,
    /// Opinion vs. fact degree in [0, 1].
    pub subjectivity: f64,
}

/// Sentiment scorer A: polarity plus subjectivity.
///
/// Total over any string input, including the empty string.
pub trait PolarityScorer {
    fn score(&self, phrase: &str) -> SentimentScore;
}

/// Sentiment scorer B: lexical compound valence in [-1, 1], applying its
/// own negation/intensifier rules independently of scorer A.
///
/// Total over any string input, including the empty string.
pub trait ValenceScorer {
    fn compound(&self, phrase: &str) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DepLabel, PennTag, PosClass};

    struct FixedParser;

    impl DependencyParser for FixedParser {
        fn parse(&self, _sentence: &str) -> Result<Vec<ParsedNode>, ParseError> {
            Ok(vec![ParsedNode::new(
                "works",
                PosClass::Verb,
                DepLabel::Root,
                None,
            )])
        }
    }

    struct FixedTagger;

    impl PosTagger for FixedTagger {
        fn tag(&self, sentence: &str) -> Vec<TaggedWord> {
            sentence
                .split_whitespace()
                .map(|w| TaggedWord::new(w, PennTag::Nn))
                .collect()
        }
    }

    struct NeutralScorer;

    impl PolarityScorer for NeutralScorer {
        fn score(&self, _phrase: &str) -> SentimentScore {
            SentimentScore {
                polarity: 0.0,
                subjectivity: 0.0,
            }
        }
    }

    impl ValenceScorer for NeutralScorer {
        fn compound(&self, _phrase: &str) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_traits_are_object_safe() {
        let _parser: Box<dyn DependencyParser> = Box::new(FixedParser);
        let _tagger: Box<dyn PosTagger> = Box::new(FixedTagger);
        let _polarity: Box<dyn PolarityScorer> = Box::new(NeutralScorer);
        let _valence: Box<dyn ValenceScorer> = Box::new(NeutralScorer);
    }

    #[test]
    fn test_tagger_tokenizes() {
        let tagged = FixedTagger.tag("battery life");
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].text, "battery");
    }

    #[test]
    fn test_scorers_are_total_on_empty_input() {
        let score = NeutralScorer.score("");
        assert_eq!(score.polarity, 0.0);
        assert_eq!(NeutralScorer.compound(""), 0.0);
    }
}

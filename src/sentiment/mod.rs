//! Sentiment annotation
//!
//! Attaches polarity and subjectivity to raw pairs by combining the two
//! external scorers: polarity is the arithmetic mean of scorer A's
//! polarity and scorer B's compound valence; subjectivity comes from
//! scorer A alone.

use crate::pipeline::traits::{PolarityScorer, ValenceScorer};
use crate::types::{AnnotatedPair, RawPair};

/// Annotates raw pairs with sentiment via the two scorer collaborators.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnnotator<'a, A, B> {
    polarity_scorer: &'a A,
    valence_scorer: &'a B,
}

impl<'a, A, B> SentimentAnnotator<'a, A, B>
where
    A: PolarityScorer,
    B: ValenceScorer,
{
    pub fn new(polarity_scorer: &'a A, valence_scorer: &'a B) -> Self {
        Self {
            polarity_scorer,
            valence_scorer,
        }
    }

    /// Annotate a single pair. The scoring phrase is the description,
    /// a space, and the aspect.
    pub fn annotate_pair(&self, pair: &RawPair) -> AnnotatedPair {
        let phrase = format!("{} {}", pair.description, pair.aspect);
        let score = self.polarity_scorer.score(&phrase);
        let compound = self.valence_scorer.compound(&phrase);
        AnnotatedPair {
            aspect: pair.aspect.clone(),
            description: pair.description.clone(),
            polarity: (score.polarity + compound) / 2.0,
            subjectivity: score.subjectivity,
        }
    }

    /// Annotate a whole strategy's output, preserving order.
    pub fn annotate(&self, pairs: Vec<RawPair>) -> Vec<AnnotatedPair> {
        pairs.iter().map(|pair| self.annotate_pair(pair)).collect()
    }
}

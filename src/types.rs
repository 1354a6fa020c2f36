//! Shared types for the extraction pipeline.
//!
//! POS tag enums, the record types flowing between stages, and the
//! pipeline configuration live here.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech class assigned by the dependency parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosClass {
    /// True for the classes that can serve as an aspect target.
    #[inline]
    pub fn is_noun_or_verb(&self) -> bool {
        matches!(self, PosClass::Noun | PosClass::Verb)
    }

    /// True for the classes that carry an opinion (descriptive tokens).
    #[inline]
    pub fn is_descriptive(&self) -> bool {
        matches!(self, PosClass::Adjective | PosClass::Adverb)
    }
}

/// Fine-grained Penn Treebank tag produced by the POS tagger collaborator.
///
/// Only the tags the clause clusterer distinguishes get their own variant;
/// everything else maps to [`PennTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PennTag {
    /// Singular common noun (NN).
    Nn,
    /// Plural common noun (NNS).
    Nns,
    /// Proper noun, singular or plural (NNP/NNPS).
    Nnp,
    /// Adjective (JJ).
    Jj,
    /// Comparative adjective (JJR).
    Jjr,
    /// Superlative adjective (JJS).
    Jjs,
    /// Adverb (RB).
    Rb,
    /// Comparative adverb (RBR).
    Rbr,
    /// Superlative adverb (RBS).
    Rbs,
    /// Verb, any inflection (VB/VBD/VBG/VBN/VBP/VBZ).
    Vb,
    /// Any other tag.
    Other,
}

impl PennTag {
    /// Parse a raw Penn Treebank tag string.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "NN" => PennTag::Nn,
            "NNS" => PennTag::Nns,
            "NNP" | "NNPS" => PennTag::Nnp,
            "JJ" => PennTag::Jj,
            "JJR" => PennTag::Jjr,
            "JJS" => PennTag::Jjs,
            "RB" => PennTag::Rb,
            "RBR" => PennTag::Rbr,
            "RBS" => PennTag::Rbs,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => PennTag::Vb,
            _ => PennTag::Other,
        }
    }

    /// Singular common noun — the only tag that participates in
    /// compound-noun fusion.
    #[inline]
    pub fn is_common_noun(&self) -> bool {
        matches!(self, PennTag::Nn)
    }

    /// True for tags eligible as feature candidates:
    /// {NN, NNS, JJ, JJR, JJS, RB, RBR, RBS}.
    #[inline]
    pub fn is_feature_candidate(&self) -> bool {
        matches!(
            self,
            PennTag::Nn
                | PennTag::Nns
                | PennTag::Jj
                | PennTag::Jjr
                | PennTag::Jjs
                | PennTag::Rb
                | PennTag::Rbr
                | PennTag::Rbs
        )
    }

    /// True for noun- or verb-headed tags. Only features with such a tag
    /// survive the final cluster filter; adjectives and adverbs feed
    /// descriptions but never become aspects themselves.
    #[inline]
    pub fn is_noun_or_verb_like(&self) -> bool {
        matches!(self, PennTag::Nn | PennTag::Nns | PennTag::Nnp | PennTag::Vb)
    }
}

/// Dependency relation between a node and its syntactic head.
///
/// Closed enum covering the relations the extraction rules test for;
/// parser collaborators map their label strings through [`DepLabel::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepLabel {
    /// Negation modifier.
    Neg,
    /// Compound-noun component.
    Compound,
    /// Nominal subject.
    Nsubj,
    /// Relative clause modifier.
    AclRelcl,
    /// Object (UD style).
    Obj,
    /// Direct object (legacy style).
    Dobj,
    /// Agent of a passive verb.
    Agent,
    /// Adverbial modifier.
    Advmod,
    /// Adjectival modifier.
    Amod,
    /// Collapsed "of" preposition.
    PrepOf,
    /// Adjectival complement.
    Acomp,
    /// Open clausal complement.
    Xcomp,
    /// Clausal subject.
    Csubj,
    /// Root of the sentence.
    Root,
    /// Any other relation.
    Other,
}

impl DepLabel {
    /// Parse a raw dependency label string.
    pub fn parse(label: &str) -> Self {
        match label {
            "neg" => DepLabel::Neg,
            "compound" => DepLabel::Compound,
            "nsubj" => DepLabel::Nsubj,
            "acl:relcl" => DepLabel::AclRelcl,
            "obj" => DepLabel::Obj,
            "dobj" => DepLabel::Dobj,
            "agent" => DepLabel::Agent,
            "advmod" => DepLabel::Advmod,
            "amod" => DepLabel::Amod,
            "prep_of" => DepLabel::PrepOf,
            "acomp" => DepLabel::Acomp,
            "xcomp" => DepLabel::Xcomp,
            "csubj" => DepLabel::Csubj,
            "root" | "ROOT" => DepLabel::Root,
            _ => DepLabel::Other,
        }
    }

    /// True if an edge with this relation may associate a feature with a
    /// related word in the clause clusterer.
    #[inline]
    pub fn is_associative(&self) -> bool {
        matches!(
            self,
            DepLabel::Nsubj
                | DepLabel::AclRelcl
                | DepLabel::Obj
                | DepLabel::Dobj
                | DepLabel::Agent
                | DepLabel::Advmod
                | DepLabel::Amod
                | DepLabel::Neg
                | DepLabel::PrepOf
                | DepLabel::Acomp
                | DepLabel::Xcomp
                | DepLabel::Compound
                | DepLabel::Csubj
        )
    }
}

/// A surface word with its fine-grained POS tag, as returned by the
/// tagger collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub text: String,
    pub tag: PennTag,
}

impl TaggedWord {
    pub fn new(text: impl Into<String>, tag: PennTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// An (aspect, description) pair as produced by one extraction strategy,
/// before sentiment annotation. Texts are unnormalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    /// Product attribute text.
    pub aspect: String,
    /// Opinion phrase text.
    pub description: String,
}

impl RawPair {
    pub fn new(aspect: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            aspect: aspect.into(),
            description: description.into(),
        }
    }
}

/// A raw pair with sentiment attached. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPair {
    pub aspect: String,
    pub description: String,
    /// Mean of the two scorer polarities, roughly in [-1, 1].
    pub polarity: f64,
    /// Subjectivity from scorer A, in [0, 1].
    pub subjectivity: f64,
}

/// Final deduplicated output record for one review.
///
/// Aspect and description are normalized (spaces replaced with
/// underscores); polarity is accumulated by addition across duplicate
/// (aspect, description) keys; subjectivity comes from the first
/// occurrence only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub aspect: String,
    pub description: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsaConfig {
    /// Stopword language passed to the stopword filter.
    pub language: String,
    /// Additional stopwords beyond the built-in list.
    pub extra_stopwords: Vec<String>,
    /// Surface forms treated as negation markers during fusion.
    pub negation_markers: Vec<String>,
}

impl Default for AbsaConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            negation_markers: vec!["not".to_string(), "non".to_string()],
        }
    }
}

impl AbsaConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the extra stopword list, replacing any previous one.
    pub fn with_extra_stopwords(mut self, words: &[&str]) -> Self {
        self.extra_stopwords = words.iter().map(|w| w.to_string()).collect();
        self
    }

    /// Override the negation marker set.
    pub fn with_negation_markers(mut self, markers: &[&str]) -> Self {
        self.negation_markers = markers.iter().map(|m| m.to_string()).collect();
        self
    }
}

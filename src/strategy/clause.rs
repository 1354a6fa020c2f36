//! Clause feature-description clustering
//!
//! The second extraction strategy works over the whole review at once:
//! compound nouns and negation markers are fused into single tokens, the
//! fused sentences are re-tagged and stopword-filtered, and feature
//! candidates are associated with related words through an allow-listed
//! set of dependency relations. Association scans the edges of every
//! sentence in the review, so a candidate in one sentence can pick up
//! related words from another.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::arena::SentenceGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::traits::{DependencyParser, PosTagger};
use crate::types::{AbsaConfig, DepLabel, PennTag, RawPair, TaggedWord};

/// Mapping from a fused token back to its original two-word,
/// underscore-joined form.
///
/// Owned by the fusion preprocessor; consulted read-only during final
/// formatting.
#[derive(Debug, Clone, Default)]
pub struct WordExpansions {
    map: FxHashMap<String, String>,
}

impl WordExpansions {
    /// Record the expansion for a fused token.
    pub fn insert(&mut self, fused: impl Into<String>, expanded: impl Into<String>) {
        self.map.insert(fused.into(), expanded.into());
    }

    /// Expand a word back to its underscore-joined form, or pass it
    /// through unchanged when it was never fused.
    pub fn expand<'a>(&'a self, word: &'a str) -> &'a str {
        self.map.get(word).map(String::as_str).unwrap_or(word)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Fuses adjacent common-noun pairs and negation markers into single
/// tokens, recording expansions as it goes.
#[derive(Debug, Clone)]
struct FusionPreprocessor {
    negation_markers: FxHashSet<String>,
}

impl FusionPreprocessor {
    fn new(cfg: &AbsaConfig) -> Self {
        Self {
            negation_markers: cfg
                .negation_markers
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
        }
    }

    /// Left-to-right scan: a negation marker fuses with the following
    /// token, and two adjacent common nouns fuse into one compound. The
    /// consumed token is skipped; everything else passes through.
    fn fuse(&self, tagged: &[TaggedWord], expansions: &mut WordExpansions) -> Vec<String> {
        let mut out = Vec::with_capacity(tagged.len());
        let mut i = 0;
        while i < tagged.len() {
            let current = &tagged[i];
            let fusable = i + 1 < tagged.len()
                && (self.negation_markers.contains(&current.text.to_lowercase())
                    || (current.tag.is_common_noun() && tagged[i + 1].tag.is_common_noun()));
            if fusable {
                let next = &tagged[i + 1];
                let fused = format!("{}{}", current.text, next.text);
                expansions.insert(&fused, format!("{}_{}", current.text, next.text));
                out.push(fused);
                i += 2;
            } else {
                out.push(current.text.clone());
                i += 1;
            }
        }
        out
    }
}

/// A dependency edge lifted out of its sentence, for review-wide
/// association.
#[derive(Debug, Clone)]
struct OwnedEdge {
    child: String,
    head: String,
    label: DepLabel,
}

/// Result of clause clustering for one review.
#[derive(Debug, Clone, Default)]
pub struct ClauseOutput {
    /// Raw pairs in candidate order; duplicates are kept (the ensemble
    /// merge accumulates them).
    pub pairs: Vec<RawPair>,
    /// Sentences dropped because the parser failed on them.
    pub skipped_parses: usize,
}

/// The clause feature-description clusterer.
#[derive(Debug, Clone)]
pub struct ClauseClusterer {
    fusion: FusionPreprocessor,
    stopwords: StopwordFilter,
}

impl ClauseClusterer {
    pub fn new(cfg: &AbsaConfig) -> Self {
        Self {
            fusion: FusionPreprocessor::new(cfg),
            stopwords: StopwordFilter::for_clustering(cfg),
        }
    }

    /// Mine raw pairs from all sentences of one review.
    pub fn extract<T, P>(&self, sentences: &[String], tagger: &T, parser: &P) -> ClauseOutput
    where
        T: PosTagger,
        P: DependencyParser,
    {
        let mut expansions = WordExpansions::default();

        // Fusion pass: tag, fuse, and rebuild each sentence string.
        let fused_sentences: Vec<String> = sentences
            .iter()
            .map(|sentence| {
                self.fusion
                    .fuse(&tagger.tag(sentence), &mut expansions)
                    .join(" ")
            })
            .collect();

        // Working sequence: re-tag the fused text and drop stopwords
        // (negation markers are kept by the filter).
        let working: Vec<Vec<TaggedWord>> = fused_sentences
            .iter()
            .map(|sentence| {
                tagger
                    .tag(sentence)
                    .into_iter()
                    .filter(|word| !self.stopwords.is_stopword(&word.text))
                    .collect()
            })
            .collect();

        // Dependency edges for the whole review. A failed or malformed
        // parse drops that sentence's edges and nothing else.
        let mut edges: Vec<OwnedEdge> = Vec::new();
        let mut skipped_parses = 0;
        for fused in &fused_sentences {
            match parser.parse(fused).and_then(SentenceGraph::from_nodes) {
                Ok(graph) => {
                    edges.extend(graph.edges().map(|edge| OwnedEdge {
                        child: edge.child.to_string(),
                        head: edge.head.to_string(),
                        label: edge.label,
                    }));
                }
                Err(_) => skipped_parses += 1,
            }
        }

        // Candidate features, in review order. The tag recorded last for
        // a surface form wins the filter lookup.
        let mut candidates: Vec<TaggedWord> = Vec::new();
        let mut tag_by_text: FxHashMap<String, PennTag> = FxHashMap::default();
        for sentence in &working {
            for word in sentence {
                if word.tag.is_feature_candidate() {
                    candidates.push(word.clone());
                    tag_by_text.insert(word.text.clone(), word.tag);
                }
            }
        }

        // Associate each candidate through allow-listed edges of every
        // sentence, then keep only noun/verb-headed features as aspects.
        let mut pairs = Vec::new();
        for candidate in &candidates {
            let tag = tag_by_text
                .get(&candidate.text)
                .copied()
                .unwrap_or(PennTag::Other);
            if !tag.is_noun_or_verb_like() {
                continue;
            }
            for edge in &edges {
                if !edge.label.is_associative() {
                    continue;
                }
                let related = if edge.child == candidate.text {
                    Some(edge.head.as_str())
                } else if edge.head == candidate.text {
                    Some(edge.child.as_str())
                } else {
                    None
                };
                if let Some(word) = related {
                    pairs.push(RawPair::new(
                        expansions.expand(&candidate.text),
                        expansions.expand(word),
                    ));
                }
            }
        }

        ClauseOutput {
            pairs,
            skipped_parses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::graph::arena::ParsedNode;
    use crate::types::PosClass;

    /// Lexicon-backed tagger covering the fixture vocabulary.
    struct LexTagger;

    impl PosTagger for LexTagger {
        fn tag(&self, sentence: &str) -> Vec<TaggedWord> {
            sentence
                .split_whitespace()
                .map(|word| {
                    let tag = match word.to_lowercase().as_str() {
                        "battery" | "life" | "screen" | "batterylife" | "case" => PennTag::Nn,
                        "good" | "bright" | "cheap" | "notbright" => PennTag::Jj,
                        "easily" => PennTag::Rb,
                        "cracked" | "scratches" => PennTag::Vb,
                        _ => PennTag::Other,
                    };
                    TaggedWord::new(word, tag)
                })
                .collect()
        }
    }

    /// Parser that serves canned trees and fails on anything unknown.
    struct CannedParser {
        trees: FxHashMap<String, Vec<ParsedNode>>,
    }

    impl CannedParser {
        fn new(trees: Vec<(&str, Vec<ParsedNode>)>) -> Self {
            Self {
                trees: trees
                    .into_iter()
                    .map(|(s, nodes)| (s.to_string(), nodes))
                    .collect(),
            }
        }
    }

    impl DependencyParser for CannedParser {
        fn parse(&self, sentence: &str) -> Result<Vec<ParsedNode>, ParseError> {
            self.trees
                .get(sentence)
                .cloned()
                .ok_or_else(|| ParseError::new(0, format!("no tree for: {sentence}")))
        }
    }

    fn clusterer() -> ClauseClusterer {
        ClauseClusterer::new(&AbsaConfig::default())
    }

    #[test]
    fn test_fusion_joins_adjacent_common_nouns() {
        let mut expansions = WordExpansions::default();
        let fusion = FusionPreprocessor::new(&AbsaConfig::default());
        let tagged = vec![
            TaggedWord::new("battery", PennTag::Nn),
            TaggedWord::new("life", PennTag::Nn),
            TaggedWord::new("is", PennTag::Other),
            TaggedWord::new("good", PennTag::Jj),
        ];

        let fused = fusion.fuse(&tagged, &mut expansions);

        assert_eq!(fused, vec!["batterylife", "is", "good"]);
        assert_eq!(expansions.expand("batterylife"), "battery_life");
    }

    #[test]
    fn test_fusion_joins_negation_marker_with_next_token() {
        let mut expansions = WordExpansions::default();
        let fusion = FusionPreprocessor::new(&AbsaConfig::default());
        let tagged = vec![
            TaggedWord::new("not", PennTag::Other),
            TaggedWord::new("bright", PennTag::Jj),
        ];

        let fused = fusion.fuse(&tagged, &mut expansions);

        assert_eq!(fused, vec!["notbright"]);
        assert_eq!(expansions.expand("notbright"), "not_bright");
    }

    #[test]
    fn test_fusion_passes_unfused_tokens_through() {
        let mut expansions = WordExpansions::default();
        let fusion = FusionPreprocessor::new(&AbsaConfig::default());
        let tagged = vec![
            TaggedWord::new("screen", PennTag::Nn),
            TaggedWord::new("is", PennTag::Other),
            TaggedWord::new("bright", PennTag::Jj),
        ];

        let fused = fusion.fuse(&tagged, &mut expansions);

        assert_eq!(fused, vec!["screen", "is", "bright"]);
        assert!(expansions.is_empty());
    }

    #[test]
    fn test_expansion_passthrough_for_unknown_word() {
        let expansions = WordExpansions::default();
        assert_eq!(expansions.expand("screen"), "screen");
    }

    #[test]
    fn test_extract_clusters_fused_compound() {
        // "The battery life is good" fuses to "The batterylife is good";
        // "good" attaches to the compound via amod.
        let parser = CannedParser::new(vec![(
            "The batterylife is good",
            vec![
                ParsedNode::new("The", PosClass::Other, DepLabel::Other, Some(1)),
                ParsedNode::new("batterylife", PosClass::Noun, DepLabel::Nsubj, Some(2)),
                ParsedNode::new("is", PosClass::Other, DepLabel::Root, None),
                ParsedNode::new("good", PosClass::Adjective, DepLabel::Amod, Some(1)),
            ],
        )]);
        let sentences = vec!["The battery life is good".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        // "batterylife" (NN) survives the filter and expands back to its
        // underscore form; "good" (JJ) feeds descriptions only.
        assert_eq!(
            output.pairs,
            vec![
                RawPair::new("battery_life", "is"),
                RawPair::new("battery_life", "good"),
            ]
        );
        assert_eq!(output.skipped_parses, 0);
    }

    #[test]
    fn test_association_crosses_sentences() {
        // "screen" occurs in both sentences; its cluster picks up edges
        // from each, regardless of which sentence the candidate came from.
        let parser = CannedParser::new(vec![
            (
                "screen cracked",
                vec![
                    ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(1)),
                    ParsedNode::new("cracked", PosClass::Verb, DepLabel::Root, None),
                ],
            ),
            (
                "screen scratches easily",
                vec![
                    ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(1)),
                    ParsedNode::new("scratches", PosClass::Verb, DepLabel::Root, None),
                    ParsedNode::new("easily", PosClass::Adverb, DepLabel::Advmod, Some(1)),
                ],
            ),
        ]);
        let sentences = vec!["screen cracked".to_string(), "screen scratches easily".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        // Each "screen" candidate accumulates related words from both
        // sentences; the candidate list is not deduplicated.
        let screen_descriptions: Vec<&str> = output
            .pairs
            .iter()
            .filter(|pair| pair.aspect == "screen")
            .map(|pair| pair.description.as_str())
            .collect();
        assert_eq!(
            screen_descriptions,
            vec!["cracked", "scratches", "cracked", "scratches"]
        );
    }

    #[test]
    fn test_adverb_candidates_never_become_aspects() {
        let parser = CannedParser::new(vec![(
            "screen scratches easily",
            vec![
                ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(1)),
                ParsedNode::new("scratches", PosClass::Verb, DepLabel::Root, None),
                ParsedNode::new("easily", PosClass::Adverb, DepLabel::Advmod, Some(1)),
            ],
        )]);
        let sentences = vec!["screen scratches easily".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        assert!(output.pairs.iter().all(|pair| pair.aspect != "easily"));
        assert!(!output.pairs.is_empty());
    }

    #[test]
    fn test_parse_failure_skips_sentence_only() {
        let parser = CannedParser::new(vec![(
            "screen cracked",
            vec![
                ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(1)),
                ParsedNode::new("cracked", PosClass::Verb, DepLabel::Root, None),
            ],
        )]);
        // The second sentence has no canned tree, so parsing it fails.
        let sentences = vec!["screen cracked".to_string(), "mystery words".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        assert_eq!(output.skipped_parses, 1);
        assert_eq!(output.pairs, vec![RawPair::new("screen", "cracked")]);
    }

    #[test]
    fn test_malformed_tree_counts_as_skipped() {
        // An Ok parse whose parent indices are out of range contributes
        // no edges, same as a failed parse.
        let parser = CannedParser::new(vec![(
            "screen cracked",
            vec![
                ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(99)),
                ParsedNode::new("cracked", PosClass::Verb, DepLabel::Root, None),
            ],
        )]);
        let sentences = vec!["screen cracked".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        assert!(output.pairs.is_empty());
        assert_eq!(output.skipped_parses, 1);
    }

    #[test]
    fn test_all_sentences_unparseable_yields_empty() {
        let parser = CannedParser::new(vec![]);
        let sentences = vec!["anything at all".to_string()];

        let output = clusterer().extract(&sentences, &LexTagger, &parser);

        assert!(output.pairs.is_empty());
        assert_eq!(output.skipped_parses, 1);
    }
}

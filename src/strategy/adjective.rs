//! Adjective/adverb target extraction
//!
//! For every descriptive token (adjective or adverb) in a sentence, a
//! bounded traversal locates the noun or verb it modifies. The search is
//! deliberately limited to two hops: the descriptive token's own
//! children first, then its parent and the parent's children. The first
//! hop that yields anything ends the search; the second hop is final
//! even when it yields nothing.

use crate::graph::arena::{NodeId, SentenceGraph};
use crate::graph::negation::NegationBindings;
use crate::types::{PosClass, RawPair};

/// Traversal state for the target search.
///
/// Transitions to `Done` as soon as a state yields a non-empty result,
/// so the search order cannot silently deepen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetSearch {
    SearchChildren,
    SearchParentAndItsChildren,
    Done,
}

/// Extracts (aspect, description) pairs from descriptive tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjectiveTargetExtractor;

impl AdjectiveTargetExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Mine all raw pairs from one parsed sentence.
    pub fn extract(&self, graph: &SentenceGraph, negations: &NegationBindings) -> Vec<RawPair> {
        let mut pairs = Vec::new();
        for id in graph.node_ids() {
            match graph.pos(id) {
                PosClass::Adjective => {
                    let negation = negations.negation_for(id);
                    self.find_targets(graph, negations, id, None, negation, &mut pairs);
                }
                PosClass::Adverb => {
                    let verb = self.governing_verb(graph, id);
                    let negation = negations.negation_for(id);
                    self.find_targets(graph, negations, id, verb, negation, &mut pairs);
                }
                _ => {}
            }
        }
        pairs
    }

    /// The verb node that has `adverb` as a direct child, if any.
    fn governing_verb(&self, graph: &SentenceGraph, adverb: NodeId) -> Option<NodeId> {
        graph
            .parent(adverb)
            .filter(|&parent| graph.pos(parent) == PosClass::Verb)
    }

    /// Two-hop target search for one descriptive token.
    fn find_targets(
        &self,
        graph: &SentenceGraph,
        negations: &NegationBindings,
        descriptive: NodeId,
        verb: Option<NodeId>,
        negation: Option<NodeId>,
        pairs: &mut Vec<RawPair>,
    ) {
        let mut state = TargetSearch::SearchChildren;
        while state != TargetSearch::Done {
            state = match state {
                TargetSearch::SearchChildren => {
                    let found = self.emit_child_targets(
                        graph,
                        negations,
                        descriptive,
                        graph.children(descriptive),
                        verb,
                        negation,
                        pairs,
                    );
                    if found {
                        TargetSearch::Done
                    } else {
                        TargetSearch::SearchParentAndItsChildren
                    }
                }
                TargetSearch::SearchParentAndItsChildren => {
                    if let Some(parent) = graph.parent(descriptive) {
                        if graph.pos(parent).is_noun_or_verb() {
                            pairs.push(self.make_pair(
                                graph,
                                negations,
                                descriptive,
                                parent,
                                verb,
                                negation,
                            ));
                        }
                        self.emit_child_targets(
                            graph,
                            negations,
                            descriptive,
                            graph.children(parent),
                            verb,
                            negation,
                            pairs,
                        );
                    }
                    // Final either way: no further hops.
                    TargetSearch::Done
                }
                TargetSearch::Done => TargetSearch::Done,
            };
        }
    }

    /// Emit one pair per noun/verb node among `candidates`. Returns
    /// whether any target was found.
    #[allow(clippy::too_many_arguments)]
    fn emit_child_targets(
        &self,
        graph: &SentenceGraph,
        negations: &NegationBindings,
        descriptive: NodeId,
        candidates: &[NodeId],
        verb: Option<NodeId>,
        negation: Option<NodeId>,
        pairs: &mut Vec<RawPair>,
    ) -> bool {
        let mut found = false;
        for &candidate in candidates {
            if graph.pos(candidate).is_noun_or_verb() {
                found = true;
                pairs.push(self.make_pair(graph, negations, descriptive, candidate, verb, negation));
            }
        }
        found
    }

    /// Build the raw pair for one target.
    ///
    /// When no negation is bound directly to the descriptive token, the
    /// description is re-derived with the negation bound to this target
    /// instead (if any).
    fn make_pair(
        &self,
        graph: &SentenceGraph,
        negations: &NegationBindings,
        descriptive: NodeId,
        target: NodeId,
        verb: Option<NodeId>,
        negation: Option<NodeId>,
    ) -> RawPair {
        let description = match negation {
            Some(neg) => self.description_text(graph, descriptive, verb, Some(neg)),
            None => {
                let target_negation = negations.negation_for(target);
                self.description_text(graph, descriptive, verb, target_negation)
            }
        };
        RawPair::new(self.aspect_text(graph, target), description)
    }

    /// Aspect text for a target, prefixed by its compound component when
    /// one exists ("battery life" rather than "life").
    fn aspect_text(&self, graph: &SentenceGraph, target: NodeId) -> String {
        match graph.compound_of(target) {
            Some(compound) => format!("{} {}", graph.text(compound), graph.text(target)),
            None => graph.text(target).to_string(),
        }
    }

    /// Description text: `[governing verb] [negation] [descriptive
    /// token]`, space-joined, front terms only when present.
    fn description_text(
        &self,
        graph: &SentenceGraph,
        descriptive: NodeId,
        verb: Option<NodeId>,
        negation: Option<NodeId>,
    ) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if let Some(verb) = verb {
            parts.push(graph.text(verb));
        }
        if let Some(negation) = negation {
            parts.push(graph.text(negation));
        }
        parts.push(graph.text(descriptive));
        parts.join(" ")
    }
}

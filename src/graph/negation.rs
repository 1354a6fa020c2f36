//! Negation binding resolution
//!
//! A node whose dependency label is `neg` scopes its syntactic parent and
//! that parent's other children. Bindings are computed once per sentence
//! and consulted read-only afterward.

use rustc_hash::FxHashSet;

use crate::graph::arena::{NodeId, SentenceGraph};
use crate::types::DepLabel;

/// Mapping from each negation node to the set of nodes it scopes.
///
/// Insertion order is preserved so lookups are deterministic when a node
/// is scoped by more than one negation.
#[derive(Debug, Clone, Default)]
pub struct NegationBindings {
    bindings: Vec<(NodeId, FxHashSet<NodeId>)>,
}

impl NegationBindings {
    /// Scan a sentence and bind every negation node to its parent and
    /// siblings. Returns an empty mapping when the sentence has no
    /// negation node.
    pub fn from_graph(graph: &SentenceGraph) -> Self {
        // Cheap short-circuit for the common no-negation case.
        if !graph.node_ids().any(|id| graph.dep(id) == DepLabel::Neg) {
            return Self::default();
        }

        let mut bindings = Vec::new();
        for parent in graph.node_ids() {
            let children = graph.children(parent);
            for &child in children {
                if graph.dep(child) != DepLabel::Neg {
                    continue;
                }
                let mut scoped: FxHashSet<NodeId> = FxHashSet::default();
                scoped.insert(parent);
                for &sibling in children {
                    if sibling != child {
                        scoped.insert(sibling);
                    }
                }
                bindings.push((child, scoped));
            }
        }
        Self { bindings }
    }

    /// The negation node bound to `node`, or `None` if the node is not
    /// negated anywhere in the sentence.
    pub fn negation_for(&self, node: NodeId) -> Option<NodeId> {
        self.bindings
            .iter()
            .find(|(_, scoped)| scoped.contains(&node))
            .map(|&(negation, _)| negation)
    }

    /// True if the sentence contains no negation.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of negation nodes in the sentence.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::arena::ParsedNode;
    use crate::types::PosClass;

    /// "The screen is not bright."
    fn screen_sentence() -> SentenceGraph {
        SentenceGraph::from_nodes(vec![
            ParsedNode::new("The", PosClass::Other, DepLabel::Other, Some(1)),
            ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(2)),
            ParsedNode::new("is", PosClass::Other, DepLabel::Root, None),
            ParsedNode::new("not", PosClass::Other, DepLabel::Neg, Some(2)),
            ParsedNode::new("bright", PosClass::Adjective, DepLabel::Acomp, Some(2)),
        ])
        .unwrap()
    }

    #[test]
    fn test_negation_binds_parent_and_siblings() {
        let graph = screen_sentence();
        let bindings = NegationBindings::from_graph(&graph);

        assert_eq!(bindings.len(), 1);
        // "not" (3) scopes "is" (2), "screen" (1) and "bright" (4).
        assert_eq!(bindings.negation_for(2), Some(3));
        assert_eq!(bindings.negation_for(1), Some(3));
        assert_eq!(bindings.negation_for(4), Some(3));
    }

    #[test]
    fn test_negation_does_not_scope_itself_or_unrelated() {
        let graph = screen_sentence();
        let bindings = NegationBindings::from_graph(&graph);

        assert_eq!(bindings.negation_for(3), None);
        assert_eq!(bindings.negation_for(0), None);
    }

    #[test]
    fn test_no_negation_short_circuits() {
        let graph = SentenceGraph::from_nodes(vec![
            ParsedNode::new("screen", PosClass::Noun, DepLabel::Nsubj, Some(1)),
            ParsedNode::new("works", PosClass::Verb, DepLabel::Root, None),
        ])
        .unwrap();
        let bindings = NegationBindings::from_graph(&graph);

        assert!(bindings.is_empty());
        assert_eq!(bindings.negation_for(0), None);
    }

    #[test]
    fn test_empty_sentence() {
        let bindings = NegationBindings::from_graph(&SentenceGraph::from_nodes(vec![]).unwrap());
        assert!(bindings.is_empty());
    }
}

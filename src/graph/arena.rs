//! Arena-backed sentence graph
//!
//! Nodes are addressed by `u32` index into a per-sentence arena; children
//! lookup is an adjacency list indexed by node index. Nothing here relies
//! on reference identity — membership tests use node indices.

use crate::error::ParseError;
use crate::types::{DepLabel, PosClass};

/// Index of a node within one sentence's arena.
pub type NodeId = u32;

/// One node of dependency parser output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNode {
    /// Surface text.
    pub text: String,
    /// Coarse POS class.
    pub pos: PosClass,
    /// Relation to the syntactic parent.
    pub dep: DepLabel,
    /// Parent node index; `None` for the root.
    pub parent: Option<NodeId>,
}

impl ParsedNode {
    pub fn new(
        text: impl Into<String>,
        pos: PosClass,
        dep: DepLabel,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            text: text.into(),
            pos,
            dep,
            parent,
        }
    }
}

/// A dependency edge viewed as (child text, head text, relation).
///
/// The clause clusterer associates feature candidates through these;
/// root edges (nodes without a parent) are not represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepEdge<'a> {
    pub child: &'a str,
    pub head: &'a str,
    pub label: DepLabel,
}

/// Read-only, index-addressable view over one parsed sentence.
///
/// Every non-root node has exactly one parent; the structure is a tree,
/// so child traversal cannot cycle.
#[derive(Debug, Clone, Default)]
pub struct SentenceGraph {
    nodes: Vec<ParsedNode>,
    /// Adjacency list: `children[i]` holds the direct children of node `i`,
    /// in parser order.
    children: Vec<Vec<NodeId>>,
}

impl SentenceGraph {
    /// Build a graph from parser output.
    ///
    /// Fails when a parent index is out of range, a node claims itself as
    /// parent, or a non-empty node list does not contain exactly one
    /// root. Callers fold the failure into "skip this sentence".
    pub fn from_nodes(nodes: Vec<ParsedNode>) -> Result<Self, ParseError> {
        let mut roots = 0;
        for (idx, node) in nodes.iter().enumerate() {
            match node.parent {
                None => roots += 1,
                Some(parent) => {
                    if parent as usize >= nodes.len() || parent as usize == idx {
                        return Err(ParseError::new(
                            0,
                            format!("node {idx} has invalid parent index {parent}"),
                        ));
                    }
                }
            }
        }
        if !nodes.is_empty() && roots != 1 {
            return Err(ParseError::new(
                0,
                format!("expected exactly one root, found {roots}"),
            ));
        }

        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
        for (idx, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                children[parent as usize].push(idx as NodeId);
            }
        }
        Ok(Self { nodes, children })
    }

    /// Number of nodes in the sentence.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the sentence holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Surface text of a node.
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id as usize].text
    }

    /// Coarse POS class of a node.
    pub fn pos(&self, id: NodeId) -> PosClass {
        self.nodes[id as usize].pos
    }

    /// Dependency label of a node.
    pub fn dep(&self, id: NodeId) -> DepLabel {
        self.nodes[id as usize].dep
    }

    /// Parent of a node, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id as usize].parent
    }

    /// Direct syntactic children of a node, in parser order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id as usize]
    }

    /// Iterate over all node IDs in parser order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.nodes.len() as NodeId
    }

    /// First child of `id` that is a compound-dependency component, if any.
    ///
    /// Used to prefix aspect text with its compound ("battery life").
    pub fn compound_of(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.dep(child) == DepLabel::Compound)
    }

    /// Iterate over all non-root dependency edges as text triples.
    pub fn edges(&self) -> impl Iterator<Item = DepEdge<'_>> + '_ {
        self.nodes.iter().filter_map(|node| {
            node.parent.map(|parent| DepEdge {
                child: node.text.as_str(),
                head: self.text(parent),
                label: node.dep,
            })
        })
    }
}

//! DecisionGraph - immutable lookup of nodes and their edges.
//!
//! The graph is validated once at construction. After that every edge target
//! is known to exist, so the engine only ever asks for ids the graph produced.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use once_cell::sync::Lazy;
use tracing::warn;

use crate::domain::foundation::{FlowError, NodeId};

use super::catalog;
use super::errors::GraphError;
use super::node::{Node, QuestionNode, TerminalNode};

static STANDARD: Lazy<DecisionGraph> = Lazy::new(|| {
    let graph = DecisionGraph::from_nodes(NodeId::Start, catalog::standard_nodes())
        .expect("standard catalog must form a valid decision graph");

    let unreachable = graph.unreachable_nodes();
    if !unreachable.is_empty() {
        warn!(
            nodes = ?unreachable,
            "Decision graph has nodes unreachable from the entry"
        );
    }

    graph
});

/// Static, directed graph of intro, question and terminal nodes.
#[derive(Debug, Clone)]
pub struct DecisionGraph {
    entry: NodeId,
    nodes: HashMap<NodeId, Node>,
    /// Authoring order, used for stable iteration.
    order: Vec<NodeId>,
}

impl DecisionGraph {
    /// Builds a graph and checks its structural integrity.
    ///
    /// Unreachable nodes are allowed; use [`DecisionGraph::unreachable_nodes`]
    /// to report them.
    ///
    /// # Errors
    ///
    /// Returns `GraphError` if the entry is missing or not an intro node, an id
    /// is repeated, an edge points nowhere, a question repeats or lacks
    /// answers, or a back target is not a predecessor of its question.
    pub fn from_nodes(entry: NodeId, nodes: Vec<Node>) -> Result<Self, GraphError> {
        let mut map = HashMap::with_capacity(nodes.len());
        let mut order = Vec::with_capacity(nodes.len());

        for node in nodes {
            let id = node.id();
            if map.contains_key(&id) {
                return Err(GraphError::DuplicateNode(id));
            }
            order.push(id);
            map.insert(id, node);
        }

        match map.get(&entry) {
            None => return Err(GraphError::MissingEntry(entry)),
            Some(node) if node.as_intro().is_none() => {
                return Err(GraphError::EntryNotIntro(entry))
            }
            Some(_) => {}
        }

        for id in &order {
            let node = &map[id];
            for target in node.successors() {
                if !map.contains_key(&target) {
                    return Err(GraphError::DanglingEdge {
                        from: *id,
                        to: target,
                    });
                }
            }
            if let Some(question) = node.as_question() {
                Self::check_answers(question)?;
            }
        }

        let graph = Self {
            entry,
            nodes: map,
            order,
        };
        graph.check_back_targets()?;
        Ok(graph)
    }

    /// Returns the shared graph of the standard flow.
    pub fn standard() -> &'static DecisionGraph {
        &STANDARD
    }

    fn check_answers(question: &QuestionNode) -> Result<(), GraphError> {
        if question.branches.is_empty() {
            return Err(GraphError::NoAnswers(question.id));
        }
        let mut seen = HashSet::new();
        for branch in &question.branches {
            if !seen.insert(branch.answer) {
                return Err(GraphError::DuplicateAnswer {
                    question: question.id,
                    answer: branch.answer,
                });
            }
        }
        Ok(())
    }

    fn check_back_targets(&self) -> Result<(), GraphError> {
        for node in self.nodes() {
            if let Some(target) = node.back_target() {
                let question = node.id();
                if !self.predecessors(question).contains(&target) {
                    return Err(GraphError::BackTargetNotPredecessor { question, target });
                }
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────

    pub fn entry(&self) -> NodeId {
        self.entry
    }

    /// Returns the node for an id.
    ///
    /// # Errors
    ///
    /// - `UnknownNode` if the graph does not define the id
    pub fn get_node(&self, id: NodeId) -> Result<&Node, FlowError> {
        self.nodes
            .get(&id)
            .ok_or_else(|| FlowError::unknown_node(id.as_str()))
    }

    /// Parses a wire id and returns its node.
    ///
    /// # Errors
    ///
    /// - `UnknownNode` if the id does not parse or is not defined
    pub fn lookup(&self, id: &str) -> Result<&Node, FlowError> {
        self.get_node(id.parse()?)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn question(&self, id: NodeId) -> Option<&QuestionNode> {
        self.nodes.get(&id).and_then(Node::as_question)
    }

    pub fn terminal(&self, id: NodeId) -> Option<&TerminalNode> {
        self.nodes.get(&id).and_then(Node::as_terminal)
    }

    /// Iterates nodes in authoring order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.order.iter().filter_map(move |id| self.nodes.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn terminal_ids(&self) -> Vec<NodeId> {
        self.nodes()
            .filter(|n| n.is_terminal())
            .map(Node::id)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────────

    /// Forward successors of a node; empty for unknown ids and terminals.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&id)
            .map(Node::successors)
            .unwrap_or_default()
    }

    /// Nodes with a forward edge into `id`, excluding self-loops.
    pub fn predecessors(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes()
            .filter(|n| n.id() != id && n.successors().contains(&id))
            .map(Node::id)
            .collect()
    }

    /// Every node reachable from the entry by forward edges.
    pub fn reachable_from_entry(&self) -> BTreeSet<NodeId> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([self.entry]);

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            for next in self.successors(id) {
                if !seen.contains(&next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    /// Defined nodes with no forward path from the entry, in authoring order.
    pub fn unreachable_nodes(&self) -> Vec<NodeId> {
        let reachable = self.reachable_from_entry();
        self.order
            .iter()
            .copied()
            .filter(|id| !reachable.contains(id))
            .collect()
    }
}

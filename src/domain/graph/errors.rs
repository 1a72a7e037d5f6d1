//! Graph construction errors.

use thiserror::Error;

use crate::domain::foundation::{Answer, NodeId};

/// Integrity violations detected while assembling a decision graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Entry node '{0}' is not defined")]
    MissingEntry(NodeId),

    #[error("Entry node '{0}' must be an intro node")]
    EntryNotIntro(NodeId),

    #[error("Node '{0}' is defined more than once")]
    DuplicateNode(NodeId),

    #[error("Edge from '{from}' points to undefined node '{to}'")]
    DanglingEdge { from: NodeId, to: NodeId },

    #[error("Question '{question}' declares answer '{answer}' more than once")]
    DuplicateAnswer { question: NodeId, answer: Answer },

    #[error("Question '{0}' has no permitted answers")]
    NoAnswers(NodeId),

    #[error("Back target '{target}' of '{question}' is not one of its predecessors")]
    BackTargetNotPredecessor { question: NodeId, target: NodeId },
}

//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::NodeId;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Graph integrity errors
    UnknownNode,

    // Caller errors
    InvalidAnswer,
    InvalidBackTarget,
    StaleQuestion,
    NotAtEntry,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::UnknownNode => "UNKNOWN_NODE",
            ErrorCode::InvalidAnswer => "INVALID_ANSWER",
            ErrorCode::InvalidBackTarget => "INVALID_BACK_TARGET",
            ErrorCode::StaleQuestion => "STALE_QUESTION",
            ErrorCode::NotAtEntry => "NOT_AT_ENTRY",
        };
        write!(f, "{}", s)
    }
}

/// Errors returned by graph lookups and engine operations.
///
/// Every variant except `UnknownNode` is a caller mistake the renderer can
/// recover from by re-prompting. The session is left untouched in all cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Unknown node '{id}'")]
    UnknownNode { id: String },

    #[error("Answer '{value}' is not permitted for question '{question}'")]
    InvalidAnswer { question: String, value: String },

    #[error("Cannot go back from '{current}' to '{requested}'")]
    InvalidBackTarget { current: NodeId, requested: String },

    #[error("Question '{submitted}' is not active, current node is '{current}'")]
    StaleQuestion { current: NodeId, submitted: NodeId },

    #[error("Flow already started, current node is '{current}'")]
    NotAtEntry { current: NodeId },
}

impl FlowError {
    pub fn unknown_node(id: impl Into<String>) -> Self {
        FlowError::UnknownNode { id: id.into() }
    }

    pub fn invalid_answer(question: impl Into<String>, value: impl Into<String>) -> Self {
        FlowError::InvalidAnswer {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn invalid_back_target(current: NodeId, requested: impl Into<String>) -> Self {
        FlowError::InvalidBackTarget {
            current,
            requested: requested.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FlowError::UnknownNode { .. } => ErrorCode::UnknownNode,
            FlowError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            FlowError::InvalidBackTarget { .. } => ErrorCode::InvalidBackTarget,
            FlowError::StaleQuestion { .. } => ErrorCode::StaleQuestion,
            FlowError::NotAtEntry { .. } => ErrorCode::NotAtEntry,
        }
    }

    /// Returns false for graph integrity violations.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FlowError::UnknownNode { .. })
    }
}

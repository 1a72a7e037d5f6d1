//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the role-classification flow.

mod answer;
mod aux_flag;
mod errors;
mod ids;
mod node_id;
mod role;
mod severity;
mod timestamp;

pub use answer::Answer;
pub use aux_flag::{AuxFlag, AuxFlags};
pub use errors::{ErrorCode, FlowError, ValidationError};
pub use ids::SessionId;
pub use node_id::NodeId;
pub use role::Role;
pub use severity::Severity;
pub use timestamp::Timestamp;

//! Role enum for the legal classification reached at a terminal node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the research organization under the data-protection statute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sole controller (responsable único).
    SoleController,
    /// Joint controller with the data provider (corresponsable).
    JointController,
    /// Processor acting on documented instructions (encargado).
    Processor,
    /// Processor that later reuses the data for its own project.
    Hybrid,
    /// Answers do not support a clear classification.
    Undetermined,
}

impl Role {
    /// Returns true if the role carries controller obligations.
    pub fn is_controller(&self) -> bool {
        matches!(
            self,
            Role::SoleController | Role::JointController | Role::Hybrid
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::SoleController => "Sole Controller",
            Role::JointController => "Joint Controller",
            Role::Processor => "Processor",
            Role::Hybrid => "Hybrid",
            Role::Undetermined => "Undetermined",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_roles() {
        assert!(Role::SoleController.is_controller());
        assert!(Role::JointController.is_controller());
        assert!(Role::Hybrid.is_controller());
        assert!(!Role::Processor.is_controller());
        assert!(!Role::Undetermined.is_controller());
    }
}

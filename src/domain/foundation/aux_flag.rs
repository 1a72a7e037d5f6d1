//! Auxiliary flags raised by answers that do not move the flow.

use serde::{Deserialize, Serialize};

/// A flag an answer can raise instead of transitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxFlag {
    /// Display the decision factors for the purpose-and-means question.
    ShowFactors,
}

/// Set of auxiliary flags held by a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuxFlags {
    show_factors: bool,
}

impl AuxFlags {
    /// Raises a flag. Raising an already raised flag is a no-op.
    pub fn raise(&mut self, flag: AuxFlag) {
        match flag {
            AuxFlag::ShowFactors => self.show_factors = true,
        }
    }

    pub fn is_raised(&self, flag: AuxFlag) -> bool {
        match flag {
            AuxFlag::ShowFactors => self.show_factors,
        }
    }

    pub fn show_factors(&self) -> bool {
        self.show_factors
    }

    /// Returns true if no flag is raised.
    pub fn is_clear(&self) -> bool {
        !self.show_factors
    }
}

//! What back navigation does to the answer transcript.

use serde::{Deserialize, Serialize};

/// History handling when the user navigates back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPolicy {
    /// Keep every answer as an audit trail, including revised ones.
    #[default]
    Retain,
    /// Drop the latest answer to the back target and everything after it.
    Truncate,
}

//! Flow configuration

use serde::Deserialize;

use crate::domain::traversal::HistoryPolicy;

/// Traversal behavior knobs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowConfig {
    /// What back navigation does to the answer transcript
    #[serde(default)]
    pub history_on_back: HistoryPolicy,
}

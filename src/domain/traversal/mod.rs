//! Traversal module - the engine that walks the decision graph.

mod engine;
mod history_policy;

pub use engine::TraversalEngine;
pub use history_policy::HistoryPolicy;

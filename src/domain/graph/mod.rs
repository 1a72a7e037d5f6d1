//! Decision graph - the static nodes and edges of the flow.
//!
//! - `node` - node kinds, branches and transitions
//! - `catalog` - authored content of the standard flow
//! - `decision_graph` - validated lookup structure and reachability queries

mod catalog;
mod decision_graph;
mod errors;
mod node;

pub use catalog::standard_nodes;
pub use decision_graph::DecisionGraph;
pub use errors::GraphError;
pub use node::{Branch, Factor, Guidance, IntroNode, Node, QuestionNode, TerminalNode, Transition};

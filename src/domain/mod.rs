//! Domain layer containing the decision graph and its traversal.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, answers, flags, errors)
//! - `graph` - Static decision graph and its authored content
//! - `session` - Per-assessment state: position, transcript, flags
//! - `traversal` - Engine that moves a session through the graph

pub mod foundation;
pub mod graph;
pub mod session;
pub mod traversal;

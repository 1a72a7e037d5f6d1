//! Research Role Flow - role classification for research data use
//!
//! This crate implements the decision tree that tells a research organization
//! whether it acts as sole controller, joint controller, processor or in an
//! undetermined role under Chile's Ley 21.719. Presentation is left to an
//! external renderer that reads the engine's current node and calls back into
//! it on user input.

pub mod config;
pub mod domain;
pub mod telemetry;

//! Session module - the per-assessment state owned by one engine.

mod aggregate;
mod record;

pub use aggregate::Session;
pub use record::AnswerRecord;

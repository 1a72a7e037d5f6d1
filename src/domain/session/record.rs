//! AnswerRecord - one entry of the answer transcript.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Answer, NodeId, Timestamp};

/// An answer given to a question, in the order it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: NodeId,
    pub answer: Answer,
    pub answered_at: Timestamp,
}

impl AnswerRecord {
    pub fn new(question: NodeId, answer: Answer) -> Self {
        Self {
            question,
            answer,
            answered_at: Timestamp::now(),
        }
    }
}

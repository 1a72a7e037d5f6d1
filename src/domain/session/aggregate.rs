//! Session aggregate - the mutable state of one assessment.
//!
//! A session is owned by exactly one traversal engine. It is never shared and
//! is replaced wholesale on reset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Answer, AuxFlag, AuxFlags, NodeId, SessionId, Timestamp};

use super::AnswerRecord;

/// Session aggregate - current position, transcript and flags.
///
/// # Invariants
///
/// - `history` is append-only except for explicit truncation on back
///   navigation, and keeps answer order
/// - `current` is always a node id produced by the graph that built it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    current: NodeId,
    history: Vec<AnswerRecord>,
    flags: AuxFlags,
    started_at: Timestamp,
}

impl Session {
    /// Creates a fresh session positioned at the entry node.
    pub fn new(entry: NodeId) -> Self {
        Self {
            id: SessionId::new(),
            current: entry,
            history: Vec::new(),
            flags: AuxFlags::default(),
            started_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Every answer given, including answers later revised.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    pub fn flags(&self) -> &AuxFlags {
        &self.flags
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Most recent answer per question.
    pub fn latest_answers(&self) -> BTreeMap<NodeId, Answer> {
        self.history
            .iter()
            .map(|r| (r.question, r.answer))
            .collect()
    }

    pub fn latest_answer(&self, question: NodeId) -> Option<Answer> {
        self.history
            .iter()
            .rev()
            .find(|r| r.question == question)
            .map(|r| r.answer)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn record_answer(&mut self, question: NodeId, answer: Answer) {
        self.history.push(AnswerRecord::new(question, answer));
    }

    pub(crate) fn move_to(&mut self, node: NodeId) {
        self.current = node;
    }

    pub(crate) fn raise(&mut self, flag: AuxFlag) {
        self.flags.raise(flag);
    }

    pub(crate) fn replace_flags(&mut self, flags: AuxFlags) {
        self.flags = flags;
    }

    /// Drops the most recent answer to `question` and everything after it.
    ///
    /// Returns the number of records removed.
    pub(crate) fn truncate_from_last(&mut self, question: NodeId) -> usize {
        match self.history.iter().rposition(|r| r.question == question) {
            Some(idx) => {
                let removed = self.history.len() - idx;
                self.history.truncate(idx);
                removed
            }
            None => 0,
        }
    }
}

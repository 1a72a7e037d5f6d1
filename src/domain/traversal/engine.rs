//! TraversalEngine - walks the decision graph on behalf of one user.
//!
//! The engine owns a [`Session`] and borrows an immutable [`DecisionGraph`].
//! Every operation is atomic: it validates first and only then mutates, so a
//! failed call leaves the session exactly as it was.

use tracing::{debug, info, warn};

use crate::domain::foundation::{Answer, AuxFlags, FlowError, NodeId, Timestamp};
use crate::domain::graph::{DecisionGraph, Guidance, Node, TerminalNode, Transition};
use crate::domain::session::{AnswerRecord, Session};

use super::HistoryPolicy;

/// State machine over a decision graph.
#[derive(Debug, Clone)]
pub struct TraversalEngine<'g> {
    graph: &'g DecisionGraph,
    session: Session,
    history_policy: HistoryPolicy,
}

impl TraversalEngine<'static> {
    /// Creates an engine over the standard flow.
    pub fn standard() -> Self {
        Self::new(DecisionGraph::standard())
    }
}

impl<'g> TraversalEngine<'g> {
    /// Creates an engine positioned at the graph's entry node.
    pub fn new(graph: &'g DecisionGraph) -> Self {
        let session = Session::new(graph.entry());
        debug!(session_id = %session.id(), "Assessment session created");
        Self {
            graph,
            session,
            history_policy: HistoryPolicy::default(),
        }
    }

    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.history_policy = policy;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read access for the renderer
    // ─────────────────────────────────────────────────────────────────────────

    pub fn graph(&self) -> &'g DecisionGraph {
        self.graph
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        self.history_policy
    }

    pub fn current_id(&self) -> NodeId {
        self.session.current()
    }

    /// Returns the node the renderer should display.
    ///
    /// # Errors
    ///
    /// - `UnknownNode` only if the graph lost a node it produced
    pub fn current_node(&self) -> Result<&'g Node, FlowError> {
        self.graph.get_node(self.session.current())
    }

    pub fn history(&self) -> &[AnswerRecord] {
        self.session.history()
    }

    pub fn show_factors(&self) -> bool {
        self.session.flags().show_factors()
    }

    /// Guidance to display on the current question, if its flag is raised.
    pub fn guidance(&self) -> Option<&'g Guidance> {
        self.graph
            .question(self.session.current())
            .and_then(|q| q.guidance.as_ref())
            .filter(|g| self.session.flags().is_raised(g.flag))
    }

    /// Returns the outcome once a terminal node is reached.
    pub fn outcome(&self) -> Option<&'g TerminalNode> {
        self.graph.terminal(self.session.current())
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Back target the renderer should offer on the current node.
    pub fn back_target(&self) -> Option<NodeId> {
        self.graph
            .question(self.session.current())
            .and_then(|q| q.back_target)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Reinitializes the session at the entry node.
    pub fn start(&mut self) {
        self.session = Session::new(self.graph.entry());
        debug!(session_id = %self.session.id(), "Assessment started");
    }

    /// Follows the entry node's unconditional edge to the first question.
    ///
    /// # Errors
    ///
    /// - `NotAtEntry` if the current node is not the intro node
    pub fn begin(&mut self) -> Result<&'g Node, FlowError> {
        let current = self.session.current();
        let intro = match self.graph.get_node(current)?.as_intro() {
            Some(intro) => intro,
            None => return Err(self.reject(FlowError::NotAtEntry { current })),
        };

        let next = self.graph.get_node(intro.next)?;
        self.session.move_to(intro.next);
        debug!(
            session_id = %self.session.id(),
            from = %current,
            to = %intro.next,
            "Assessment begun"
        );
        Ok(next)
    }

    /// Answers a question using wire ids and values.
    ///
    /// Besides rejecting unknown ids and unpermitted values, this checks that
    /// `question_id` names the current node. A renderer showing an outdated
    /// question gets `StaleQuestion` instead of moving the flow from a node
    /// the user is no longer on.
    ///
    /// # Errors
    ///
    /// - `UnknownNode` if `question_id` is not a node id
    /// - `InvalidAnswer` if `value` is not a permitted answer of the question
    /// - `StaleQuestion` if the question is not the current node
    pub fn answer(&mut self, question_id: &str, value: &str) -> Result<&'g Node, FlowError> {
        let question: NodeId = question_id.parse().map_err(|e| self.reject(e))?;
        let answer: Answer = value
            .parse()
            .map_err(|_| self.reject(FlowError::invalid_answer(question_id, value)))?;
        self.submit(question, answer)
    }

    /// Answers the current question.
    ///
    /// Returns the new current node, or the same question when the answer
    /// only raises a flag.
    ///
    /// # Errors
    ///
    /// - `StaleQuestion` if `question` is not the current node
    /// - `InvalidAnswer` if the question does not permit `answer`, or the
    ///   current node is not a question
    pub fn submit(&mut self, question: NodeId, answer: Answer) -> Result<&'g Node, FlowError> {
        let current = self.session.current();
        if question != current {
            return Err(self.reject(FlowError::StaleQuestion {
                current,
                submitted: question,
            }));
        }

        let node = self.graph.get_node(question)?;
        let transition = match node.as_question().and_then(|q| q.branch(answer)) {
            Some(branch) => branch.transition,
            None => {
                return Err(self.reject(FlowError::invalid_answer(
                    question.as_str(),
                    answer.as_str(),
                )))
            }
        };

        match transition {
            Transition::GoTo(next) => {
                let next_node = self.graph.get_node(next)?;
                self.session.record_answer(question, answer);
                self.session.move_to(next);
                debug!(
                    session_id = %self.session.id(),
                    from = %question,
                    answer = %answer,
                    to = %next,
                    "Question answered"
                );
                if let Some(outcome) = next_node.as_terminal() {
                    let elapsed = Timestamp::now().duration_since(self.session.started_at());
                    info!(
                        session_id = %self.session.id(),
                        outcome = %outcome.id,
                        severity = %outcome.severity,
                        needs_attention = outcome.severity.needs_attention(),
                        controller = outcome.role.is_some_and(|r| r.is_controller()),
                        answers = self.session.history().len(),
                        elapsed_ms = elapsed.num_milliseconds(),
                        "Assessment reached an outcome"
                    );
                }
                Ok(next_node)
            }
            Transition::Stay(flag) => {
                self.session.record_answer(question, answer);
                self.session.raise(flag);
                debug!(
                    session_id = %self.session.id(),
                    question = %question,
                    answer = %answer,
                    flag = ?flag,
                    "Question answered without transition"
                );
                Ok(node)
            }
        }
    }

    /// Navigates back using a wire id.
    ///
    /// # Errors
    ///
    /// - `InvalidBackTarget` if `target_id` is not the current node's
    ///   declared back target (unparseable ids included)
    pub fn go_back(&mut self, target_id: &str) -> Result<&'g Node, FlowError> {
        match target_id.parse::<NodeId>() {
            Ok(target) => self.go_back_to(target),
            Err(_) => {
                let current = self.session.current();
                Err(self.reject(FlowError::invalid_back_target(current, target_id)))
            }
        }
    }

    /// Moves to the current question's declared back target.
    ///
    /// Under [`HistoryPolicy::Retain`] the transcript and flags are untouched.
    /// Under [`HistoryPolicy::Truncate`] the abandoned branch is dropped and
    /// flags are rebuilt from the answers that remain.
    ///
    /// # Errors
    ///
    /// - `InvalidBackTarget` if `target` is not the declared back target
    pub fn go_back_to(&mut self, target: NodeId) -> Result<&'g Node, FlowError> {
        let current = self.session.current();
        if self.back_target() != Some(target) {
            return Err(self.reject(FlowError::invalid_back_target(current, target.as_str())));
        }

        let target_node = self.graph.get_node(target)?;
        let dropped = match self.history_policy {
            HistoryPolicy::Retain => 0,
            HistoryPolicy::Truncate => {
                let dropped = self.session.truncate_from_last(target);
                let flags = self.flags_from_history();
                self.session.replace_flags(flags);
                dropped
            }
        };
        self.session.move_to(target);
        debug!(
            session_id = %self.session.id(),
            from = %current,
            to = %target,
            dropped,
            "Navigated back"
        );
        Ok(target_node)
    }

    /// Abandons the assessment and starts over at the entry node.
    pub fn reset(&mut self) {
        info!(
            session_id = %self.session.id(),
            at = %self.session.current(),
            answers = self.session.history().len(),
            "Assessment reset"
        );
        self.start();
    }

    /// Flags raised by the answers still in the transcript.
    fn flags_from_history(&self) -> AuxFlags {
        let mut flags = AuxFlags::default();
        for record in self.session.history() {
            let transition = self
                .graph
                .question(record.question)
                .and_then(|q| q.branch(record.answer))
                .map(|b| b.transition);
            if let Some(Transition::Stay(flag)) = transition {
                flags.raise(flag);
            }
        }
        flags
    }

    fn reject(&self, err: FlowError) -> FlowError {
        warn!(
            session_id = %self.session.id(),
            current = %self.session.current(),
            code = %err.code(),
            "{}",
            err
        );
        err
    }
}

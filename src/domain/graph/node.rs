//! Node types of the decision graph.
//!
//! Nodes are pure data. The renderer reads them to build its screens and the
//! traversal engine reads their edges to compute transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Answer, AuxFlag, NodeId, Role, Severity};

/// What happens when an answer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Transition {
    /// Move to another node.
    GoTo(NodeId),
    /// Stay on the same node and raise a flag.
    Stay(AuxFlag),
}

/// A permitted answer of a question and where it leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub answer: Answer,
    pub label: String,
    pub transition: Transition,
}

impl Branch {
    pub fn go_to(answer: Answer, label: impl Into<String>, target: NodeId) -> Self {
        Self {
            answer,
            label: label.into(),
            transition: Transition::GoTo(target),
        }
    }

    pub fn stay(answer: Answer, label: impl Into<String>, flag: AuxFlag) -> Self {
        Self {
            answer,
            label: label.into(),
            transition: Transition::Stay(flag),
        }
    }
}

/// Entry screen with a single unconditional edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntroNode {
    pub id: NodeId,
    pub title: String,
    pub paragraphs: Vec<String>,
    pub begin_label: String,
    pub next: NodeId,
}

/// A named factor inside a guidance block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub question: String,
}

/// Supplementary guidance shown on a question once a flag is raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub flag: AuxFlag,
    pub heading: String,
    pub factors: Vec<Factor>,
    pub closing: String,
}

/// A yes/no(/unsure) question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub id: NodeId,
    /// Step heading, e.g. "PASO 1: APLICABILIDAD - Pregunta 1.1".
    pub heading: String,
    pub prompt: String,
    pub points_heading: Option<String>,
    pub points: Vec<String>,
    pub help: Option<String>,
    pub branches: Vec<Branch>,
    /// Node the renderer's back link leads to. `None` on the first question.
    pub back_target: Option<NodeId>,
    pub guidance: Option<Guidance>,
}

impl QuestionNode {
    /// Returns the permitted answers in display order.
    pub fn permitted_answers(&self) -> Vec<Answer> {
        self.branches.iter().map(|b| b.answer).collect()
    }

    pub fn permits(&self, answer: Answer) -> bool {
        self.branch(answer).is_some()
    }

    pub fn branch(&self, answer: Answer) -> Option<&Branch> {
        self.branches.iter().find(|b| b.answer == answer)
    }
}

/// A classification outcome. Terminal nodes have no outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalNode {
    pub id: NodeId,
    pub title: String,
    pub severity: Severity,
    /// `None` for the early exits that end before any role is assessed.
    pub role: Option<Role>,
    pub profile: Option<String>,
    pub body: Option<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Intro(IntroNode),
    Question(QuestionNode),
    Terminal(TerminalNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Intro(n) => n.id,
            Node::Question(n) => n.id,
            Node::Terminal(n) => n.id,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }

    pub fn as_intro(&self) -> Option<&IntroNode> {
        match self {
            Node::Intro(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_question(&self) -> Option<&QuestionNode> {
        match self {
            Node::Question(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_terminal(&self) -> Option<&TerminalNode> {
        match self {
            Node::Terminal(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the forward successors of this node.
    ///
    /// A `Stay` branch counts as a self-loop.
    pub fn successors(&self) -> Vec<NodeId> {
        match self {
            Node::Intro(n) => vec![n.next],
            Node::Question(n) => {
                let mut out: Vec<NodeId> = Vec::with_capacity(n.branches.len());
                for branch in &n.branches {
                    let target = match branch.transition {
                        Transition::GoTo(target) => target,
                        Transition::Stay(_) => n.id,
                    };
                    if !out.contains(&target) {
                        out.push(target);
                    }
                }
                out
            }
            Node::Terminal(_) => Vec::new(),
        }
    }

    /// Returns the declared back-navigation target, if any.
    pub fn back_target(&self) -> Option<NodeId> {
        self.as_question().and_then(|q| q.back_target)
    }
}

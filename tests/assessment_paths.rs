//! Integration tests for complete assessments through the public API.
//!
//! Each test drives the engine the way a renderer would: read the current
//! node, submit wire ids and values, and inspect the outcome.

use research_role_flow::domain::foundation::{Answer, FlowError, NodeId, Role, Severity};
use research_role_flow::domain::graph::{DecisionGraph, Node};
use research_role_flow::domain::traversal::{HistoryPolicy, TraversalEngine};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn run(steps: &[(&str, &str)]) -> TraversalEngine<'static> {
    let mut engine = TraversalEngine::standard();
    engine.begin().expect("begin from intro");
    for (question, value) in steps {
        engine
            .answer(question, value)
            .unwrap_or_else(|e| panic!("{}={} rejected: {}", question, value, e));
    }
    engine
}

fn outcome_of(steps: &[(&str, &str)]) -> NodeId {
    let engine = run(steps);
    assert!(engine.is_finished(), "path did not finish: {:?}", steps);
    engine.current_id()
}

const CONTROLLER_PREFIX: [(&str, &str); 3] = [("q1_1", "si"), ("q1_2", "si"), ("q2_1", "si")];

fn controller_path(rest: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    CONTROLLER_PREFIX.iter().chain(rest.iter()).copied().collect()
}

// =============================================================================
// Early exits
// =============================================================================

#[test]
fn anonymous_data_exits_immediately() {
    assert_eq!(outcome_of(&[("q1_1", "no")]), NodeId::AnonymousData);
}

#[test]
fn outside_territory_exits_after_applicability() {
    assert_eq!(
        outcome_of(&[("q1_1", "si"), ("q1_2", "no")]),
        NodeId::OutsideTerritory
    );
}

#[test]
fn early_exits_are_informational() {
    for steps in [vec![("q1_1", "no")], vec![("q1_1", "si"), ("q1_2", "no")]] {
        let engine = run(&steps);
        let outcome = engine.outcome().unwrap();
        assert_eq!(outcome.severity, Severity::Info);
        assert_eq!(outcome.role, None);
        assert!(outcome.body.is_some());
    }
}

// =============================================================================
// Controller branch
// =============================================================================

#[test]
fn provider_in_design_makes_joint_controller() {
    let path = controller_path(&[("q3_1", "si")]);
    assert_eq!(outcome_of(&path), NodeId::JointController);
}

#[test]
fn provider_benefit_share_makes_joint_controller() {
    let path = controller_path(&[("q3_1", "no"), ("q3_2", "si")]);
    assert_eq!(outcome_of(&path), NodeId::JointController);
}

#[test]
fn enriched_data_return_makes_joint_controller() {
    let path = controller_path(&[("q3_1", "no"), ("q3_2", "no"), ("q3_3", "si")]);
    assert_eq!(outcome_of(&path), NodeId::JointController);
}

#[test]
fn no_provider_involvement_makes_sole_controller() {
    let path = controller_path(&[("q3_1", "no"), ("q3_2", "no"), ("q3_3", "no")]);
    let engine = run(&path);
    assert_eq!(engine.current_id(), NodeId::SoleController);
    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.role, Some(Role::SoleController));
    assert_eq!(outcome.severity, Severity::Success);
    assert_eq!(outcome.next_steps.len(), 4);
}

// =============================================================================
// Processor branch
// =============================================================================

#[test]
fn technical_service_makes_processor() {
    assert_eq!(
        outcome_of(&[("q1_1", "si"), ("q1_2", "si"), ("q2_1", "no"), ("q4_1", "si")]),
        NodeId::Processor
    );
}

#[test]
fn neither_purpose_nor_service_is_undetermined() {
    let engine = run(&[("q1_1", "si"), ("q1_2", "si"), ("q2_1", "no"), ("q4_1", "no")]);
    assert_eq!(engine.current_id(), NodeId::Undetermined);
    assert_eq!(engine.outcome().unwrap().severity, Severity::Error);
}

// =============================================================================
// Unsure answer and decision factors
// =============================================================================

#[test]
fn unsure_shows_factors_then_answer_proceeds() {
    let mut engine = run(&[("q1_1", "si"), ("q1_2", "si")]);

    let node = engine.answer("q2_1", "nosé").unwrap();
    assert_eq!(node.id(), NodeId::PurposeAndMeans);
    assert!(engine.show_factors());
    let guidance = engine.guidance().expect("factors visible on q2_1");
    assert_eq!(guidance.factors[0].name, "Iniciativa y Diseño");

    // Repeating the unsure answer is accepted and still does not move.
    engine.answer("q2_1", "nosé").unwrap();
    assert_eq!(engine.current_id(), NodeId::PurposeAndMeans);

    engine.answer("q2_1", "no").unwrap();
    engine.answer("q4_1", "si").unwrap();
    assert_eq!(engine.current_id(), NodeId::Processor);
    assert_eq!(engine.history().len(), 6);
}

// =============================================================================
// Back navigation
// =============================================================================

#[test]
fn back_links_follow_declared_predecessors() {
    let mut engine = run(&controller_path(&[("q3_1", "no"), ("q3_2", "no")]));
    assert_eq!(engine.current_id(), NodeId::EnrichedDataReturn);

    for expected in ["q3_2", "q3_1", "q2_1", "q1_2", "q1_1"] {
        let target = engine.back_target().expect("question has a back link");
        assert_eq!(target.as_str(), expected);
        engine.go_back(expected).unwrap();
    }

    assert_eq!(engine.current_id(), NodeId::PersonalData);
    assert_eq!(engine.back_target(), None);
    assert_eq!(engine.history().len(), 5);
}

#[test]
fn processor_question_goes_back_to_purpose() {
    let mut engine = run(&[("q1_1", "si"), ("q1_2", "si"), ("q2_1", "no")]);
    assert!(matches!(
        engine.go_back("q1_2"),
        Err(FlowError::InvalidBackTarget { .. })
    ));
    engine.go_back("q2_1").unwrap();
    assert_eq!(engine.current_id(), NodeId::PurposeAndMeans);
}

#[test]
fn revising_an_answer_reaches_a_different_outcome() {
    let mut engine = run(&controller_path(&[("q3_1", "si")]));
    assert_eq!(engine.current_id(), NodeId::JointController);

    // Terminals have no back link; restart instead.
    assert!(engine.go_back("q3_1").is_err());
    engine.reset();
    engine.begin().unwrap();
    for (q, a) in controller_path(&[("q3_1", "no")]) {
        engine.answer(q, a).unwrap();
    }
    engine.go_back("q3_1").unwrap();
    engine.answer("q3_1", "si").unwrap();

    assert_eq!(engine.current_id(), NodeId::JointController);
    let answers = engine.session().latest_answers();
    assert_eq!(answers.get(&NodeId::ProviderDesign), Some(&Answer::Yes));
}

#[test]
fn truncating_engine_keeps_transcript_consistent_with_path() {
    let mut engine = TraversalEngine::standard().with_history_policy(HistoryPolicy::Truncate);
    engine.begin().unwrap();
    for (q, a) in controller_path(&[("q3_1", "no"), ("q3_2", "no")]) {
        engine.answer(q, a).unwrap();
    }
    engine.go_back("q3_2").unwrap();
    engine.go_back("q3_1").unwrap();
    engine.answer("q3_1", "si").unwrap();

    let questions: Vec<NodeId> = engine.history().iter().map(|r| r.question).collect();
    assert_eq!(
        questions,
        vec![
            NodeId::PersonalData,
            NodeId::TerritorialScope,
            NodeId::PurposeAndMeans,
            NodeId::ProviderDesign,
        ]
    );
}

// =============================================================================
// Graph integrity and the unreachable hybrid outcome
// =============================================================================

#[test]
fn every_offered_answer_has_an_edge() {
    let graph = DecisionGraph::standard();
    for node in graph.nodes() {
        if let Node::Question(q) = node {
            for answer in q.permitted_answers() {
                assert!(q.branch(answer).is_some(), "{} lacks {}", q.id, answer);
            }
        }
    }
}

#[test]
fn hybrid_role_is_authored_but_unreachable() {
    let graph = DecisionGraph::standard();
    let hybrid = graph.terminal(NodeId::HybridRole).unwrap();
    assert_eq!(hybrid.role, Some(Role::Hybrid));
    assert_eq!(hybrid.severity, Severity::Warning);
    assert!(graph.predecessors(NodeId::HybridRole).is_empty());
    assert_eq!(graph.unreachable_nodes(), vec![NodeId::HybridRole]);
}

#[test]
fn renderer_can_serialize_current_node_and_session() {
    let engine = run(&[("q1_1", "si")]);
    let node = serde_json::to_value(engine.current_node().unwrap()).unwrap();
    assert_eq!(node["kind"], "question");
    assert_eq!(node["id"], "q1_2");
    assert_eq!(node["points"].as_array().unwrap().len(), 3);

    let session = serde_json::to_value(engine.session()).unwrap();
    assert_eq!(session["history"][0]["answer"], "si");
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut first = TraversalEngine::standard();
    let second = TraversalEngine::standard();
    first.begin().unwrap();
    first.answer("q1_1", "no").unwrap();

    assert_eq!(second.current_id(), NodeId::Start);
    assert!(second.history().is_empty());
    assert_ne!(first.session().id(), second.session().id());
}

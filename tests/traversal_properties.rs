//! Property tests over random walks of the standard flow.

use proptest::prelude::*;

use research_role_flow::domain::foundation::{Answer, NodeId};
use research_role_flow::domain::graph::DecisionGraph;
use research_role_flow::domain::traversal::{HistoryPolicy, TraversalEngine};

/// Longest forward path: intro + seven questions at most.
const MAX_STEPS: usize = 8;

/// Drives the engine with choices picked by index among permitted answers.
/// `nosé` is skipped after its first use so every walk makes progress.
fn walk(engine: &mut TraversalEngine<'_>, choices: &[usize]) {
    engine.begin().unwrap();
    for choice in choices {
        if engine.is_finished() {
            break;
        }
        let current = engine.current_id();
        let question = engine.graph().question(current).unwrap();
        let mut options = question.permitted_answers();
        if engine.show_factors() {
            options.retain(|a| *a != Answer::Unsure);
        }
        let answer = options[choice % options.len()];
        engine.submit(current, answer).unwrap();
    }
}

fn arbitrary_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("si".to_string()),
        Just("no".to_string()),
        Just("nosé".to_string()),
        "[a-zé ]{0,6}",
    ]
}

proptest! {
    #[test]
    fn random_walks_never_reach_hybrid_role(choices in prop::collection::vec(0usize..3, 0..12)) {
        let mut engine = TraversalEngine::standard();
        walk(&mut engine, &choices);
        prop_assert_ne!(engine.current_id(), NodeId::HybridRole);
    }

    #[test]
    fn long_enough_walks_always_finish(choices in prop::collection::vec(0usize..3, 2 * MAX_STEPS)) {
        let mut engine = TraversalEngine::standard();
        walk(&mut engine, &choices);
        prop_assert!(engine.is_finished());
        let reachable = DecisionGraph::standard().reachable_from_entry();
        prop_assert!(reachable.contains(&engine.current_id()));
    }

    #[test]
    fn reset_always_restores_initial_state(choices in prop::collection::vec(0usize..3, 0..12)) {
        let mut engine = TraversalEngine::standard();
        walk(&mut engine, &choices);
        engine.reset();
        prop_assert_eq!(engine.current_id(), NodeId::Start);
        prop_assert!(engine.history().is_empty());
        prop_assert!(!engine.show_factors());
    }

    #[test]
    fn rejected_answers_leave_session_untouched(
        choices in prop::collection::vec(0usize..3, 0..6),
        question in prop::sample::select(NodeId::ALL.to_vec()),
        value in arbitrary_value(),
    ) {
        let mut engine = TraversalEngine::standard();
        walk(&mut engine, &choices);
        let before = engine.session().clone();

        if engine.answer(question.as_str(), &value).is_err() {
            prop_assert_eq!(engine.session(), &before);
        } else {
            prop_assert_eq!(question, before.current());
        }
    }

    #[test]
    fn only_the_declared_back_target_is_accepted(
        choices in prop::collection::vec(0usize..3, 0..6),
        target in prop::sample::select(NodeId::ALL.to_vec()),
    ) {
        let mut engine = TraversalEngine::standard();
        walk(&mut engine, &choices);
        let declared = engine.back_target();
        let before = engine.session().clone();

        match engine.go_back_to(target) {
            Ok(node) => {
                prop_assert_eq!(Some(target), declared);
                prop_assert_eq!(node.id(), target);
                prop_assert_eq!(engine.history(), before.history());
            }
            Err(_) => {
                prop_assert_ne!(Some(target), declared);
                prop_assert_eq!(engine.session(), &before);
            }
        }
    }

    #[test]
    fn truncated_sessions_keep_flags_consistent_with_transcript(
        choices in prop::collection::vec(0usize..3, 0..12),
        back_steps in 0usize..6,
    ) {
        let mut engine = TraversalEngine::standard().with_history_policy(HistoryPolicy::Truncate);
        walk(&mut engine, &choices);
        for _ in 0..back_steps {
            match engine.back_target() {
                Some(target) => {
                    engine.go_back_to(target).unwrap();
                }
                None => break,
            }
        }

        let unsure_recorded = engine
            .history()
            .iter()
            .any(|r| r.question == NodeId::PurposeAndMeans && r.answer == Answer::Unsure);
        prop_assert_eq!(engine.show_factors(), unsure_recorded);
    }
}

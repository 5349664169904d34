//! End-to-end scenarios over the fixture knowledge bases

use symcheck_core::rules::fact_set;
use symcheck_core::{Engine, TraceEvent};
use symcheck_test_fixtures::{diagnostic_rules, flu_rules};

#[test]
fn flu_symptoms_derive_the_full_chain() {
    let engine = Engine::new(flu_rules());
    let result = engine.forward_chain(&fact_set(["fever", "cough"]));

    let fired: Vec<&str> = result.fired.iter().map(|f| f.rule_id.as_str()).collect();
    assert_eq!(fired, vec!["R1", "R2"]);
    assert_eq!(
        result.facts,
        fact_set(["fever", "cough", "flu", "seek_doctor"])
    );
}

#[test]
fn partial_symptoms_derive_nothing() {
    let engine = Engine::new(flu_rules());
    let result = engine.forward_chain(&fact_set(["fever"]));

    assert!(result.fired.is_empty());
    assert_eq!(result.facts, fact_set(["fever"]));
}

#[test]
fn seek_doctor_is_verified_via_the_flu_sub_proof() {
    let engine = Engine::new(flu_rules());
    let result = engine.verify("seek_doctor", &fact_set(["fever", "cough"]));

    assert!(result.confirmed);
    let rendered: Vec<String> = result.trace.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Checking rule R2 for 'seek_doctor'...",
            "  Checking rule R1 for 'flu'...",
            "    [ok] Fact 'fever' already known.",
            "    [ok] Fact 'cough' already known.",
            "  [success] Rule R1 fired. 'flu' confirmed.",
            "[success] Rule R2 fired. 'seek_doctor' confirmed.",
        ]
    );
}

#[test]
fn emergency_path_is_reachable_through_two_hops() {
    let engine = Engine::new(diagnostic_rules());
    let result = engine.forward_chain(&fact_set([
        "fever",
        "cough",
        "shortness_of_breath",
        "chest_pain",
    ]));

    assert!(result.facts.contains("pneumonia"));
    assert!(result.facts.contains("seek_emergency_care"));
}

#[test]
fn competing_rules_for_flu_both_fire() {
    let engine = Engine::new(diagnostic_rules());
    let result = engine.forward_chain(&fact_set(["fever", "cough", "body_aches", "fatigue"]));

    let flu_firings: Vec<&str> = result
        .fired
        .iter()
        .filter(|f| f.conclusion == "flu")
        .map(|f| f.rule_id.as_str())
        .collect();
    assert_eq!(flu_firings, vec!["R1", "R4"]);
}

#[test]
fn explanation_classifies_every_leaf() {
    let engine = Engine::new(diagnostic_rules());
    let lines = engine.explain("seek_emergency_care");

    let mut symptoms = 0;
    let mut goals = 0;
    for line in &lines {
        match &line.event {
            TraceEvent::Symptom { .. } => symptoms += 1,
            TraceEvent::Goal { .. } => goals += 1,
            TraceEvent::RuleRequires { .. } | TraceEvent::AlreadyExpanded { .. } => {}
            other => panic!("unexpected explanation event: {other:?}"),
        }
    }
    // seek_emergency_care <- pneumonia <- flu (two rules); all remaining
    // conditions are elicitable symptoms.
    assert_eq!(goals, 3);
    assert!(symptoms >= 5);
}

#[test]
fn base_fact_catalog_matches_the_knowledge_base() {
    let engine = Engine::new(diagnostic_rules());
    let base: Vec<&str> = engine.base_facts().iter().map(String::as_str).collect();
    assert_eq!(
        base,
        vec![
            "body_aches",
            "chest_pain",
            "cough",
            "fatigue",
            "fever",
            "runny_nose",
            "shortness_of_breath",
            "sneezing",
            "sore_throat",
            "swollen_glands",
        ]
    );
}

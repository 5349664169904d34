//! Test fixtures for symcheck integration tests
//!
//! Canonical rule sets shared across the test suites: the two-rule flu
//! chain, a larger diagnostic knowledge base with an emergency path, and
//! a deliberately cyclic pair.

use symcheck_core::{Rule, RuleSet};

fn rule(id: &str, conditions: &[&str], conclusion: &str, precautions: &[&str]) -> Rule {
    Rule {
        id: id.to_string(),
        conditions: conditions.iter().map(|s| s.to_string()).collect(),
        conclusion: conclusion.to_string(),
        precautions: precautions.iter().map(|s| s.to_string()).collect(),
    }
}

/// R1: fever, cough -> flu; R2: flu -> seek_doctor.
pub fn flu_rules() -> RuleSet {
    RuleSet::new(vec![
        rule(
            "R1",
            &["fever", "cough"],
            "flu",
            &["Rest and drink fluids."],
        ),
        rule("R2", &["flu"], "seek_doctor", &["Book an appointment."]),
    ])
    .expect("flu rules are valid")
}

/// A small diagnostic base: chained conclusions, two independent rules
/// for the same conclusion, and an emergency path.
pub fn diagnostic_rules() -> RuleSet {
    RuleSet::new(vec![
        rule(
            "R1",
            &["fever", "cough"],
            "flu",
            &["Rest and drink fluids."],
        ),
        rule(
            "R2",
            &["sore_throat", "swollen_glands"],
            "strep_throat",
            &["See a doctor for antibiotics."],
        ),
        rule("R3", &["sneezing", "runny_nose"], "common_cold", &[]),
        rule("R4", &["body_aches", "fatigue"], "flu", &["Stay home."]),
        rule(
            "R5",
            &["flu", "shortness_of_breath"],
            "pneumonia",
            &["Seek medical care promptly."],
        ),
        rule(
            "R6",
            &["pneumonia", "chest_pain"],
            "seek_emergency_care",
            &["Call emergency services."],
        ),
        rule("R7", &["flu"], "seek_doctor", &["Book an appointment."]),
    ])
    .expect("diagnostic rules are valid")
}

/// R3: a -> b; R4: b -> a. Neither label is ever a base fact.
pub fn cyclic_rules() -> RuleSet {
    RuleSet::new(vec![rule("R3", &["a"], "b", &[]), rule("R4", &["b"], "a", &[])])
        .expect("cyclic rules are valid")
}

/// A CSV document in the knowledge-base source format.
pub const SAMPLE_CSV: &str = "\
rule_id,conditions,conclusion,precautions
R1, fever; cough ,flu,Rest and drink fluids.; Stay hydrated.
R2,flu,seek_doctor,Book an appointment.
R3,\" sneezing ;; runny_nose \",common_cold,
";

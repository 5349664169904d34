//! Data-driven saturation over the rule set

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::{FactSet, RuleSet};

/// A record of one rule firing, in firing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firing {
    /// Position of the rule within the rule set.
    pub rule_index: usize,
    pub rule_id: String,
    pub conclusion: String,
}

/// The forward closure of an initial fact set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardResult {
    /// Every fact derivable from the initial facts, initial facts included.
    pub facts: FactSet,
    /// The rules that fired, in the order they fired.
    pub fired: Vec<Firing>,
}

/// Run naive fixpoint saturation: full passes over the rules in
/// declaration order until a pass produces no new firing.
///
/// A rule fires at most once, tracked by position so that two textually
/// identical rules stay distinct. A rule whose conclusion is already a
/// fact still fires once its conditions are met; with no retraction and
/// finitely many rules, at most `rules.len()` firings can occur, so the
/// loop terminates.
pub fn forward_chain(rules: &RuleSet, initial: &FactSet) -> ForwardResult {
    let mut facts = initial.clone();
    let mut fired_flags = vec![false; rules.len()];
    let mut fired = Vec::new();

    loop {
        let mut new_firing = false;

        for (position, rule) in rules.rules().iter().enumerate() {
            if fired_flags[position] {
                continue;
            }
            if rule.conditions.iter().all(|c| facts.contains(c)) {
                fired_flags[position] = true;
                new_firing = true;
                facts.insert(rule.conclusion.clone());
                fired.push(Firing {
                    rule_index: position,
                    rule_id: rule.id.clone(),
                    conclusion: rule.conclusion.clone(),
                });
                debug!(rule_id = %rule.id, conclusion = %rule.conclusion, "Rule fired");
            }
        }

        if !new_firing {
            break;
        }
    }

    debug!(
        initial = initial.len(),
        derived = facts.len() - initial.len(),
        fired = fired.len(),
        "Forward chaining complete"
    );

    ForwardResult { facts, fired }
}

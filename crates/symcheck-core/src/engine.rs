//! The inference engine entry points

use tracing::{debug, instrument};

use crate::backward::{self, Verification};
use crate::forward::{self, ForwardResult};
use crate::index::RuleIndex;
use crate::rules::{FactSet, Rule, RuleSet};
use crate::trace::TraceLine;

/// An immutable rule set together with its derived indexes.
///
/// Built once per session; every query allocates its own fact set and
/// trace, so a shared `Engine` can serve concurrent callers without
/// locking.
pub struct Engine {
    rules: RuleSet,
    index: RuleIndex,
}

impl Engine {
    pub fn new(rules: RuleSet) -> Self {
        let index = RuleIndex::build(&rules);
        debug!(
            rules = rules.len(),
            base_facts = index.base_facts().len(),
            conclusions = index.conclusions().len(),
            "Engine initialized"
        );
        Self { rules, index }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The elicitable inputs: condition labels never produced as a
    /// conclusion.
    pub fn base_facts(&self) -> &FactSet {
        self.index.base_facts()
    }

    /// Every label some rule can conclude.
    pub fn conclusions(&self) -> &FactSet {
        self.index.conclusions()
    }

    /// The rules concluding `label`, in declaration order.
    pub fn rules_for<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a Rule> {
        self.index
            .rules_for(label)
            .iter()
            .filter_map(|&position| self.rules.get(position))
    }

    /// Derive everything reachable from `initial` and report the firings.
    #[instrument(skip(self, initial))]
    pub fn forward_chain(&self, initial: &FactSet) -> ForwardResult {
        forward::forward_chain(&self.rules, initial)
    }

    /// Expand `goal` into the sub-goals that would be required to prove
    /// it, without consulting any facts.
    #[instrument(skip(self))]
    pub fn explain(&self, goal: &str) -> Vec<TraceLine> {
        backward::explain(&self.rules, &self.index, goal)
    }

    /// Prove `goal` against `known`, returning the verdict and trace.
    #[instrument(skip(self, known))]
    pub fn verify(&self, goal: &str, known: &FactSet) -> Verification {
        backward::verify(&self.rules, &self.index, goal, known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fact_set;

    fn engine() -> Engine {
        let rules = RuleSet::new(vec![
            Rule {
                id: "R1".to_string(),
                conditions: vec!["fever".to_string(), "cough".to_string()],
                conclusion: "flu".to_string(),
                precautions: vec!["Rest and drink fluids.".to_string()],
            },
            Rule {
                id: "R2".to_string(),
                conditions: vec!["flu".to_string()],
                conclusion: "seek_doctor".to_string(),
                precautions: Vec::new(),
            },
        ])
        .unwrap();
        Engine::new(rules)
    }

    #[test]
    fn test_catalogs() {
        let engine = engine();
        assert!(engine.base_facts().contains("fever"));
        assert!(engine.conclusions().contains("seek_doctor"));
        assert!(!engine.base_facts().contains("flu"));
    }

    #[test]
    fn test_rules_for_yields_rules_in_order() {
        let engine = engine();
        let ids: Vec<&str> = engine.rules_for("flu").map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["R1"]);
        assert_eq!(engine.rules_for("nothing").count(), 0);
    }

    #[test]
    fn test_end_to_end_forward_and_backward_agree() {
        let engine = engine();
        let initial = fact_set(["fever", "cough"]);

        let forward = engine.forward_chain(&initial);
        assert!(forward.facts.contains("seek_doctor"));

        let verification = engine.verify("seek_doctor", &initial);
        assert!(verification.confirmed);
    }
}

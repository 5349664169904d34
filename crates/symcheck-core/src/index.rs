//! Lookup structures derived from a rule set
//!
//! Built once per rule set and read-only afterwards. Rebuilding is
//! O(rules x conditions); rule sets are immutable per session, so the
//! index never needs invalidation.

use std::collections::HashMap;

use crate::rules::{FactSet, RuleSet};

/// Derived lookup structures: the base-fact and conclusion catalogs plus
/// a conclusion-to-rules mapping.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    base_facts: FactSet,
    conclusions: FactSet,
    by_conclusion: HashMap<String, Vec<usize>>,
}

impl RuleIndex {
    pub fn build(rules: &RuleSet) -> Self {
        let mut conclusions = FactSet::new();
        let mut conditions = FactSet::new();
        let mut by_conclusion: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, rule) in rules.rules().iter().enumerate() {
            conclusions.insert(rule.conclusion.clone());
            for condition in &rule.conditions {
                conditions.insert(condition.clone());
            }
            by_conclusion
                .entry(rule.conclusion.clone())
                .or_default()
                .push(position);
        }

        let base_facts = conditions
            .difference(&conclusions)
            .cloned()
            .collect::<FactSet>();

        Self {
            base_facts,
            conclusions,
            by_conclusion,
        }
    }

    /// Labels that appear in some condition but in no conclusion: the
    /// elicitable inputs. Any special-label filtering is the caller's
    /// policy, applied on top of this set.
    pub fn base_facts(&self) -> &FactSet {
        &self.base_facts
    }

    /// Labels produced as a conclusion by at least one rule.
    pub fn conclusions(&self) -> &FactSet {
        &self.conclusions
    }

    /// Positions of the rules concluding `label`, in rule-set order.
    pub fn rules_for(&self, label: &str) -> &[usize] {
        self.by_conclusion
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rule;

    fn rule(id: &str, conditions: &[&str], conclusion: &str) -> Rule {
        Rule {
            id: id.to_string(),
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            conclusion: conclusion.to_string(),
            precautions: Vec::new(),
        }
    }

    fn sample() -> RuleSet {
        RuleSet::new(vec![
            rule("R1", &["fever", "cough"], "flu"),
            rule("R2", &["flu"], "seek_doctor"),
            rule("R3", &["rash"], "flu"),
        ])
        .unwrap()
    }

    #[test]
    fn test_base_facts_are_conditions_minus_conclusions() {
        let index = RuleIndex::build(&sample());
        let base: Vec<&str> = index.base_facts().iter().map(String::as_str).collect();
        assert_eq!(base, vec!["cough", "fever", "rash"]);
    }

    #[test]
    fn test_conclusions_catalog() {
        let index = RuleIndex::build(&sample());
        let conclusions: Vec<&str> = index.conclusions().iter().map(String::as_str).collect();
        assert_eq!(conclusions, vec!["flu", "seek_doctor"]);
    }

    #[test]
    fn test_rules_for_preserves_declaration_order() {
        let index = RuleIndex::build(&sample());
        assert_eq!(index.rules_for("flu"), &[0, 2]);
        assert_eq!(index.rules_for("seek_doctor"), &[1]);
    }

    #[test]
    fn test_rules_for_unknown_label_is_empty() {
        let index = RuleIndex::build(&sample());
        assert!(index.rules_for("no_such_label").is_empty());
    }

    #[test]
    fn test_empty_rule_set_yields_empty_indexes() {
        let index = RuleIndex::build(&RuleSet::default());
        assert!(index.base_facts().is_empty());
        assert!(index.conclusions().is_empty());
        assert!(index.rules_for("anything").is_empty());
    }
}

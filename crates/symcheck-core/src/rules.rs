//! Rule and fact types shared across the engine

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// A set of fact labels.
///
/// Ordered so that closures and catalog listings render identically on
/// every run.
pub type FactSet = BTreeSet<String>;

/// A production rule: when every condition label is a known fact, the
/// conclusion label becomes a fact.
///
/// `precautions` is an advisory payload attached to the conclusion; the
/// engine passes it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub conditions: Vec<String>,
    pub conclusion: String,
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// An immutable, ordered collection of rules.
///
/// Position within the set is the stable rule identity: firing records
/// and index entries refer to rules by position, so two textually
/// identical rules never collapse into one. Rule ids are expected to be
/// unique but this is a caller invariant, not enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting rules with no conditions or an empty
    /// conclusion. Everything downstream assumes validated rules.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        for rule in &rules {
            if rule.conditions.is_empty() {
                return Err(EngineError::EmptyConditions {
                    rule_id: rule.id.clone(),
                });
            }
            if rule.conclusion.is_empty() {
                return Err(EngineError::EmptyConclusion {
                    rule_id: rule.id.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Convenience for building a `FactSet` from anything iterable.
pub fn fact_set<I, S>(labels: I) -> FactSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Into::into).collect()
}

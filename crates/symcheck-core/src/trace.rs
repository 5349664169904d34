//! Structured trace lines for backward-chaining runs
//!
//! The engine records what happened as data; `Display` produces the
//! indented human-readable line. Any richer rendering (color, markup)
//! belongs to the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of a backward-chaining run, indented by recursion depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLine {
    pub depth: usize,
    pub event: TraceEvent,
}

impl TraceLine {
    pub fn new(depth: usize, event: TraceEvent) -> Self {
        Self { depth, event }
    }
}

/// What happened at one step.
///
/// The first group of variants is emitted by explanation mode, the
/// second by verification mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A goal label is being expanded.
    Goal { label: String },
    /// A rule that can produce the current goal, with its conditions.
    RuleRequires {
        rule_id: String,
        conditions: Vec<String>,
    },
    /// Leaf: an elicitable base fact.
    Symptom { label: String },
    /// Leaf: no rule concludes this label at goal position.
    NoRule { label: String },
    /// Leaf: a condition that is neither a base fact nor a conclusion.
    Unknown { label: String },
    /// The goal was already expanded earlier in this run.
    AlreadyExpanded { label: String },

    /// The goal is already among the known facts.
    AlreadyKnown { label: String },
    /// A candidate rule for the goal is being checked.
    CheckingRule { rule_id: String, goal: String },
    /// All conditions of the rule held; the goal is confirmed.
    RuleFired { rule_id: String, goal: String },
    /// No rule concludes the goal and it is not a known fact.
    Missing { label: String },
    /// Every candidate rule failed.
    Unproved { goal: String },
    /// The goal depends on itself; the branch was abandoned.
    CycleDetected { goal: String },
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "  ")?;
        }
        match &self.event {
            TraceEvent::Goal { label } => write!(f, "- Goal: {label}"),
            TraceEvent::RuleRequires {
                rule_id,
                conditions,
            } => write!(f, "Rule {rule_id}: requires {}", conditions.join(", ")),
            TraceEvent::Symptom { label } => write!(f, "- {label} (symptom)"),
            TraceEvent::NoRule { label } => write!(f, "- {label} (no rule found)"),
            TraceEvent::Unknown { label } => write!(f, "- {label} (unknown)"),
            TraceEvent::AlreadyExpanded { label } => write!(f, "- {label} (already expanded)"),
            TraceEvent::AlreadyKnown { label } => {
                write!(f, "[ok] Fact '{label}' already known.")
            }
            TraceEvent::CheckingRule { rule_id, goal } => {
                write!(f, "Checking rule {rule_id} for '{goal}'...")
            }
            TraceEvent::RuleFired { rule_id, goal } => {
                write!(f, "[success] Rule {rule_id} fired. '{goal}' confirmed.")
            }
            TraceEvent::Missing { label } => {
                write!(f, "[missing] '{label}' is not among the known facts.")
            }
            TraceEvent::Unproved { goal } => {
                write!(f, "[fail] Could not establish '{goal}'.")
            }
            TraceEvent::CycleDetected { goal } => {
                write!(f, "[cycle] '{goal}' depends on itself; branch abandoned.")
            }
        }
    }
}

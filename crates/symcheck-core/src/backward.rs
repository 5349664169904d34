//! Goal-driven proof search over the rule graph
//!
//! Two modes share the trace vocabulary. Explanation mode expands a goal
//! structurally without consulting any facts; verification mode proves a
//! goal against a supplied fact set. Both carry cycle protection: the
//! conclusion-to-rule graph is not guaranteed to be acyclic.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::RuleIndex;
use crate::rules::{FactSet, RuleSet};
use crate::trace::{TraceEvent, TraceLine};

/// The outcome of a verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verification {
    pub confirmed: bool,
    pub trace: Vec<TraceLine>,
}

/// Expand `goal` into the sub-goals that would be required to prove it.
///
/// Purely structural: no fact set is consulted. A goal with no producing
/// rules is a symptom leaf if it is a base fact, otherwise a no-rule
/// leaf. Re-encountering a goal already expanded in this run terminates
/// the branch with an already-expanded marker.
pub fn explain(rules: &RuleSet, index: &RuleIndex, goal: &str) -> Vec<TraceLine> {
    let mut lines = Vec::new();
    let mut visited = HashSet::new();
    expand_goal(rules, index, goal, 0, &mut visited, &mut lines);
    debug!(goal, lines = lines.len(), "Explanation complete");
    lines
}

fn expand_goal(
    rules: &RuleSet,
    index: &RuleIndex,
    goal: &str,
    depth: usize,
    visited: &mut HashSet<String>,
    lines: &mut Vec<TraceLine>,
) {
    if !visited.insert(goal.to_string()) {
        lines.push(TraceLine::new(
            depth,
            TraceEvent::AlreadyExpanded {
                label: goal.to_string(),
            },
        ));
        return;
    }

    let producing = index.rules_for(goal);
    if producing.is_empty() {
        let event = if index.base_facts().contains(goal) {
            TraceEvent::Symptom {
                label: goal.to_string(),
            }
        } else {
            TraceEvent::NoRule {
                label: goal.to_string(),
            }
        };
        lines.push(TraceLine::new(depth, event));
        return;
    }

    lines.push(TraceLine::new(
        depth,
        TraceEvent::Goal {
            label: goal.to_string(),
        },
    ));

    for &position in producing {
        let rule = &rules.rules()[position];
        lines.push(TraceLine::new(
            depth + 1,
            TraceEvent::RuleRequires {
                rule_id: rule.id.clone(),
                conditions: rule.conditions.clone(),
            },
        ));
        for condition in &rule.conditions {
            if index.base_facts().contains(condition) {
                lines.push(TraceLine::new(
                    depth + 2,
                    TraceEvent::Symptom {
                        label: condition.clone(),
                    },
                ));
            } else if index.conclusions().contains(condition) {
                expand_goal(rules, index, condition, depth + 2, visited, lines);
            } else {
                lines.push(TraceLine::new(
                    depth + 2,
                    TraceEvent::Unknown {
                        label: condition.clone(),
                    },
                ));
            }
        }
    }
}

/// Prove `goal` against `known`, returning the verdict and the full
/// step-by-step trace.
///
/// Depth-first AND/OR search: candidate rules in declaration order, the
/// first successful candidate wins, and a failing condition aborts its
/// candidate without trying the remaining conditions. A confirmed goal
/// is memoized into the working fact set so later references resolve as
/// already known; failures are not memoized. The caller's fact set is
/// never mutated.
pub fn verify(rules: &RuleSet, index: &RuleIndex, goal: &str, known: &FactSet) -> Verification {
    let mut facts = known.clone();
    let mut trace = Vec::new();
    let mut in_progress = HashSet::new();
    let confirmed = prove_goal(
        rules,
        index,
        goal,
        0,
        &mut facts,
        &mut in_progress,
        &mut trace,
    );
    debug!(goal, confirmed, steps = trace.len(), "Verification complete");
    Verification { confirmed, trace }
}

fn prove_goal(
    rules: &RuleSet,
    index: &RuleIndex,
    goal: &str,
    depth: usize,
    facts: &mut FactSet,
    in_progress: &mut HashSet<String>,
    trace: &mut Vec<TraceLine>,
) -> bool {
    if facts.contains(goal) {
        trace.push(TraceLine::new(
            depth,
            TraceEvent::AlreadyKnown {
                label: goal.to_string(),
            },
        ));
        return true;
    }

    // A goal re-entered while one of its own sub-proofs is still open can
    // never be grounded; report the cycle instead of recursing forever.
    if !in_progress.insert(goal.to_string()) {
        trace.push(TraceLine::new(
            depth,
            TraceEvent::CycleDetected {
                goal: goal.to_string(),
            },
        ));
        return false;
    }

    let candidates = index.rules_for(goal);
    if candidates.is_empty() {
        trace.push(TraceLine::new(
            depth,
            TraceEvent::Missing {
                label: goal.to_string(),
            },
        ));
        in_progress.remove(goal);
        return false;
    }

    let mut proved = false;
    'candidates: for &position in candidates {
        let rule = &rules.rules()[position];
        trace.push(TraceLine::new(
            depth,
            TraceEvent::CheckingRule {
                rule_id: rule.id.clone(),
                goal: goal.to_string(),
            },
        ));

        for condition in &rule.conditions {
            if !prove_goal(rules, index, condition, depth + 1, facts, in_progress, trace) {
                continue 'candidates;
            }
        }

        trace.push(TraceLine::new(
            depth,
            TraceEvent::RuleFired {
                rule_id: rule.id.clone(),
                goal: goal.to_string(),
            },
        ));
        facts.insert(goal.to_string());
        proved = true;
        break;
    }

    if !proved {
        trace.push(TraceLine::new(
            depth,
            TraceEvent::Unproved {
                goal: goal.to_string(),
            },
        ));
    }
    in_progress.remove(goal);
    proved
}

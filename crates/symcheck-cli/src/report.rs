//! Result reports for the terminal
//!
//! Each report is a serializable snapshot of one query's outcome with a
//! plain-text rendering. All policy filtering (special conclusion
//! labels) happens here, on top of what the engine returns.

use serde::Serialize;

use symcheck_config::PolicyConfig;
use symcheck_core::{Engine, FactSet, ForwardResult, TraceLine, Verification};

/// A sorted label listing (symptoms or conclusions).
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub labels: Vec<String>,
}

impl CatalogReport {
    /// Base facts the user can report, with alert labels filtered out.
    pub fn symptoms(engine: &Engine, policy: &PolicyConfig) -> Self {
        Self {
            labels: engine
                .base_facts()
                .iter()
                .filter(|label| !policy.is_special(label))
                .cloned()
                .collect(),
        }
    }

    /// Conclusions that count as diagnoses, with alert labels filtered out.
    pub fn conclusions(engine: &Engine, policy: &PolicyConfig) -> Self {
        Self {
            labels: engine
                .conclusions()
                .iter()
                .filter(|label| !policy.is_special(label))
                .cloned()
                .collect(),
        }
    }

    pub fn render_text(&self) -> String {
        if self.labels.is_empty() {
            "none".to_string()
        } else {
            self.labels.join("\n")
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FiringReport {
    pub rule_id: String,
    pub conditions: Vec<String>,
    pub conclusion: String,
}

#[derive(Debug, Serialize)]
pub struct DiagnosisEntry {
    pub conclusion: String,
    pub rule_id: String,
    pub precautions: Vec<String>,
}

/// The outcome of a forward-chaining diagnosis run.
#[derive(Debug, Serialize)]
pub struct DiagnosisReport {
    pub selected: Vec<String>,
    pub fired: Vec<FiringReport>,
    pub diagnoses: Vec<DiagnosisEntry>,
    pub alerts: Vec<String>,
    pub facts: Vec<String>,
}

impl DiagnosisReport {
    pub fn build(
        engine: &Engine,
        policy: &PolicyConfig,
        selected: &FactSet,
        result: &ForwardResult,
    ) -> Self {
        let mut fired = Vec::new();
        let mut diagnoses = Vec::new();
        for firing in &result.fired {
            // The index is valid by construction; skip defensively anyway.
            let Some(rule) = engine.rules().get(firing.rule_index) else {
                continue;
            };
            fired.push(FiringReport {
                rule_id: rule.id.clone(),
                conditions: rule.conditions.clone(),
                conclusion: rule.conclusion.clone(),
            });
            if !policy.is_special(&rule.conclusion) {
                diagnoses.push(DiagnosisEntry {
                    conclusion: rule.conclusion.clone(),
                    rule_id: rule.id.clone(),
                    precautions: rule.precautions.clone(),
                });
            }
        }

        let alerts = result
            .facts
            .iter()
            .filter(|label| policy.is_special(label))
            .cloned()
            .collect();

        Self {
            selected: selected.iter().cloned().collect(),
            fired,
            diagnoses,
            alerts,
            facts: result.facts.iter().cloned().collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push("Forward chaining results".to_string());
        lines.push(format!(
            "Selected symptoms: {}",
            if self.selected.is_empty() {
                "none".to_string()
            } else {
                self.selected.join(", ")
            }
        ));
        lines.push(format!(
            "Fired rules: {}",
            if self.fired.is_empty() {
                "none".to_string()
            } else {
                self.fired
                    .iter()
                    .map(|f| f.rule_id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));

        if self.diagnoses.is_empty() {
            lines.push("Diagnosed diseases: none".to_string());
        } else {
            lines.push("Diagnosed diseases:".to_string());
            for entry in &self.diagnoses {
                lines.push(format!("- {} (Rule {})", entry.conclusion, entry.rule_id));
                let precautions = if entry.precautions.is_empty() {
                    "none".to_string()
                } else {
                    entry.precautions.join("; ")
                };
                lines.push(format!("  Precautions: {precautions}"));
            }
        }

        for alert in &self.alerts {
            lines.push(format!("Alert: '{alert}' derived. Seek immediate care."));
        }

        lines.join("\n")
    }
}

/// The structural expansion of a goal (backward chaining without facts).
#[derive(Debug, Serialize)]
pub struct ExplanationReport {
    pub goal: String,
    pub trace: Vec<TraceLine>,
}

impl ExplanationReport {
    pub fn build(goal: &str, trace: Vec<TraceLine>) -> Self {
        Self {
            goal: goal.to_string(),
            trace,
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![
            "Backward chaining results".to_string(),
            format!("Goal: {}", self.goal),
            String::new(),
        ];
        lines.extend(self.trace.iter().map(ToString::to_string));
        lines.join("\n")
    }
}

/// The verdict and trace of a hypothesis verification.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub goal: String,
    pub confirmed: bool,
    pub trace: Vec<TraceLine>,
}

impl VerificationReport {
    pub fn build(goal: &str, verification: Verification) -> Self {
        Self {
            goal: goal.to_string(),
            confirmed: verification.confirmed,
            trace: verification.trace,
        }
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![
            format!("Verifying hypothesis: {}", self.goal),
            format!(
                "Status: {}",
                if self.confirmed {
                    "CONFIRMED"
                } else {
                    "NOT CONFIRMED"
                }
            ),
            String::new(),
        ];
        lines.extend(self.trace.iter().map(ToString::to_string));
        lines.join("\n")
    }
}

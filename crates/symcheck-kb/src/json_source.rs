//! JSON rule source
//!
//! A JSON array of rule objects. Unlike the CSV table, `conditions` and
//! `precautions` are already lists; `precautions` falls back to a stock
//! advisory when absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use symcheck_core::Rule;

use crate::{KbError, Result};

fn default_precautions() -> Vec<String> {
    vec!["Consult a doctor.".to_string()]
}

#[derive(Debug, Deserialize)]
struct RawRule {
    rule_id: String,
    conditions: Vec<String>,
    conclusion: String,
    #[serde(default = "default_precautions")]
    precautions: Vec<String>,
}

pub fn load_path(path: &Path) -> Result<Vec<Rule>> {
    read_rules(File::open(path)?)
}

pub fn read_rules<R: Read>(reader: R) -> Result<Vec<Rule>> {
    let raw: Vec<RawRule> = serde_json::from_reader(reader)?;
    raw.into_iter().enumerate().map(|(record, raw)| convert(raw, record as u64 + 1)).collect()
}

fn convert(raw: RawRule, record: u64) -> Result<Rule> {
    let rule_id = raw.rule_id.trim().to_string();
    if rule_id.is_empty() {
        return Err(KbError::EmptyRuleId { record });
    }

    let conditions: Vec<String> = raw
        .conditions
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();
    if conditions.is_empty() {
        return Err(KbError::EmptyConditions { rule_id });
    }

    let conclusion = raw.conclusion.trim().to_string();
    if conclusion.is_empty() {
        return Err(KbError::EmptyConclusion { rule_id });
    }

    Ok(Rule {
        id: rule_id,
        conditions,
        conclusion,
        precautions: raw.precautions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_a_rule_array() {
        let doc = r#"[
            {"rule_id": "R1", "conditions": ["fever", "cough"], "conclusion": "flu",
             "precautions": ["Rest and drink fluids."]},
            {"rule_id": "R2", "conditions": ["flu"], "conclusion": "seek_doctor"}
        ]"#;

        let rules = read_rules(doc.as_bytes()).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].precautions, vec!["Rest and drink fluids."]);
        // Absent precautions get the stock advisory.
        assert_eq!(rules[1].precautions, vec!["Consult a doctor."]);
    }

    #[test]
    fn test_empty_conditions_are_rejected() {
        let doc = r#"[{"rule_id": "R9", "conditions": [" "], "conclusion": "flu"}]"#;
        let err = read_rules(doc.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            KbError::EmptyConditions { rule_id } if rule_id == "R9"
        ));
    }

    #[test]
    fn test_invalid_json_is_a_json_error() {
        let err = read_rules("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, KbError::Json(_)));
    }
}

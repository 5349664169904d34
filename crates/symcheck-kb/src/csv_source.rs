//! CSV rule source
//!
//! One record per rule with headers `rule_id,conditions,conclusion,
//! precautions`; `conditions` and `precautions` are `;`-joined lists.
//! Whitespace is trimmed everywhere and empty list entries are dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use symcheck_core::Rule;

use crate::{split_list, KbError, Result};

#[derive(Debug, Deserialize)]
struct RawRule {
    rule_id: String,
    conditions: String,
    conclusion: String,
    #[serde(default)]
    precautions: String,
}

pub fn load_path(path: &Path) -> Result<Vec<Rule>> {
    read_rules(File::open(path)?)
}

pub fn read_rules<R: Read>(reader: R) -> Result<Vec<Rule>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rules = Vec::new();
    for (record, raw) in csv_reader.deserialize::<RawRule>().enumerate() {
        rules.push(convert(raw?, record as u64 + 1)?);
    }
    Ok(rules)
}

fn convert(raw: RawRule, record: u64) -> Result<Rule> {
    if raw.rule_id.is_empty() {
        return Err(KbError::EmptyRuleId { record });
    }

    let conditions = split_list(&raw.conditions);
    if conditions.is_empty() {
        return Err(KbError::EmptyConditions {
            rule_id: raw.rule_id,
        });
    }
    if raw.conclusion.is_empty() {
        return Err(KbError::EmptyConclusion {
            rule_id: raw.rule_id,
        });
    }

    Ok(Rule {
        id: raw.rule_id,
        conditions,
        conclusion: raw.conclusion,
        precautions: split_list(&raw.precautions),
    })
}

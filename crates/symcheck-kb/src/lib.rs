//! # Symcheck KB - Knowledge-Base Loading
//!
//! Turns external rule sources into a validated [`RuleSet`] for the
//! engine. Two formats are supported: the CSV table the knowledge bases
//! ship in, and a JSON array of rule records.
//!
//! Malformed rules are loader errors; nothing is silently dropped.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use symcheck_core::RuleSet;

pub mod csv_source;
pub mod json_source;

#[derive(Debug, Error)]
pub enum KbError {
    #[error("failed to read knowledge base: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {record} has an empty rule_id")]
    EmptyRuleId { record: u64 },

    #[error("rule {rule_id} has no conditions")]
    EmptyConditions { rule_id: String },

    #[error("rule {rule_id} has an empty conclusion")]
    EmptyConclusion { rule_id: String },

    #[error("invalid rule set: {0}")]
    Engine(#[from] symcheck_core::EngineError),

    #[error("unsupported knowledge-base format: {extension}")]
    UnsupportedFormat { extension: String },
}

pub type Result<T> = std::result::Result<T, KbError>;

/// Load a rule set from `path`, dispatching on the file extension
/// (`.csv` or `.json`).
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<RuleSet> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let rules = match extension.as_str() {
        "csv" => csv_source::load_path(path)?,
        "json" => json_source::load_path(path)?,
        _ => return Err(KbError::UnsupportedFormat { extension }),
    };

    info!(path = %path.display(), rules = rules.len(), "Knowledge base loaded");
    Ok(RuleSet::new(rules)?)
}

/// Split a `;`-joined label list, trimming each entry and dropping empty
/// ones.
pub(crate) fn split_list(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empty_entries() {
        assert_eq!(
            split_list(" fever ; cough ;; "),
            vec!["fever".to_string(), "cough".to_string()]
        );
        assert!(split_list("  ").is_empty());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = load_rules("rules.yaml").unwrap_err();
        assert!(matches!(
            err,
            KbError::UnsupportedFormat { extension } if extension == "yaml"
        ));
    }
}

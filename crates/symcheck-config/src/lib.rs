//! # Symcheck Config - Configuration Management
//!
//! Loads configuration from a file plus `SYMCHECK`-prefixed environment
//! variables. The special-conclusion label set lives here: which labels
//! count as alerts is presentation policy, not engine logic.

use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    #[serde(default = "default_kb_path")]
    pub path: PathBuf,
}

fn default_kb_path() -> PathBuf {
    PathBuf::from("knowledge_base.csv")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Conclusion labels the presentation layer treats as alerts rather
    /// than ordinary diagnoses.
    #[serde(default = "default_special_conclusions")]
    pub special_conclusions: Vec<String>,
}

fn default_special_conclusions() -> Vec<String> {
    vec!["emergency".to_string(), "seek_emergency_care".to_string()]
}

impl PolicyConfig {
    pub fn is_special(&self, label: &str) -> bool {
        self.special_conclusions.iter().any(|s| s == label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: default_kb_path(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            special_conclusions: default_special_conclusions(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            knowledge_base: KnowledgeBaseConfig::default(),
            policy: PolicyConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Load configuration from file and environment.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let builder = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(Environment::with_prefix("SYMCHECK").separator("__"))
        .build()?;

    builder.try_deserialize()
}

/// Load configuration with defaults.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
    load(path).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.knowledge_base.path, PathBuf::from("knowledge_base.csv"));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_special_conclusion_lookup() {
        let policy = PolicyConfig::default();
        assert!(policy.is_special("emergency"));
        assert!(policy.is_special("seek_emergency_care"));
        assert!(!policy.is_special("flu"));
    }
}

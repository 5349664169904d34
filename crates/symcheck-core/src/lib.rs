//! # Symcheck Core - Rule-Based Inference Engine
//!
//! Dual-mode reasoning over production rules of the form
//! "if all of conditions C then conclusion X": data-driven forward
//! chaining to saturation, and goal-driven backward chaining with an
//! explanation trace.
//!
//! The engine is pure in-memory computation. Loading rule sets from
//! external sources and rendering results for people are collaborator
//! concerns (see `symcheck-kb` and `symcheck-cli`).

use thiserror::Error;

pub mod backward;
pub mod engine;
pub mod forward;
pub mod index;
pub mod rules;
pub mod trace;

pub use backward::Verification;
pub use engine::Engine;
pub use forward::{Firing, ForwardResult};
pub use index::RuleIndex;
pub use rules::{FactSet, Rule, RuleSet};
pub use trace::{TraceEvent, TraceLine};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rule {rule_id} has no conditions")]
    EmptyConditions { rule_id: String },

    #[error("rule {rule_id} has an empty conclusion")]
    EmptyConclusion { rule_id: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

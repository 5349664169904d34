//! # Symcheck CLI
//!
//! Terminal front end for the symcheck expert system: loads the
//! configured knowledge base, runs forward or backward inference, and
//! renders the results as plain text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use symcheck_core::rules::fact_set;
use symcheck_core::Engine;

mod report;

use report::{CatalogReport, DiagnosisReport, ExplanationReport, VerificationReport};

#[derive(Parser, Debug)]
#[command(name = "symcheck")]
#[command(about = "Rule-based symptom checker expert system", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "symcheck.yaml")]
    config: String,

    /// Knowledge-base file (overrides config)
    #[arg(short, long)]
    knowledge_base: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the symptoms a user can report
    Symptoms,
    /// List the diagnosable conclusions
    Conclusions,
    /// Forward-chain from the given symptoms to every diagnosis
    Diagnose {
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// Show the sub-goals that would be required to prove a conclusion
    Explain { goal: String },
    /// Verify a hypothesis against the given symptoms
    Verify {
        goal: String,
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = symcheck_config::load_or_default(&args.config);
    if let Some(path) = args.knowledge_base {
        config.knowledge_base.path = path;
    }

    init_tracing(&config.observability.log_level);

    tracing::info!(
        path = %config.knowledge_base.path.display(),
        "Loading knowledge base"
    );
    let rules = symcheck_kb::load_rules(&config.knowledge_base.path).with_context(|| {
        format!(
            "failed to load knowledge base from {}",
            config.knowledge_base.path.display()
        )
    })?;
    let engine = Engine::new(rules);
    let policy = &config.policy;

    let output = match &args.command {
        Command::Symptoms => {
            let report = CatalogReport::symptoms(&engine, policy);
            emit(args.json, &report, || report.render_text())?
        }
        Command::Conclusions => {
            let report = CatalogReport::conclusions(&engine, policy);
            emit(args.json, &report, || report.render_text())?
        }
        Command::Diagnose { symptoms } => {
            let selected = fact_set(symptoms.iter().cloned());
            let result = engine.forward_chain(&selected);
            let report = DiagnosisReport::build(&engine, policy, &selected, &result);
            emit(args.json, &report, || report.render_text())?
        }
        Command::Explain { goal } => {
            let report = ExplanationReport::build(goal, engine.explain(goal));
            emit(args.json, &report, || report.render_text())?
        }
        Command::Verify { goal, symptoms } => {
            let known = fact_set(symptoms.iter().cloned());
            let report = VerificationReport::build(goal, engine.verify(goal, &known));
            emit(args.json, &report, || report.render_text())?
        }
    };

    println!("{output}");
    Ok(())
}

fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce() -> String) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(text())
    }
}

fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

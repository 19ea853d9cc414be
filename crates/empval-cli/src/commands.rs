//! Command runners: load input, run the core, hand results back to `main`.

use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use empval_ingest::decode_records;
use empval_model::{AppliedRules, BatchReport};
use empval_validate::ValidationEngine;

use crate::cli::{RulesArgs, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<BatchReport> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let records = decode_records(&bytes)?;
    info!(file = %args.file.display(), records = records.len(), "validating batch");
    let engine = ValidationEngine::new();
    Ok(engine.evaluate_batch_report(&records))
}

pub fn run_rules(args: &RulesArgs) -> AppliedRules {
    let engine = ValidationEngine::new();
    engine
        .resolver()
        .resolve(args.cidade.as_deref(), args.construtora.as_deref())
        .into_applied(args.cidade.as_deref(), args.construtora.as_deref())
}

/// The known-keys listing: every city and builder with a mapped rule set.
#[derive(Debug, Serialize)]
pub struct RuleOptions {
    pub cidades: Vec<&'static str>,
    pub construtoras: Vec<&'static str>,
}

pub fn run_options() -> RuleOptions {
    let engine = ValidationEngine::new();
    RuleOptions {
        cidades: engine.resolver().known_cities(),
        construtoras: engine.resolver().known_builders(),
    }
}

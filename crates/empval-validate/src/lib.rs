//! Rule resolution and evaluation for empreendimento records.
//!
//! The pipeline is: raw city/builder strings are normalized
//! ([`normalize`]), the [`RuleResolver`] turns them into an ordered,
//! deduplicated list of rule keys, and the [`ValidationEngine`] evaluates
//! each rule from the [`RuleCatalog`] against the record, collecting
//! violation messages in resolution order.
//!
//! Everything here is synchronous pure computation over tables built once
//! at startup; nothing is mutated during evaluation.

mod catalog;
mod engine;
mod normalize;
mod resolver;

pub use catalog::RuleCatalog;
pub use engine::ValidationEngine;
pub use normalize::{normalize, normalize_opt};
pub use resolver::{ResolvedRules, RuleResolver};

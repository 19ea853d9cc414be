//! Per-record validation and batch evaluation.

use tracing::debug;

use empval_model::{BatchReport, FieldError, Record, RecordResult, RecordStatus};

use crate::catalog::RuleCatalog;
use crate::resolver::RuleResolver;

/// Runs the resolved rules of each record and collects the outcomes.
///
/// Stateless apart from the immutable catalog and resolver tables; records
/// are evaluated independently, so batch results never depend on
/// neighbouring records.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    catalog: RuleCatalog,
    resolver: RuleResolver,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &RuleResolver {
        &self.resolver
    }

    /// Validate one record, returning its violation messages in rule order.
    ///
    /// An `Err` means a resolved rule read a field the record lacks (or one
    /// that is not numeric): a structural input problem, not a business
    /// verdict. Evaluation of that record stops at the first such field.
    pub fn validate(&self, record: &Record) -> Result<Vec<String>, FieldError> {
        let resolved = self
            .resolver
            .resolve(record.cidade(), record.construtora());
        let mut erros = Vec::new();
        for key in resolved.merged_keys {
            if let Some(message) = self.catalog.evaluate(key, record)? {
                erros.push(message);
            }
        }
        Ok(erros)
    }

    /// Evaluate a batch, one result per record, input order preserved.
    ///
    /// A structural error in one record is confined to that record's
    /// result; the remaining records still evaluate.
    pub fn evaluate_batch(&self, records: &[Record]) -> Vec<RecordResult> {
        records
            .iter()
            .map(|record| self.evaluate_record(record))
            .collect()
    }

    /// [`evaluate_batch`](Self::evaluate_batch) wrapped in a timestamped report.
    pub fn evaluate_batch_report(&self, records: &[Record]) -> BatchReport {
        let report = BatchReport::new(self.evaluate_batch(records));
        debug!(
            records = report.results.len(),
            invalid = report.invalid_count(),
            structural = report.structural_count(),
            "batch evaluated"
        );
        report
    }

    fn evaluate_record(&self, record: &Record) -> RecordResult {
        let construtora = record.construtora().map(str::to_string);
        let cidade = record.cidade().map(str::to_string);
        match self.validate(record) {
            Ok(erros) => {
                let status = if erros.is_empty() {
                    RecordStatus::Valido
                } else {
                    RecordStatus::Invalido
                };
                RecordResult {
                    construtora,
                    cidade,
                    status,
                    erros,
                    erro_estrutural: None,
                }
            }
            Err(error) => RecordResult {
                construtora,
                cidade,
                status: RecordStatus::Invalido,
                erros: Vec::new(),
                erro_estrutural: Some(error.to_string()),
            },
        }
    }
}

//! Validation outcome shapes returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-record verdict. Serialized in Portuguese per the response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[serde(rename = "Válido")]
    Valido,
    #[serde(rename = "Inválido")]
    Invalido,
}

/// Validation outcome for a single record.
///
/// `erros` holds business-rule violations in evaluation order. A structural
/// problem (a rule read a field the record lacks, or one that is not
/// numeric) is carried separately in `erro_estrutural` and never mixed into
/// `erros`; such a record is reported as invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResult {
    pub construtora: Option<String>,
    pub cidade: Option<String>,
    pub status: RecordStatus,
    pub erros: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro_estrutural: Option<String>,
}

impl RecordResult {
    pub fn is_valid(&self) -> bool {
        self.status == RecordStatus::Valido
    }

    pub fn is_structural(&self) -> bool {
        self.erro_estrutural.is_some()
    }
}

/// A full batch run: per-record results in input order plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<RecordResult>,
}

impl BatchReport {
    pub fn new(results: Vec<RecordResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.results.len() - self.valid_count()
    }

    pub fn structural_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_structural()).count()
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_in_portuguese() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Valido).unwrap(),
            "\"Válido\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Invalido).unwrap(),
            "\"Inválido\""
        );
    }

    #[test]
    fn structural_error_field_is_omitted_when_absent() {
        let result = RecordResult {
            construtora: None,
            cidade: Some("Boituva".to_string()),
            status: RecordStatus::Valido,
            erros: Vec::new(),
            erro_estrutural: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("erro_estrutural").is_none());
        assert_eq!(json["status"], "Válido");
    }

    #[test]
    fn report_counts() {
        let report = BatchReport::new(vec![
            RecordResult {
                construtora: None,
                cidade: None,
                status: RecordStatus::Valido,
                erros: Vec::new(),
                erro_estrutural: None,
            },
            RecordResult {
                construtora: None,
                cidade: None,
                status: RecordStatus::Invalido,
                erros: vec!["Torres devem ter menos de 30m de altura".to_string()],
                erro_estrutural: None,
            },
            RecordResult {
                construtora: None,
                cidade: None,
                status: RecordStatus::Invalido,
                erros: Vec::new(),
                erro_estrutural: Some("campo obrigatório ausente: area-do-terreno".to_string()),
            },
        ]);
        assert_eq!(report.valid_count(), 1);
        assert_eq!(report.invalid_count(), 2);
        assert_eq!(report.structural_count(), 1);
        assert!(report.has_invalid());
    }
}

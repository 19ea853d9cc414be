//! The empreendimento record: a field map read by the validation rules.
//!
//! Records arrive as JSON objects with kebab-case Portuguese field names.
//! There is no fixed schema: a record only needs the fields that its
//! applicable rules read, and a rule that reads an absent or non-numeric
//! field reports a `FieldError` rather than a violation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FieldError;

pub const FIELD_AREA_TERRENO: &str = "area-do-terreno";
pub const FIELD_NUMERO_TORRES: &str = "numero-de-torres";
pub const FIELD_ALTURA_TORRE: &str = "altura-da-torre";
pub const FIELD_AREA_TORRE: &str = "area-da-torre";
pub const FIELD_AREA_LAZER: &str = "area-de-lazer";
pub const FIELD_CIDADE: &str = "cidade";
pub const FIELD_CONSTRUTORA: &str = "construtora";

/// One real-estate development submitted for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// String value of a field, if present and a JSON string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn cidade(&self) -> Option<&str> {
        self.text(FIELD_CIDADE)
    }

    pub fn construtora(&self) -> Option<&str> {
        self.text(FIELD_CONSTRUTORA)
    }

    /// Numeric value of a required field.
    ///
    /// Absent fields and non-numeric values are structural errors, not
    /// violations.
    pub fn number(&self, field: &str) -> Result<f64, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::Missing(field.to_string())),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| FieldError::NotNumeric(field.to_string())),
        }
    }

    /// Numeric value of an optional field.
    ///
    /// `Ok(None)` when absent; an error only when the field is present but
    /// not numeric.
    pub fn optional_number(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| FieldError::NotNumeric(field.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).expect("record")
    }

    #[test]
    fn number_reads_integers_and_floats() {
        let rec = record(json!({ "numero-de-torres": 3, "altura-da-torre": 22.5 }));
        assert_eq!(rec.number(FIELD_NUMERO_TORRES).unwrap(), 3.0);
        assert_eq!(rec.number(FIELD_ALTURA_TORRE).unwrap(), 22.5);
    }

    #[test]
    fn number_missing_is_structural() {
        let rec = record(json!({}));
        assert_eq!(
            rec.number(FIELD_AREA_TERRENO),
            Err(FieldError::Missing(FIELD_AREA_TERRENO.to_string()))
        );
    }

    #[test]
    fn number_non_numeric_is_structural() {
        let rec = record(json!({ "altura-da-torre": "alta" }));
        assert_eq!(
            rec.number(FIELD_ALTURA_TORRE),
            Err(FieldError::NotNumeric(FIELD_ALTURA_TORRE.to_string()))
        );
    }

    #[test]
    fn optional_number_absent_is_none() {
        let rec = record(json!({}));
        assert_eq!(rec.optional_number(FIELD_AREA_LAZER).unwrap(), None);
    }

    #[test]
    fn text_ignores_non_string_values() {
        let rec = record(json!({ "cidade": 42 }));
        assert_eq!(rec.cidade(), None);
    }
}

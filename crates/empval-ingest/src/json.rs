//! Decoding of raw upload bytes into a batch of records.
//!
//! Decode failures are structural parse failures, reported before any rule
//! evaluation happens; they are a different animal from both rule
//! violations and per-record field errors.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use empval_model::Record;

/// Why a payload could not be decoded into a batch of records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("JSON inválido: {message} (linha {line}, coluna {column})")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },
    #[error("o JSON deve ser uma lista de empreendimentos")]
    NotAnArray,
    #[error("elemento {index} não é um objeto")]
    NotAnObject { index: usize },
}

/// Decode a raw JSON payload into a list of records.
///
/// The payload must be a JSON array of objects; anything else is rejected
/// with the offending position (line/column for malformed JSON, element
/// index for non-object entries) and nothing is evaluated.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|error| DecodeError::InvalidJson {
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        })?;
    let Value::Array(items) = value else {
        return Err(DecodeError::NotAnArray);
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(DecodeError::NotAnObject { index });
        };
        records.push(Record::new(fields));
    }
    debug!(records = records.len(), "decoded batch payload");
    Ok(records)
}

use thiserror::Error;

/// Structural failure while reading a record field.
///
/// Distinct from a rule violation: a violation is an expected business
/// outcome, a `FieldError` means the record is malformed for the rules that
/// apply to it. Messages are user-facing and therefore in Portuguese, like
/// the violation messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("campo obrigatório ausente: {0}")]
    Missing(String),
    #[error("campo {0} deve ser numérico")]
    NotNumeric(String),
}

impl FieldError {
    /// Name of the field that triggered the error.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing(name) | Self::NotNumeric(name) => name,
        }
    }
}

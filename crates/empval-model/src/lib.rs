pub mod error;
pub mod record;
pub mod report;
pub mod rules;

pub use error::FieldError;
pub use record::{
    FIELD_ALTURA_TORRE, FIELD_AREA_LAZER, FIELD_AREA_TERRENO, FIELD_AREA_TORRE, FIELD_CIDADE,
    FIELD_CONSTRUTORA, FIELD_NUMERO_TORRES, Record,
};
pub use report::{BatchReport, RecordResult, RecordStatus};
pub use rules::{AppliedRules, RuleInfo, RuleKey};

//! The fixed rule catalog: one evaluation per [`RuleKey`].
//!
//! Each evaluation returns `Ok(None)` on pass, `Ok(Some(message))` with
//! exactly one violation message on fail, or `Err(FieldError)` when the
//! record lacks a field the rule needs. The city- and builder-conditional
//! rules re-check their own applicability and pass silently for records
//! they do not apply to, even if a resolver put them in the selected set.

use empval_model::{
    FIELD_ALTURA_TORRE, FIELD_AREA_LAZER, FIELD_AREA_TERRENO, FIELD_AREA_TORRE,
    FIELD_NUMERO_TORRES, FieldError, Record, RuleInfo, RuleKey,
};

use crate::normalize::normalize_opt;

/// Process-wide immutable catalog mapping rule keys to their evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCatalog;

impl RuleCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Key/description pairs for every rule, in catalog order.
    pub fn rules(&self) -> Vec<RuleInfo> {
        RuleKey::ALL.iter().copied().map(RuleInfo::from).collect()
    }

    /// Evaluate one rule against a record.
    pub fn evaluate(
        &self,
        key: RuleKey,
        record: &Record,
    ) -> Result<Option<String>, FieldError> {
        match key {
            RuleKey::AlturaMenor30 => self.check_altura_menor_30(record),
            RuleKey::AreaTorresMenor80 => self.check_area_torres_menor_80(record),
            RuleKey::LazerSeVariasTorres => self.check_lazer_se_varias_torres(record),
            RuleKey::BoituvaMax5Torres => self.check_boituva_max_torres(record),
            RuleKey::GuaratinguetaAlturaPorTorres => self.check_guaratingueta_altura(record),
            RuleKey::AlphaLazerSempre => self.check_alpha_lazer(record),
        }
    }

    fn check_altura_menor_30(&self, record: &Record) -> Result<Option<String>, FieldError> {
        let altura = record.number(FIELD_ALTURA_TORRE)?;
        if altura >= 30.0 {
            return Ok(Some(
                "Torres devem ter menos de 30m de altura".to_string(),
            ));
        }
        Ok(None)
    }

    fn check_area_torres_menor_80(&self, record: &Record) -> Result<Option<String>, FieldError> {
        let torres = record.number(FIELD_NUMERO_TORRES)?;
        let area_torre = record.number(FIELD_AREA_TORRE)?;
        let terreno = record.number(FIELD_AREA_TERRENO)?;
        if torres * area_torre >= 0.8 * terreno {
            return Ok(Some(
                "Área total das torres deve ser inferior a 80% da área do terreno".to_string(),
            ));
        }
        Ok(None)
    }

    fn check_lazer_se_varias_torres(&self, record: &Record) -> Result<Option<String>, FieldError> {
        let torres = record.number(FIELD_NUMERO_TORRES)?;
        if torres <= 1.0 {
            return Ok(None);
        }
        let Some(lazer) = record.optional_number(FIELD_AREA_LAZER)? else {
            return Ok(Some("Precisa de área de lazer".to_string()));
        };
        let terreno = record.number(FIELD_AREA_TERRENO)?;
        if lazer < 0.1 * terreno {
            return Ok(Some(
                "Área de lazer deve ser >= 10% da área do terreno".to_string(),
            ));
        }
        Ok(None)
    }

    fn check_boituva_max_torres(&self, record: &Record) -> Result<Option<String>, FieldError> {
        // Applicability guard: harmless when the resolver selected this
        // rule for another city.
        if normalize_opt(record.cidade()) != "boituva" {
            return Ok(None);
        }
        let torres = record.number(FIELD_NUMERO_TORRES)?;
        if torres > 5.0 {
            return Ok(Some(
                "Boituva: não pode haver mais de 5 torres no terreno".to_string(),
            ));
        }
        Ok(None)
    }

    fn check_guaratingueta_altura(&self, record: &Record) -> Result<Option<String>, FieldError> {
        if normalize_opt(record.cidade()) != "guaratingueta" {
            return Ok(None);
        }
        let torres = record.number(FIELD_NUMERO_TORRES)?;
        let limite = if torres <= 2.0 {
            25
        } else if torres == 3.0 {
            20
        } else {
            15
        };
        let altura = record.number(FIELD_ALTURA_TORRE)?;
        if altura > f64::from(limite) {
            return Ok(Some(format!(
                "Guaratinguetá: para {} torres, altura máxima é {limite}m",
                torres as i64
            )));
        }
        Ok(None)
    }

    fn check_alpha_lazer(&self, record: &Record) -> Result<Option<String>, FieldError> {
        let construtora = normalize_opt(record.construtora());
        if construtora != "alpha" && construtora != "construtora alpha" {
            return Ok(None);
        }
        let Some(lazer) = record.optional_number(FIELD_AREA_LAZER)? else {
            return Ok(Some("Alpha: precisa de área de lazer (sempre)".to_string()));
        };
        let terreno = record.number(FIELD_AREA_TERRENO)?;
        if lazer < 0.1 * terreno {
            return Ok(Some(
                "Alpha: área de lazer deve ser >= 10% da área do terreno".to_string(),
            ));
        }
        Ok(None)
    }
}

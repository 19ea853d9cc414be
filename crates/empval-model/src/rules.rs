//! Rule identifiers and catalog metadata.
//!
//! The rule set is closed: every rule the resolver can select is a variant
//! of [`RuleKey`], so a mapping can never reference a rule that does not
//! exist. Wire keys and descriptions are stable identifiers relied on by
//! callers of the preview queries.

use serde::Serialize;

/// Stable identifier of a single business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKey {
    /// Towers must be under 30m.
    #[serde(rename = "r1_altura<30")]
    AlturaMenor30,
    /// Total tower footprint must stay under 80% of the land area.
    #[serde(rename = "r2_area_torres<80%_terreno")]
    AreaTorresMenor80,
    /// With more than one tower, leisure area must be at least 10% of the land.
    #[serde(rename = "r3_lazer>=10%_se_varias_torres")]
    LazerSeVariasTorres,
    /// Boituva caps developments at 5 towers.
    #[serde(rename = "boituva_max5_torres")]
    BoituvaMax5Torres,
    /// Guaratinguetá caps tower height depending on the tower count.
    #[serde(rename = "guaratingueta_altura_por_torres")]
    GuaratinguetaAlturaPorTorres,
    /// The Alpha builder always requires leisure area of at least 10%.
    #[serde(rename = "alpha_lazer>=10%_sempre")]
    AlphaLazerSempre,
}

impl RuleKey {
    /// Every rule in the catalog, in catalog order.
    pub const ALL: [RuleKey; 6] = [
        RuleKey::AlturaMenor30,
        RuleKey::AreaTorresMenor80,
        RuleKey::LazerSeVariasTorres,
        RuleKey::BoituvaMax5Torres,
        RuleKey::GuaratinguetaAlturaPorTorres,
        RuleKey::AlphaLazerSempre,
    ];

    /// Stable wire key, as it appears in query responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlturaMenor30 => "r1_altura<30",
            Self::AreaTorresMenor80 => "r2_area_torres<80%_terreno",
            Self::LazerSeVariasTorres => "r3_lazer>=10%_se_varias_torres",
            Self::BoituvaMax5Torres => "boituva_max5_torres",
            Self::GuaratinguetaAlturaPorTorres => "guaratingueta_altura_por_torres",
            Self::AlphaLazerSempre => "alpha_lazer>=10%_sempre",
        }
    }

    /// Human-readable description shown by the preview query.
    pub fn description(self) -> &'static str {
        match self {
            Self::AlturaMenor30 => "Torres devem ter menos de 30m de altura",
            Self::AreaTorresMenor80 => "Área total das torres < 80% da área do terreno",
            Self::LazerSeVariasTorres => "Se >1 torre, exigir área de lazer >=10% do terreno",
            Self::BoituvaMax5Torres => "Boituva: no máximo 5 torres",
            Self::GuaratinguetaAlturaPorTorres => {
                "Guaratinguetá: altura máxima depende do nº de torres"
            }
            Self::AlphaLazerSempre => "Alpha: sempre possui área de lazer >=10% do terreno",
        }
    }
}

/// Key/description pair returned by the applicable-rules preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub key: &'static str,
    pub description: &'static str,
}

impl From<RuleKey> for RuleInfo {
    fn from(key: RuleKey) -> Self {
        Self {
            key: key.as_str(),
            description: key.description(),
        }
    }
}

/// Answer to the applicable-rules preview query: which rules a given
/// city/builder combination would be validated against, before any data is
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRules {
    pub cidade: Option<String>,
    pub construtora: Option<String>,
    /// True when the city was not in the mapping and the default rule list
    /// was used.
    pub default_city_rules: bool,
    pub city_rules: Vec<RuleInfo>,
    pub builder_rules: Vec<RuleInfo>,
    pub merged_rules: Vec<RuleInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_are_unique() {
        let mut keys: Vec<&str> = RuleKey::ALL.iter().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), RuleKey::ALL.len());
    }

    #[test]
    fn serializes_as_wire_key() {
        let json = serde_json::to_string(&RuleKey::AlturaMenor30).unwrap();
        assert_eq!(json, "\"r1_altura<30\"");
    }
}

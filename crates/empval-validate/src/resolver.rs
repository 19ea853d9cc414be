//! Rule-set resolution: which rules apply to a city/builder combination.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use empval_model::{AppliedRules, RuleInfo, RuleKey};

use crate::normalize::normalize_opt;

/// Rules selected for one city/builder combination.
///
/// `merged_keys` is the evaluation order: the city's keys first, in their
/// listed order, followed by any builder keys not already present. The
/// merge never duplicates a key and is recomputed per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRules {
    pub city_keys: Vec<RuleKey>,
    pub builder_keys: Vec<RuleKey>,
    pub merged_keys: Vec<RuleKey>,
    pub used_default: bool,
}

impl ResolvedRules {
    /// Expand the key lists into the preview response, echoing the raw
    /// city/builder strings the caller asked about.
    pub fn into_applied(self, cidade: Option<&str>, construtora: Option<&str>) -> AppliedRules {
        fn infos(keys: Vec<RuleKey>) -> Vec<RuleInfo> {
            keys.into_iter().map(RuleInfo::from).collect()
        }
        AppliedRules {
            cidade: cidade.map(str::to_string),
            construtora: construtora.map(str::to_string),
            default_city_rules: self.used_default,
            city_rules: infos(self.city_keys),
            builder_rules: infos(self.builder_keys),
            merged_rules: infos(self.merged_keys),
        }
    }
}

/// City and builder rule-set mappings, built once at startup.
///
/// Lookups are keyed by normalized names, so callers may pass raw strings
/// with any casing or accents. Unknown cities fall back to the default
/// rule list; unknown builders contribute nothing.
#[derive(Debug, Clone)]
pub struct RuleResolver {
    city_sets: BTreeMap<&'static str, Vec<RuleKey>>,
    builder_sets: BTreeMap<&'static str, Vec<RuleKey>>,
    default_city_keys: Vec<RuleKey>,
}

impl Default for RuleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleResolver {
    pub fn new() -> Self {
        let mut city_sets: BTreeMap<&'static str, Vec<RuleKey>> = BTreeMap::new();
        city_sets.insert(
            "rio de janeiro",
            vec![RuleKey::AlturaMenor30, RuleKey::AreaTorresMenor80],
        );
        city_sets.insert(
            "sao paulo",
            vec![RuleKey::AreaTorresMenor80, RuleKey::LazerSeVariasTorres],
        );
        city_sets.insert(
            "boituva",
            vec![
                RuleKey::AlturaMenor30,
                RuleKey::AreaTorresMenor80,
                RuleKey::LazerSeVariasTorres,
                RuleKey::BoituvaMax5Torres,
            ],
        );
        // Guaratinguetá swaps the flat height cap for its own tower-count
        // dependent one.
        city_sets.insert(
            "guaratingueta",
            vec![
                RuleKey::GuaratinguetaAlturaPorTorres,
                RuleKey::AreaTorresMenor80,
                RuleKey::LazerSeVariasTorres,
            ],
        );

        let mut builder_sets: BTreeMap<&'static str, Vec<RuleKey>> = BTreeMap::new();
        builder_sets.insert("alpha", vec![RuleKey::AlphaLazerSempre]);
        builder_sets.insert("construtora alpha", vec![RuleKey::AlphaLazerSempre]);

        Self {
            city_sets,
            builder_sets,
            default_city_keys: vec![
                RuleKey::AlturaMenor30,
                RuleKey::AreaTorresMenor80,
                RuleKey::LazerSeVariasTorres,
            ],
        }
    }

    /// Resolve the applicable rules for a city/builder combination.
    ///
    /// Never fails: absent or unknown inputs resolve through the defaults.
    pub fn resolve(&self, city: Option<&str>, builder: Option<&str>) -> ResolvedRules {
        let city_norm = normalize_opt(city);
        let builder_norm = normalize_opt(builder);

        let (city_keys, used_default) = match self.city_sets.get(city_norm.as_str()) {
            Some(keys) => (keys.clone(), false),
            None => (self.default_city_keys.clone(), true),
        };
        let builder_keys = self
            .builder_sets
            .get(builder_norm.as_str())
            .cloned()
            .unwrap_or_default();

        let mut merged_keys = city_keys.clone();
        for key in &builder_keys {
            if !merged_keys.contains(key) {
                merged_keys.push(*key);
            }
        }

        debug!(
            city = %city_norm,
            builder = %builder_norm,
            used_default,
            rules = merged_keys.len(),
            "resolved rule set"
        );
        ResolvedRules {
            city_keys,
            builder_keys,
            merged_keys,
            used_default,
        }
    }

    /// Known city keys (normalized), sorted.
    pub fn known_cities(&self) -> Vec<&'static str> {
        self.city_sets.keys().copied().collect()
    }

    /// Known builder keys (normalized), sorted.
    pub fn known_builders(&self) -> Vec<&'static str> {
        self.builder_sets.keys().copied().collect()
    }
}

//! Archetype definitions.
//!
//! A [`ClassDefinition`] is what callers and definition files supply. The
//! registry validates it into a [`ClassData`], which is immutable from then on.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeBlock;
use crate::error::{CoreError, CoreResult};

/// Identifier an archetype is registered under (e.g. `scum`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for ClassId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ClassId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An unvalidated archetype definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Display name, unique within a registry.
    pub name: String,
    /// Optional flavor line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stat deltas keyed by attribute code or name.
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    /// Starting gear in display order.
    pub gear: Vec<String>,
    /// Ability descriptions in display order.
    #[serde(default)]
    pub abilities: Vec<String>,
}

impl ClassDefinition {
    /// Start a definition with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the flavor line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a stat delta.
    pub fn with_stat(mut self, key: impl Into<String>, delta: i64) -> Self {
        self.stats.insert(key.into(), delta);
        self
    }

    /// Append an item to the starting gear.
    pub fn with_gear(mut self, item: impl Into<String>) -> Self {
        self.gear.push(item.into());
        self
    }

    /// Append an ability description.
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }
}

/// A validated archetype: stat deltas, starting gear, and abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassData {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    stats: AttributeBlock,
    gear: Vec<String>,
    abilities: Vec<String>,
}

impl ClassData {
    /// Check a definition's structural invariants and convert it.
    pub(crate) fn validate(id: &ClassId, definition: ClassDefinition) -> CoreResult<Self> {
        let invalid = |reason: String| CoreError::InvalidData {
            id: id.clone(),
            reason,
        };

        if definition.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if definition.gear.is_empty() {
            return Err(invalid("gear is empty".to_string()));
        }
        let pairs = definition.stats.iter().map(|(k, v)| (k, *v));
        let stats = AttributeBlock::from_named(pairs).map_err(|e| match e {
            CoreError::UnknownAttribute(key) => invalid(format!("unrecognized stat \"{key}\"")),
            other => other,
        })?;

        Ok(Self {
            name: definition.name,
            description: definition.description,
            stats,
            gear: definition.gear,
            abilities: definition.abilities,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor line, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sparse stat deltas.
    pub fn stats(&self) -> &AttributeBlock {
        &self.stats
    }

    /// Starting gear in display order. May repeat items.
    pub fn gear(&self) -> &[String] {
        &self.gear
    }

    /// Ability descriptions in display order.
    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    /// Convert back into a definition, with stats keyed by attribute code.
    pub fn to_definition(&self) -> ClassDefinition {
        ClassDefinition {
            name: self.name.clone(),
            description: self.description.clone(),
            stats: self
                .stats
                .iter()
                .map(|(k, v)| (k.code().to_string(), v))
                .collect(),
            gear: self.gear.clone(),
            abilities: self.abilities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeKey;

    fn scum() -> ClassDefinition {
        ClassDefinition::new("Gutterborn Scum")
            .with_stat("agi", 1)
            .with_stat("pre", 1)
            .with_stat("str", -1)
            .with_gear("Dagger")
            .with_gear("Lockpicks")
            .with_gear("Grappling hook")
            .with_ability("Can hide in shadows")
    }

    #[test]
    fn validate_accepts_well_formed_definition() {
        let data = ClassData::validate(&ClassId::from("scum"), scum()).unwrap();
        assert_eq!(data.name(), "Gutterborn Scum");
        assert_eq!(data.stats().get(AttributeKey::Agility), 1);
        assert_eq!(data.stats().get(AttributeKey::Strength), -1);
        assert_eq!(data.gear(), ["Dagger", "Lockpicks", "Grappling hook"]);
        assert_eq!(data.abilities().len(), 1);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut def = scum();
        def.name = "   ".to_string();
        let err = ClassData::validate(&ClassId::from("scum"), def).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData { ref reason, .. } if reason.contains("name")));
    }

    #[test]
    fn validate_rejects_empty_gear() {
        let mut def = scum();
        def.gear.clear();
        let err = ClassData::validate(&ClassId::from("scum"), def).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData { ref reason, .. } if reason.contains("gear")));
    }

    #[test]
    fn validate_rejects_unknown_stat() {
        let def = scum().with_stat("luck", 2);
        let err = ClassData::validate(&ClassId::from("scum"), def).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid class \"scum\": unrecognized stat \"luck\""
        );
    }

    #[test]
    fn abilities_may_be_empty() {
        let mut def = scum();
        def.abilities.clear();
        assert!(ClassData::validate(&ClassId::from("scum"), def).is_ok());
    }

    #[test]
    fn duplicate_gear_is_kept() {
        let def = ClassDefinition::new("Esoteric Hermit")
            .with_gear("Scroll")
            .with_gear("Scroll");
        let data = ClassData::validate(&ClassId::from("hermit"), def).unwrap();
        assert_eq!(data.gear(), ["Scroll", "Scroll"]);
    }

    #[test]
    fn to_definition_round_trips() {
        let data = ClassData::validate(&ClassId::from("scum"), scum()).unwrap();
        assert_eq!(data.to_definition(), scum());
    }

    #[test]
    fn definition_from_json_defaults_optional_fields() {
        let def: ClassDefinition =
            serde_json::from_str(r#"{"name": "Pale One", "gear": ["Candle"]}"#).unwrap();
        assert!(def.stats.is_empty());
        assert!(def.abilities.is_empty());
        assert!(def.description.is_none());
    }
}

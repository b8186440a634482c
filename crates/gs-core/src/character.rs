//! Composed character sheets.
//!
//! A [`Character`] is the result of composing a base attribute block with an
//! archetype's deltas and copying its gear and abilities. Further modifiers
//! (equipment, situational effects) are applied with
//! [`Character::apply_modifier`], one left-to-right composition step each.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeBlock, AttributeKey};
use crate::class::{ClassData, ClassId};
use crate::error::CoreResult;
use crate::registry::Registry;

/// A character's derived attributes, gear, and abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Player-chosen name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifier of the chosen archetype, if any.
    pub class: Option<ClassId>,
    /// Display name of the chosen archetype, if any.
    pub class_name: Option<String>,
    /// Final attributes after composition.
    pub attributes: AttributeBlock,
    /// Gear in display order.
    pub gear: Vec<String>,
    /// Ability descriptions in display order.
    pub abilities: Vec<String>,
}

impl Character {
    /// A character with no archetype selected.
    pub fn unclassed(base: AttributeBlock) -> Self {
        Self {
            name: None,
            class: None,
            class_name: None,
            attributes: base,
            gear: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// Compose `base` with an archetype already resolved from a registry.
    pub fn from_class(base: &AttributeBlock, id: ClassId, class: &ClassData) -> Self {
        Self {
            name: None,
            class: Some(id),
            class_name: Some(class.name().to_string()),
            attributes: base.compose(class.stats()),
            gear: class.gear().to_vec(),
            abilities: class.abilities().to_vec(),
        }
    }

    /// Resolve `id` in `registry` and compose it onto `base`.
    pub fn build(base: &AttributeBlock, registry: &Registry, id: &str) -> CoreResult<Self> {
        let class = registry.resolve(id)?;
        Ok(Self::from_class(base, ClassId::new(id), class))
    }

    /// Set the character's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Return a copy with `delta` composed onto the attributes.
    pub fn apply_modifier(&self, delta: &AttributeBlock) -> Self {
        Self {
            attributes: self.attributes.compose(delta),
            ..self.clone()
        }
    }

    /// Value of a single attribute.
    pub fn attribute(&self, key: AttributeKey) -> i64 {
        self.attributes.get(key)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Nameless");
        match &self.class_name {
            Some(class) => writeln!(f, "{name}, {class}")?,
            None => writeln!(f, "{name} (no class)")?,
        }
        for key in AttributeKey::ALL {
            writeln!(f, "  {:<10}{:>3}", key.label(), self.attributes.get(key))?;
        }
        if !self.gear.is_empty() {
            writeln!(f, "  gear: {}", self.gear.join(", "))?;
        }
        for ability in &self.abilities {
            writeln!(f, "  * {ability}")?;
        }
        Ok(())
    }
}

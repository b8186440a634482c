//! Configuration for a character session.

use gs_core::{AttributeBlock, ClassId};
use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// Starting values for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Base attributes every archetype is composed onto.
    pub base: AttributeBlock,
    /// Character name shown on the sheet.
    pub character_name: Option<String>,
    /// Archetype selected when the session starts.
    pub default_class: Option<ClassId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base: AttributeBlock::uniform(3),
            character_name: None,
            default_class: None,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the base attributes.
    pub fn with_base(mut self, base: AttributeBlock) -> Self {
        self.base = base;
        self
    }

    /// Set the character name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }

    /// Set the archetype selected at start.
    pub fn with_default_class(mut self, id: impl Into<ClassId>) -> Self {
        self.default_class = Some(id.into());
        self
    }
}

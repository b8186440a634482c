//! A single character's session: chosen archetype, sheet, and roll log.
//!
//! The session is the explicit context that replaces any "currently selected
//! class" global. Registry lookups take the registry as an argument, so one
//! registry can serve many sessions.

use gs_core::{AttributeBlock, Character, ClassId, Registry};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::roll_log::{RollLogEntry, SharedRollLog};

/// A character session.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    character: Character,
    log: SharedRollLog,
}

impl Session {
    /// Create a session with no archetype selected.
    pub fn new(config: SessionConfig) -> Self {
        let character = unclassed(&config);
        Self {
            config,
            character,
            log: SharedRollLog::new(),
        }
    }

    /// Create a session and select the configured default archetype, if any.
    pub fn start(config: SessionConfig, registry: &Registry) -> SessionResult<Self> {
        let default_class = config.default_class.clone();
        let mut session = Self::new(config);
        if let Some(id) = default_class {
            session.select_class(registry, id.as_str())?;
        }
        Ok(session)
    }

    /// Select an archetype and rebuild the character from the base block.
    ///
    /// If `id` is unknown the session falls back to the unclassed character
    /// and the error is returned.
    pub fn select_class(&mut self, registry: &Registry, id: &str) -> SessionResult<&Character> {
        match Character::build(&self.config.base, registry, id) {
            Ok(character) => {
                self.character = named(character, &self.config);
                tracing::debug!("Selected class: {id}");
                Ok(&self.character)
            }
            Err(e) => {
                tracing::warn!("Falling back to no class: {e}");
                self.character = unclassed(&self.config);
                Err(e.into())
            }
        }
    }

    /// Drop the selected archetype.
    pub fn clear_class(&mut self) {
        self.character = unclassed(&self.config);
    }

    /// Compose an extra modifier onto the current character.
    pub fn apply_modifier(&mut self, delta: &AttributeBlock) -> &Character {
        self.character = self.character.apply_modifier(delta);
        &self.character
    }

    /// The current character sheet.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Identifier of the selected archetype, if any.
    pub fn selected_class(&self) -> Option<&ClassId> {
        self.character.class.as_ref()
    }

    /// The session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Append a roll outcome to the session's log.
    pub fn record(&self, entry: RollLogEntry) {
        self.log.append(entry);
    }

    /// A handle to the session's roll log.
    pub fn log(&self) -> SharedRollLog {
        self.log.clone()
    }
}

fn unclassed(config: &SessionConfig) -> Character {
    named(Character::unclassed(config.base.clone()), config)
}

fn named(character: Character, config: &SessionConfig) -> Character {
    match &config.character_name {
        Some(name) => character.with_name(name.clone()),
        None => character,
    }
}

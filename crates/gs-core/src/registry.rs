//! The archetype registry.
//!
//! A flat, ordered mapping from [`ClassId`] to [`ClassData`]. Entries are
//! validated on insertion and never change afterwards; lookups of unknown
//! identifiers fail instead of falling back to a default.

use std::collections::HashMap;

use serde::Deserialize;

use crate::class::{ClassData, ClassDefinition, ClassId};
use crate::error::{CoreError, CoreResult};
use crate::preset;

/// Registered archetypes in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(ClassId, ClassData)>,
    index: HashMap<ClassId, usize>,
}

/// One element of a class definition document.
#[derive(Deserialize)]
struct DefinitionEntry {
    id: ClassId,
    #[serde(flatten)]
    definition: ClassDefinition,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the archetypes that ship with the crate.
    pub fn builtin() -> CoreResult<Self> {
        let mut registry = Self::new();
        for (id, definition) in preset::all() {
            registry.register(id, definition)?;
        }
        Ok(registry)
    }

    /// Validate and insert a new archetype.
    ///
    /// Fails with [`CoreError::DuplicateId`] if `id` is taken, or
    /// [`CoreError::InvalidData`] if the definition is malformed or its name
    /// is already used by another archetype. A failed call changes nothing.
    pub fn register(
        &mut self,
        id: impl Into<ClassId>,
        definition: ClassDefinition,
    ) -> CoreResult<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(CoreError::DuplicateId(id));
        }

        let data = ClassData::validate(&id, definition)?;

        let name = data.name().trim().to_lowercase();
        if let Some((other, _)) = self
            .entries
            .iter()
            .find(|(_, c)| c.name().trim().to_lowercase() == name)
        {
            return Err(CoreError::InvalidData {
                reason: format!("name \"{}\" is already used by \"{other}\"", data.name()),
                id,
            });
        }

        tracing::debug!("Registered class: {} ({})", id, data.name());
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, data));
        Ok(())
    }

    /// Look up an archetype by identifier.
    pub fn resolve(&self, id: &str) -> CoreResult<&ClassData> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| CoreError::UnknownClass(ClassId::new(id)))
    }

    /// All archetypes in registration order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = (&ClassId, &ClassData)> {
        self.entries.iter().map(|(id, data)| (id, data))
    }

    /// Returns true if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered archetypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register every definition in a JSON array of `{"id": ..., <definition>}`
    /// objects, in document order.
    ///
    /// Stops at the first failing entry; entries before it stay registered.
    /// Returns the number of archetypes added.
    pub fn extend_from_json(&mut self, json: &str) -> CoreResult<usize> {
        let entries: Vec<DefinitionEntry> = serde_json::from_str(json)?;
        let count = entries.len();
        for entry in entries {
            self.register(entry.id, entry.definition)?;
        }
        tracing::debug!("Loaded {count} class definitions");
        Ok(count)
    }
}

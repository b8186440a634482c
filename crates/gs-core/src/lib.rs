//! Core types for Grimsheet: archetypes, attribute blocks, and composition.
//!
//! An archetype ([`ClassData`]) is plain data stored in a [`Registry`]. A
//! character's final attributes are produced by composing a base
//! [`AttributeBlock`] with the stat deltas of the chosen archetype, and any
//! further modifiers, left to right.

pub mod attributes;
pub mod character;
pub mod class;
pub mod error;
pub mod preset;
pub mod registry;

pub use attributes::{AttributeBlock, AttributeKey, compose, compose_all};
pub use character::Character;
pub use class::{ClassData, ClassDefinition, ClassId};
pub use error::{CoreError, CoreResult};
pub use registry::Registry;

//! Attribute blocks and the composer.
//!
//! An [`AttributeBlock`] maps the recognized [`AttributeKey`]s to signed
//! integers. Absent keys read as zero and zero values are never stored, so
//! two blocks compare equal exactly when they agree on every key.
//!
//! Composition is plain key-wise addition with no clamping. Several modifier
//! sources are combined by composing pairwise from left to right.
//!
//! Values are stored as `i64` while parsed modifiers are bounded to `i32`, so
//! composing user input never leaves the representable range. Only blocks
//! built directly at the `i64` limits saturate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A recognized character attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Raw physical power.
    #[serde(rename = "str", alias = "strength")]
    Strength,
    /// Speed, balance, and reflexes.
    #[serde(rename = "agi", alias = "agility")]
    Agility,
    /// Perception, charisma, and wits.
    #[serde(rename = "pre", alias = "presence")]
    Presence,
    /// Endurance and resistance to harm.
    #[serde(rename = "tou", alias = "toughness")]
    Toughness,
}

impl AttributeKey {
    /// Every recognized key, in display order.
    pub const ALL: [AttributeKey; 4] = [
        Self::Strength,
        Self::Agility,
        Self::Presence,
        Self::Toughness,
    ];

    /// The three-letter code used on sheets and in definition files.
    pub fn code(self) -> &'static str {
        match self {
            Self::Strength => "str",
            Self::Agility => "agi",
            Self::Presence => "pre",
            Self::Toughness => "tou",
        }
    }

    /// The full display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Presence => "Presence",
            Self::Toughness => "Toughness",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AttributeKey {
    type Err = CoreError;

    /// Parse a key from its code or full name, ignoring case.
    fn from_str(s: &str) -> CoreResult<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.code() == lower || k.label().to_lowercase() == lower)
            .ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// A sparse mapping from attribute keys to signed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, i64>",
    into = "BTreeMap<AttributeKey, i64>"
)]
pub struct AttributeBlock {
    values: BTreeMap<AttributeKey, i64>,
}

impl AttributeBlock {
    /// An empty block: every attribute reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with every recognized attribute set to `value`.
    pub fn uniform(value: i64) -> Self {
        AttributeKey::ALL
            .into_iter()
            .fold(Self::new(), |block, key| block.with(key, value))
    }

    /// Return this block with `key` set to `value`.
    pub fn with(mut self, key: AttributeKey, value: i64) -> Self {
        if value == 0 {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
        self
    }

    /// Build a block from string-keyed pairs. Repeated keys accumulate.
    ///
    /// Fails with [`CoreError::InvalidModifier`] if the accumulated value of a
    /// key leaves the `i64` range.
    pub fn from_named<I, K, V>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<i64>,
    {
        let mut block = Self::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let key: AttributeKey = name.parse()?;
            let sum = block
                .get(key)
                .checked_add(value.into())
                .ok_or_else(|| CoreError::InvalidModifier(format!("{name} overflows")))?;
            block = block.with(key, sum);
        }
        Ok(block)
    }

    /// The value of `key`, or zero if absent.
    pub fn get(&self, key: AttributeKey) -> i64 {
        self.values.get(&key).copied().unwrap_or(0)
    }

    /// Non-zero entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, i64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Returns true if every attribute reads as zero.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Add `delta` to this block key-wise, returning a fresh block.
    ///
    /// Never fails. A sum past the `i64` limits saturates.
    pub fn compose(&self, delta: &AttributeBlock) -> AttributeBlock {
        delta
            .iter()
            .fold(self.clone(), |block, (key, value)| {
                let sum = block.get(key).saturating_add(value);
                block.with(key, sum)
            })
    }

    /// Render as signed deltas, e.g. `str -1, agi +1`.
    pub fn signed(&self) -> String {
        if self.is_empty() {
            return "none".to_string();
        }
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k} {v:+}")).collect();
        parts.join(", ")
    }
}

/// Compose `base` with `delta`; see [`AttributeBlock::compose`].
pub fn compose(base: &AttributeBlock, delta: &AttributeBlock) -> AttributeBlock {
    base.compose(delta)
}

/// Compose `base` with each delta in turn, left to right.
pub fn compose_all<'a, I>(base: &AttributeBlock, deltas: I) -> AttributeBlock
where
    I: IntoIterator<Item = &'a AttributeBlock>,
{
    deltas
        .into_iter()
        .fold(base.clone(), |acc, delta| acc.compose(delta))
}

impl From<BTreeMap<AttributeKey, i64>> for AttributeBlock {
    fn from(values: BTreeMap<AttributeKey, i64>) -> Self {
        values
            .into_iter()
            .fold(Self::new(), |block, (key, value)| block.with(key, value))
    }
}

impl TryFrom<BTreeMap<String, i64>> for AttributeBlock {
    type Error = CoreError;

    /// Accepts codes and full names alike; `str` and `strength` accumulate.
    fn try_from(values: BTreeMap<String, i64>) -> CoreResult<Self> {
        Self::from_named(values)
    }
}

impl From<AttributeBlock> for BTreeMap<AttributeKey, i64> {
    fn from(block: AttributeBlock) -> Self {
        block.values
    }
}

impl FromStr for AttributeBlock {
    type Err = CoreError;

    /// Parse comma-separated `key=value` assignments, e.g. `str=3, agi=-1`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let mut pairs = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, value) = part
                .split_once('=')
                .ok_or_else(|| CoreError::InvalidModifier(part.to_string()))?;
            let value: i32 = value
                .trim()
                .parse()
                .map_err(|_| CoreError::InvalidModifier(part.to_string()))?;
            pairs.push((name.trim().to_string(), value));
        }
        Self::from_named(pairs)
    }
}

impl fmt::Display for AttributeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k} {v}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}

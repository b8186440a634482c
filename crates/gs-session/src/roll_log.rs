//! Roll log storage, rendering, and export.
//!
//! A [`RollLog`] is an append-only, insertion-ordered list of dice outcomes.
//! [`SharedRollLog`] wraps one behind a lock so several event handlers can
//! append to the same log while a renderer takes snapshots.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// One dice-roll outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLogEntry {
    /// Name of the check, if any (e.g. "Attack").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Formatted result supplied by the dice engine.
    pub output: String,
}

impl RollLogEntry {
    /// An unlabeled entry.
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            label: None,
            output: output.into(),
        }
    }

    /// An entry with a label.
    pub fn labeled(label: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            output: output.into(),
        }
    }
}

/// Renders `label: output`, or just `output` when there is no label.
/// An empty label counts as no label.
impl fmt::Display for RollLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => write!(f, "{label}: {}", self.output),
            _ => write!(f, "{}", self.output),
        }
    }
}

/// An append-only sequence of roll outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollLog {
    entries: Vec<RollLogEntry>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a log from a JSON array of entries.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the log as a JSON array of entries.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append an entry to the end of the log.
    pub fn append(&mut self, entry: RollLogEntry) {
        self.entries.push(entry);
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[RollLogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Each entry rendered as a display line.
    pub fn render(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Roll Log\n\n");
        for entry in &self.entries {
            match entry.label.as_deref() {
                Some(label) if !label.is_empty() => {
                    out.push_str(&format!("- **{label}**: {}\n", entry.output));
                }
                _ => out.push_str(&format!("- {}\n", entry.output)),
            }
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Roll Log\n========\n\n");
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{:>3}. {entry}\n", i + 1));
        }
        out
    }
}

impl FromIterator<RollLogEntry> for RollLog {
    fn from_iter<I: IntoIterator<Item = RollLogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A cloneable, thread-safe handle to a [`RollLog`].
///
/// Every operation takes the lock for its whole duration, so appends are
/// applied in a single global order and [`entries`](Self::entries) always
/// returns whole entries.
#[derive(Debug, Clone, Default)]
pub struct SharedRollLog {
    inner: Arc<RwLock<RollLog>>,
}

impl SharedRollLog {
    /// Create a handle to a new, empty log.
    pub fn new() -> Self {
        Self::default()
    }

    // The log only holds plain data, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, RollLog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RollLog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry to the end of the log.
    pub fn append(&self, entry: RollLogEntry) {
        self.write().append(entry);
    }

    /// A copy of all entries in insertion order.
    pub fn entries(&self) -> Vec<RollLogEntry> {
        self.read().entries().to_vec()
    }

    /// A copy of the whole log.
    pub fn snapshot(&self) -> RollLog {
        self.read().clone()
    }

    /// Each entry rendered as a display line.
    pub fn render(&self) -> Vec<String> {
        self.read().render()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.write().clear();
        tracing::debug!("Cleared roll log");
    }
}

impl From<RollLog> for SharedRollLog {
    fn from(log: RollLog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(log)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn empty_log() {
        let log = RollLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.render().is_empty());
    }

    #[test]
    fn append_adds_to_end() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::new("3"));
        let entry = RollLogEntry::labeled("Defend", "12");
        log.append(entry.clone());
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries().last(), Some(&entry));
    }

    #[test]
    fn render_label_and_output() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::labeled("Attack", "14"));
        log.append(RollLogEntry::new("Miss"));
        assert_eq!(log.render(), ["Attack: 14", "Miss"]);
    }

    #[test]
    fn empty_label_renders_output_only() {
        let entry = RollLogEntry::labeled("", "7");
        insta::assert_snapshot!(entry.to_string(), @"7");
    }

    #[test]
    fn empty_output_is_accepted() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::labeled("Omen", ""));
        assert_eq!(log.render(), ["Omen: "]);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let log: RollLog = ["6", "6", "1"].into_iter().map(RollLogEntry::new).collect();
        assert_eq!(log.render(), ["6", "6", "1"]);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::new("2"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn export_markdown() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::labeled("Attack", "14"));
        log.append(RollLogEntry::new("Miss"));
        let md = log.export_markdown();
        assert!(md.starts_with("# Roll Log\n"));
        assert!(md.contains("- **Attack**: 14\n"));
        assert!(md.contains("- Miss\n"));
    }

    #[test]
    fn export_text() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::labeled("Attack", "14"));
        log.append(RollLogEntry::new("Miss"));
        let txt = log.export_text();
        assert!(txt.contains("  1. Attack: 14\n"));
        assert!(txt.contains("  2. Miss\n"));
    }

    #[test]
    fn json_roundtrip() {
        let mut log = RollLog::new();
        log.append(RollLogEntry::labeled("Morale", "Holds"));
        log.append(RollLogEntry::new("d20: 4"));
        let json = log.to_json().unwrap();
        assert_eq!(RollLog::from_json(&json).unwrap(), log);
    }

    #[test]
    fn from_json_reads_plain_array() {
        let log =
            RollLog::from_json(r#"[{"label": "Attack", "output": "14"}, {"output": "Miss"}]"#)
                .unwrap();
        assert_eq!(log.render(), ["Attack: 14", "Miss"]);
    }

    #[test]
    fn from_json_rejects_missing_output() {
        assert!(RollLog::from_json(r#"[{"label": "Attack"}]"#).is_err());
    }

    #[test]
    fn shared_append_then_entries() {
        let shared = SharedRollLog::new();
        shared.append(RollLogEntry::new("Miss"));
        let before = shared.len();
        let entry = RollLogEntry::labeled("Attack", "14");
        shared.append(entry.clone());

        let entries = shared.entries();
        assert_eq!(entries.len(), before + 1);
        assert_eq!(entries.last(), Some(&entry));
    }

    #[test]
    fn shared_snapshot_is_detached() {
        let shared = SharedRollLog::new();
        shared.append(RollLogEntry::new("1"));
        let snapshot = shared.entries();
        shared.append(RollLogEntry::new("2"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn shared_clones_see_same_log() {
        let a = SharedRollLog::new();
        let b = a.clone();
        a.append(RollLogEntry::new("5"));
        assert_eq!(b.render(), ["5"]);
        b.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let shared = SharedRollLog::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let log = shared.clone();
                thread::spawn(move || {
                    for i in 0..100 {
                        log.append(RollLogEntry::labeled(format!("t{t}"), i.to_string()));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let entries = shared.entries();
        assert_eq!(entries.len(), 800);
        for t in 0..8 {
            let label = format!("t{t}");
            let outputs: Vec<u32> = entries
                .iter()
                .filter(|e| e.label.as_deref() == Some(label.as_str()))
                .map(|e| e.output.parse().unwrap())
                .collect();
            assert_eq!(outputs, (0..100).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn snapshots_during_appends_are_consistent() {
        const WRITERS: usize = 4;
        const PER_WRITER: u32 = 200;
        let total = WRITERS * PER_WRITER as usize;

        let shared = SharedRollLog::new();
        let writers: Vec<_> = (0..WRITERS)
            .map(|t| {
                let log = shared.clone();
                thread::spawn(move || {
                    for i in 0..PER_WRITER {
                        log.append(RollLogEntry::labeled(format!("w{t}"), i.to_string()));
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..3)
            .map(|_| {
                let log = shared.clone();
                thread::spawn(move || {
                    let mut previous: Vec<RollLogEntry> = Vec::new();
                    loop {
                        let snapshot = log.entries();
                        assert!(snapshot.len() >= previous.len());
                        assert_eq!(&snapshot[..previous.len()], previous.as_slice());
                        for t in 0..WRITERS {
                            let label = format!("w{t}");
                            let outputs: Vec<u32> = snapshot
                                .iter()
                                .filter(|e| e.label.as_deref() == Some(label.as_str()))
                                .map(|e| e.output.parse().unwrap())
                                .collect();
                            let expected: Vec<u32> = (0..outputs.len() as u32).collect();
                            assert_eq!(outputs, expected);
                        }
                        if snapshot.len() == total {
                            break;
                        }
                        previous = snapshot;
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(shared.len(), total);
    }

    #[test]
    fn shared_from_existing_log() {
        let log: RollLog = [RollLogEntry::new("9")].into_iter().collect();
        let shared = SharedRollLog::from(log.clone());
        assert_eq!(shared.snapshot(), log);
    }
}

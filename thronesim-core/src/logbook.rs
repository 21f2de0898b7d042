//! The kingdom's chronicle: a bounded event log carried inside the Ledger.
//!
//! Every transition narrates itself here, including refusals, so a driver
//! can print what happened without inspecting state diffs. The log is part
//! of the saved state and of the checksum.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Entries retained before the oldest are evicted.
pub const LOG_CAPACITY: usize = 600;

/// Valence of a chronicle entry, used by presentation layers for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogTag {
    Event,
    Good,
    Warn,
    Danger,
    System,
    Merchant,
    Muted,
}

/// One line of the chronicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub tag: LogTag,
    pub text: String,
}

/// Bounded FIFO chronicle. Ids increase monotonically for the whole run,
/// surviving eviction, so ordering is recoverable even from a tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogBook {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl LogBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, evicting the oldest past capacity.
    pub fn push(&mut self, tag: LogTag, text: impl Into<String>) {
        let entry = LogEntry {
            id: self.next_id,
            tag,
            text: text.into(),
        };
        self.next_id += 1;
        self.entries.push_back(entry);
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// The `n` most recent entries, oldest of them first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    /// Id the next entry will get. Doubles as a count of everything ever
    /// logged.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

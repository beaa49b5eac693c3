//! Draw history ledger
//!
//! Most recent draw first, capped at 10 entries. Persisted as a JSON list
//! through whatever store the ledger is built with.

use serde::{Deserialize, Serialize};

use crate::draw::DrawResult;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// Maximum number of history entries to keep
pub const MAX_HISTORY: usize = 10;

/// Storage key for the serialized ledger
pub const HISTORY_KEY: &str = "lucky_lots_history";

/// One completed draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    /// Game name or "Custom Pick"
    pub label: String,
    pub primary: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<i32>>,
    /// Unix timestamp (ms)
    pub created_at: f64,
}

impl HistoryEntry {
    pub fn new(id: u64, label: impl Into<String>, result: &DrawResult, created_at: f64) -> Self {
        Self {
            id,
            label: label.into(),
            primary: result.primary.clone(),
            secondary: result.secondary.clone(),
            created_at,
        }
    }

    /// The numbers this entry recorded
    pub fn result(&self) -> DrawResult {
        DrawResult {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
        }
    }
}

/// Recency-ordered, capacity-bounded list of past draws
#[derive(Debug)]
pub struct HistoryLedger<S: KeyValueStore> {
    entries: Vec<HistoryEntry>,
    next_id: u64,
    store: S,
}

impl<S: KeyValueStore> HistoryLedger<S> {
    /// Load the ledger from `store`. Missing or corrupt data starts fresh.
    pub fn load(mut store: S) -> Self {
        let mut entries: Vec<HistoryEntry> = match load_json(&store, HISTORY_KEY) {
            Some(entries) => entries,
            None => {
                log::info!("No draw history found, starting fresh");
                Vec::new()
            }
        };

        // An id at u64::MAX leaves no room for the next one
        if entries.iter().any(|e| e.id.checked_add(1).is_none()) {
            log::warn!("Discarding stored history with an exhausted entry id");
            entries.clear();
            if let Err(e) = store.remove(HISTORY_KEY) {
                log::warn!("Failed to remove stored history: {}", e);
            }
        }

        entries.truncate(MAX_HISTORY);
        log::info!("Loaded {} history entries", entries.len());

        let next_id = entries.iter().map(|e| e.id + 1).max().unwrap_or(1);
        Self {
            entries,
            next_id,
            store,
        }
    }

    /// Insert an entry at the head, evicting the oldest past capacity
    pub fn append(&mut self, entry: HistoryEntry) {
        self.next_id = self.next_id.max(entry.id.saturating_add(1));
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
        self.persist();
    }

    /// Record a finished draw under the next id
    pub fn record(
        &mut self,
        label: impl Into<String>,
        result: &DrawResult,
        created_at: f64,
    ) -> &HistoryEntry {
        let entry = HistoryEntry::new(self.next_id, label, result, created_at);
        self.append(entry);
        &self.entries[0]
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        log::info!("Draw history cleared");
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        match save_json(&mut self.store, HISTORY_KEY, &self.entries) {
            Ok(()) => log::debug!("History saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Failed to save history: {}", e),
        }
    }
}

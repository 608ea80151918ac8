//! # Record Store
//!
//! The journal keeps its entries in memory only. A [`Ledger`] is seeded once when the
//! report opens and lives as long as the view that owns it; edits and deletions are gone
//! when the process ends.
//!
//! ## Ownership
//!
//! The ledger has exactly one writer: the [`crate::view::ReportView`] that owns it.
//! Everything else gets a shared `&Ledger`. The mutating methods are `pub(crate)` so no
//! client can bypass the reducer and its capability checks.
//!
//! ## Identity
//!
//! Each entry gets a [`Uuid`] when it is created (seed time for the built-in data).
//! Ids never change, so a row picked from a filtered, sorted page can be found again
//! after the view has moved on.
//!
//! ## Implementations
//!
//! - [`seed::sample_entries`]: the ten-line sample journal the report starts with.

use crate::error::{JournalError, Result};
use crate::model::JournalEntry;
use uuid::Uuid;

pub mod seed;

/// Ordered, in-memory sequence of journal entries.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<JournalEntry>,
}

impl Ledger {
    pub fn new(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }

    /// A ledger holding the built-in sample journal.
    pub fn seeded() -> Self {
        Self::new(seed::sample_entries())
    }

    /// All entries in store order.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Position of the entry in store order.
    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == *id)
    }

    /// Overwrites the entry with `id` in place, keeping its position and id.
    pub(crate) fn replace(&mut self, id: &Uuid, mut entry: JournalEntry) -> Result<&JournalEntry> {
        let slot = self.position(id).ok_or(JournalError::EntryNotFound(*id))?;
        entry.id = *id;
        self.entries[slot] = entry;
        Ok(&self.entries[slot])
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> Result<JournalEntry> {
        let slot = self.position(id).ok_or(JournalError::EntryNotFound(*id))?;
        Ok(self.entries.remove(slot))
    }
}

//! # View-State Reducer
//!
//! [`ReportView`] owns the ledger together with everything the table shows about it:
//! filter text, sort column and direction, current page, and the edit in progress.
//! Every render derives the visible rows fresh:
//!
//! ```text
//! ledger ──filter──▶ matched ──sort──▶ ordered ──paginate──▶ window
//! ```
//!
//! ## State Transitions
//!
//! - [`ReportView::set_filter`] jumps back to page 1.
//! - [`ReportView::sort_by`] keeps the current page.
//! - [`ReportView::change_page`] is not bounds-checked; an out-of-range page is an
//!   empty window, never an error.
//! - Any of the three drops the edit in progress.
//!
//! ## Page-Local Indexes
//!
//! Row-level actions take the row's index within the current window (0-based). The
//! index is resolved to the entry's id when the action starts, and only the id is kept.

use crate::error::{JournalError, Result};
use crate::model::{Field, JournalEntry};
use crate::store::Ledger;
use serde::Serialize;
use tracing::{debug, info, warn};

pub mod edit;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use edit::{EditBuffer, EditSession};
pub use sort::SortState;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A row of the current window with its page-local index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRow {
    pub index: usize,
    pub entry: JournalEntry,
}

/// Snapshot of what the table shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewWindow {
    pub rows: Vec<ViewRow>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Rows matching the filter, across all pages.
    pub matched: usize,
    pub filter_text: String,
    pub sort: SortState,
    pub editing: Option<EditSession>,
}

impl ViewWindow {
    /// The edit buffer to show in place of `row`, if that row is being edited.
    pub fn edit_for(&self, row: &ViewRow) -> Option<&EditBuffer> {
        self.editing
            .as_ref()
            .filter(|session| session.entry_id == row.entry.id)
            .map(|session| &session.buffer)
    }
}

#[derive(Debug, Clone)]
pub struct ReportView {
    ledger: Ledger,
    filter_text: String,
    sort: SortState,
    current_page: usize,
    page_size: usize,
    editing: Option<EditSession>,
}

impl ReportView {
    /// A zero page size is treated as one row per page.
    pub fn new(ledger: Ledger, page_size: usize) -> Self {
        Self {
            ledger,
            filter_text: String::new(),
            sort: SortState::default(),
            current_page: 1,
            page_size: page_size.max(1),
            editing: None,
        }
    }

    /// A view over the sample journal.
    pub fn seeded(page_size: usize) -> Self {
        Self::new(Ledger::seeded(), page_size)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.current_page = 1;
        self.drop_edit("filter changed");
        debug!(filter = %self.filter_text, "filter set");
    }

    pub fn filtered_rows(&self) -> Vec<&JournalEntry> {
        filter::filter_entries(self.ledger.entries(), &self.filter_text)
    }

    /// Filtered rows in the current sort order, across all pages.
    pub fn sorted_rows(&self) -> Vec<&JournalEntry> {
        let mut rows = self.filtered_rows();
        sort::sort_entries(&mut rows, self.sort);
        rows
    }

    pub fn sort_by(&mut self, field: Field) {
        self.sort = self.sort.toggled(field);
        self.drop_edit("sort changed");
        debug!(field = %self.sort.field, ascending = self.sort.ascending, "sort set");
    }

    pub fn change_page(&mut self, page: usize) {
        self.current_page = page;
        self.drop_edit("page changed");
        debug!(page, "page set");
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.filtered_rows().len(), self.page_size)
    }

    pub fn window(&self) -> ViewWindow {
        let sorted = self.sorted_rows();
        let rows = paginate::paginate(&sorted, self.current_page, self.page_size)
            .iter()
            .enumerate()
            .map(|(index, entry)| ViewRow {
                index,
                entry: (*entry).clone(),
            })
            .collect();

        ViewWindow {
            rows,
            page: self.current_page,
            page_size: self.page_size,
            total_pages: paginate::total_pages(sorted.len(), self.page_size),
            matched: sorted.len(),
            filter_text: self.filter_text.clone(),
            sort: self.sort,
            editing: self.editing.clone(),
        }
    }

    fn row_at(&self, page_index: usize) -> Result<&JournalEntry> {
        let sorted = self.sorted_rows();
        paginate::paginate(&sorted, self.current_page, self.page_size)
            .get(page_index)
            .copied()
            .ok_or(JournalError::RowNotFound(page_index))
    }

    /// Starts editing the row at `page_index`, replacing any edit already open.
    pub fn begin_edit(&mut self, page_index: usize) -> Result<&EditSession> {
        let entry = self.row_at(page_index)?;
        let session = EditSession {
            page_index,
            entry_id: entry.id,
            buffer: EditBuffer::from_entry(entry),
        };
        debug!(page_index, id = %session.entry_id, "edit started");
        Ok(&*self.editing.insert(session))
    }

    pub fn update_edit_buffer(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let session = self.editing.as_mut().ok_or(JournalError::NoEditInProgress)?;
        session.buffer.set(field, value);
        Ok(())
    }

    /// Writes the buffer over the entry being edited.
    ///
    /// A buffer that fails validation leaves the edit open so it can be corrected.
    pub fn commit_edit(&mut self) -> Result<JournalEntry> {
        let session = self.editing.as_ref().ok_or(JournalError::NoEditInProgress)?;
        let id = session.entry_id;
        let entry = session.buffer.to_entry(id)?;
        if entry.is_double_sided() {
            warn!(%id, "entry saved with both debit and credit");
        }

        let stored = self.ledger.replace(&id, entry)?.clone();
        self.editing = None;
        info!(%id, "row updated");
        Ok(stored)
    }

    pub fn cancel_edit(&mut self) -> Option<EditSession> {
        self.editing.take()
    }

    pub fn delete_row(&mut self, page_index: usize) -> Result<JournalEntry> {
        let id = self.row_at(page_index)?.id;
        let removed = self.ledger.remove(&id)?;
        if self.editing.as_ref().is_some_and(|s| s.entry_id == id) {
            self.editing = None;
        }
        info!(%id, "row deleted");
        Ok(removed)
    }

    fn drop_edit(&mut self, reason: &str) {
        if self.editing.take().is_some() {
            debug!(reason, "edit discarded");
        }
    }
}

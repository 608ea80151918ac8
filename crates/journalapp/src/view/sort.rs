use crate::model::{Field, JournalEntry};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub field: Field,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: Field::Date,
            ascending: true,
        }
    }
}

impl SortState {
    /// Clicking the sorted column flips direction; any other column starts ascending.
    pub fn toggled(self, field: Field) -> Self {
        if field == self.field {
            Self {
                field,
                ascending: !self.ascending,
            }
        } else {
            Self {
                field,
                ascending: true,
            }
        }
    }

    /// Header marker for `field`, empty unless it is the sorted column.
    pub fn indicator(self, field: Field) -> &'static str {
        match (field == self.field, self.ascending) {
            (false, _) => "",
            (true, true) => "▲",
            (true, false) => "▼",
        }
    }
}

/// Ascending comparison of two entries on `field`.
///
/// Two present amounts compare numerically. Everything else compares the rendered
/// text, so a blank amount sorts before any number.
pub fn compare(field: Field, a: &JournalEntry, b: &JournalEntry) -> Ordering {
    match (a.amount(field), b.amount(field)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.text(field).cmp(&b.text(field)),
    }
}

/// Stable sort; equal keys keep their incoming order in both directions.
pub fn sort_entries(rows: &mut [&JournalEntry], sort: SortState) {
    rows.sort_by(|a, b| {
        let ordering = compare(sort.field, a, b);
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

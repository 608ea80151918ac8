use crate::error::Result;
use crate::model::{Amount, Field, JournalEntry};
use serde::Serialize;
use uuid::Uuid;

/// Working copy of a row being edited, one raw string per column.
///
/// Values are kept exactly as typed; amounts are only parsed when the edit is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditBuffer {
    pub date: String,
    pub account: String,
    pub description: String,
    pub debit: String,
    pub credit: String,
}

impl EditBuffer {
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            date: entry.text(Field::Date),
            account: entry.text(Field::Account),
            description: entry.text(Field::Description),
            debit: entry.text(Field::Debit),
            credit: entry.text(Field::Credit),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Account => &self.account,
            Field::Description => &self.description,
            Field::Debit => &self.debit,
            Field::Credit => &self.credit,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Account => &mut self.account,
            Field::Description => &mut self.description,
            Field::Debit => &mut self.debit,
            Field::Credit => &mut self.credit,
        };
        *slot = value.into();
    }

    /// Builds the entry this buffer describes, validating both amounts.
    pub fn to_entry(&self, id: Uuid) -> Result<JournalEntry> {
        Ok(JournalEntry {
            id,
            date: self.date.clone(),
            account: self.account.clone(),
            description: self.description.clone(),
            debit: Amount::parse_optional(Field::Debit, &self.debit)?,
            credit: Amount::parse_optional(Field::Credit, &self.credit)?,
        })
    }
}

/// An edit in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditSession {
    /// Page-local index of the row when the edit began.
    pub page_index: usize,
    /// The entry the edit will overwrite.
    pub entry_id: Uuid,
    pub buffer: EditBuffer,
}

use crate::model::Field;
use crate::session::{Capability, Role};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Role {role} is not allowed to {capability}")]
    Forbidden { role: Role, capability: Capability },

    #[error("Row {0} is not on the current page")]
    RowNotFound(usize),

    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("No edit in progress")]
    NoEditInProgress,

    #[error("Invalid {field} amount: {value:?}")]
    InvalidAmount { field: Field, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, JournalError>;

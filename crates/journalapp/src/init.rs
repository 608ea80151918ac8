//! # Data Directory and Context Setup
//!
//! Everything the journal keeps between runs lives in one data directory:
//!
//! ```text
//! <data_dir>/
//!   session.json   # role tag and login timestamp
//!   journal.toml   # optional configuration
//! ```
//!
//! ## Resolution Order
//!
//! 1. `data_override` (the CLI's `--data` flag)
//! 2. The `JOURNAL_DATA` environment variable (primarily for testing)
//! 3. The OS data directory from [`directories::ProjectDirs`]
//!
//! The ledger itself is not stored: each process starts from the sample journal.

use crate::api::JournalApi;
use crate::config::JournalConfig;
use crate::error::{JournalError, Result};
use crate::session::fs::FileSessionStore;
use crate::view::ReportView;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_ENV: &str = "JOURNAL_DATA";

pub struct JournalContext {
    pub api: JournalApi<FileSessionStore>,
    pub config: JournalConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory, see the module docs for the order.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "journal", "journal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JournalError::Store("Could not determine data directory".to_string()))
}

/// Builds the API over a file-backed session and the seeded ledger.
pub fn initialize(data_override: Option<PathBuf>) -> Result<JournalContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = JournalConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), page_size = config.page_size(), "initialized");

    let store = FileSessionStore::in_dir(&data_dir);
    let view = ReportView::seeded(config.page_size());
    let api = JournalApi::with_view(view, store, config.clone());

    Ok(JournalContext {
        api,
        config,
        data_dir,
    })
}

//! # Configuration
//!
//! Journal configuration is loaded with [`confique`], layered from environment
//! variables, a TOML file, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `JOURNAL_PAGE_SIZE`, `JOURNAL_EXPORT_DIR`, `JOURNAL_REPORT_TITLE`.
//! 2. **Config file**: `journal.toml` in the data directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `5` | Rows per page |
//! | `export_dir` | current directory | Where exports are written |
//! | `report_title` | `Journal Report` | Title line of the PDF export |

use crate::error::Result;
use crate::view::DEFAULT_PAGE_SIZE;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "journal.toml";

/// Configuration for the journal report, stored in `journal.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    /// Rows shown per page.
    #[config(default = 5, env = "JOURNAL_PAGE_SIZE")]
    pub page_size: usize,

    /// Directory exports are written to. Defaults to the current directory.
    #[config(env = "JOURNAL_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Title line printed above the table in PDF exports.
    #[config(default = "Journal Report", env = "JOURNAL_REPORT_TITLE")]
    pub report_title: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            export_dir: None,
            report_title: "Journal Report".to_string(),
        }
    }
}

impl JournalConfig {
    /// Loads `journal.toml` from `dir` (if present) under environment overrides.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = JournalConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()?;
        Ok(config)
    }

    /// Page size with zero treated as one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Where exports go, falling back to `cwd`.
    pub fn export_dir(&self, cwd: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}

//! # Commands
//!
//! One module per user action. A command:
//!
//! 1. asks [`crate::session::authorize`] whether the caller's role may do it,
//! 2. calls the view reducer, the session store or an export adapter,
//! 3. returns a [`CmdResult`] with the data to render and the notifications to show.
//!
//! Commands never print. Notifications travel as [`CmdMessage`]s so each client can
//! present them its own way (coloured lines in the terminal, toasts in a browser).
//!
//! ## Modules
//!
//! - [`session`]: login, logout, whoami
//! - [`view`]: show the table, filter, sort, change page
//! - [`edit`]: begin, update, commit and cancel a row edit
//! - [`delete`]: remove a row
//! - [`export`]: write the spreadsheet or PDF export

use crate::model::JournalEntry;
use crate::session::Role;
use crate::view::ViewWindow;
use serde::Serialize;
use std::path::PathBuf;

pub mod delete;
pub mod edit;
pub mod export;
pub mod session;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// The table as it should be drawn after the command.
    pub window: Option<ViewWindow>,
    /// Entries the command changed or removed.
    pub affected_entries: Vec<JournalEntry>,
    /// Files the command wrote.
    pub artifacts: Vec<PathBuf>,
    /// Role of the session the command ran under.
    pub role: Option<Role>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_window(mut self, window: ViewWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_affected_entries(mut self, entries: Vec<JournalEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_artifacts(mut self, artifacts: Vec<PathBuf>) -> Self {
        self.artifacts = artifacts;
        self
    }
}

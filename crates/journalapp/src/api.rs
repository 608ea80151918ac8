//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every journal operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the report view (and with it the ledger) and the session store
//! - **Resolves the role** from session storage on every call, so a login or logout made
//!   elsewhere takes effect immediately
//! - **Dispatches** to the matching command and returns `Result<CmdResult>`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `view/`
//! - **Permission rules**: Commands consult `session::authorize`
//! - **Presentation**: Returns data structures, not strings
//!
//! ## Generic Over SessionStore
//!
//! `JournalApi<S: SessionStore>` is generic over where the session lives:
//! - Production: `JournalApi<FileSessionStore>`
//! - Testing: `JournalApi<MemorySessionStore>`

use crate::commands;
use crate::config::JournalConfig;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::model::Field;
use crate::session::{self, Role, SessionStore};
use crate::view::ReportView;
use std::path::Path;

/// The main API facade for journal operations.
pub struct JournalApi<S: SessionStore> {
    view: ReportView,
    session: S,
    config: JournalConfig,
}

impl<S: SessionStore> JournalApi<S> {
    /// A fresh report over the sample journal.
    pub fn new(session: S, config: JournalConfig) -> Self {
        let view = ReportView::seeded(config.page_size());
        Self::with_view(view, session, config)
    }

    pub fn with_view(view: ReportView, session: S, config: JournalConfig) -> Self {
        Self {
            view,
            session,
            config,
        }
    }

    pub fn role(&self) -> Result<Role> {
        session::current_role(&self.session)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<commands::CmdResult> {
        commands::session::login(&mut self.session, username, password)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::session::logout(&mut self.session)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        commands::session::whoami(&self.session)
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::view::show(&self.view, self.role()?)
    }

    pub fn set_filter(&mut self, text: &str) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::view::filter(&mut self.view, role, text)
    }

    pub fn sort_by(&mut self, field: Field) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::view::sort(&mut self.view, role, field)
    }

    pub fn change_page(&mut self, page: usize) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::view::page(&mut self.view, role, page)
    }

    pub fn begin_edit(&mut self, page_index: usize) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::edit::begin(&mut self.view, role, page_index)
    }

    pub fn update_edit(&mut self, field: Field, value: &str) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::edit::update(&mut self.view, role, field, value)
    }

    pub fn commit_edit(&mut self) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::edit::commit(&mut self.view, role)
    }

    pub fn cancel_edit(&mut self) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::edit::cancel(&mut self.view, role)
    }

    pub fn delete_row(&mut self, page_index: usize) -> Result<commands::CmdResult> {
        let role = self.role()?;
        commands::delete::run(&mut self.view, role, page_index)
    }

    /// Writes an export of the full ledger into `dir`.
    pub fn export(&self, format: ExportFormat, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(
            self.view.ledger(),
            self.role()?,
            format,
            dir,
            &self.config.report_title,
        )
    }

    pub fn view(&self) -> &ReportView {
        &self.view
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    pub fn session_store(&self) -> &S {
        &self.session
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

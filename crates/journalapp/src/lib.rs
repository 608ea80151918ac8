//! # Journal Report Architecture
//!
//! Journalapp is a **UI-agnostic journal report library**. The `journal` binary is one
//! client of it; nothing in here knows about terminals, stdout or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/journal)                                    │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Reads the session role on every call                     │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Capability check via `session::authorize`                │
//! │  - Calls the reducer or an export adapter                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View reducer (view/) owning the record store (store/)      │
//! │  Session storage (session/), export adapters (export/)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rows, Pages and Identity
//!
//! Users address rows by their position on the current page ("row 2"). That position
//! is only meaningful for the window it was read from, so the reducer resolves it to
//! the entry's stable [`uuid::Uuid`] at the moment the action starts. Edits and deletes
//! then target that id, which keeps them correct even if the filter or sort changes
//! in between.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`view`]: Filter, sort, pagination and edit state
//! - [`store`]: The seeded, in-memory entry store
//! - [`session`]: Roles, capabilities, credential check and session storage
//! - [`export`]: Spreadsheet and PDF writers
//! - [`model`]: Core data types (`JournalEntry`, `Amount`, `Field`)
//! - [`config`]: Configuration loading
//! - [`init`]: Directory resolution and API construction
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
pub mod view;

//! # CLI Behavior
//!
//! This is **one possible UI client** for journalapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`journal`)
//!
//! Running `journal` with no arguments shows the first page when a session is active,
//! and the demo logins otherwise.
//!
//! ## One-Shot vs Shell
//!
//! One-shot subcommands start from a fresh report each time; only the login is kept
//! (in `session.json` under the data directory). `journal shell` keeps a single report
//! alive across lines, which is what editing needs.
//!
//! ## Module Structure
//!
//! - `commands`: Subcommand dispatch and logging setup
//! - `shell`: The line-oriented session
//! - `render`: Table, pager, hints and messages
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;
mod shell;

pub use commands::run;

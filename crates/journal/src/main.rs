//! # Journal CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/journalapp/`: UI-agnostic library (ledger, view reducer, sessions, exports)
//! - `crates/journal/`: This CLI tool, depends on `journalapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/journal/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + logging setup (commands.rs)                   │
//! │  - Interactive session (shell.rs)                           │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/journalapp/src/api.rs)                   │
//! │  - Reads the session role, dispatches to commands           │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for
//! **all** user-facing concerns: argument parsing, context initialization, dispatch,
//! error reporting and rendering.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests beside each module plus scenario tests over
//!   `JournalApi<MemorySessionStore>`.
//! - **CLI**: parsing and rendering unit tests here; end-to-end runs of the binary in
//!   `tests/` with `assert_cmd`, isolated through `JOURNAL_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

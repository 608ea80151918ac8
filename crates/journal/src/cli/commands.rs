//! # CLI Layer
//!
//! The CLI layer is the **only** place in the workspace that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, build the API
//! 3. **Dispatch**: Route each subcommand to a handler that calls the API
//! 4. **Output Formatting**: Hand results to `render.rs`
//!
//! Only the session survives between invocations. `journal show --filter Cash` filters
//! within that one run; use `journal shell` to keep filter, sort, page and edits alive.

use super::render::{self, HintStyle};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use journalapp::api::{CmdResult, JournalApi};
use journalapp::error::Result;
use journalapp::export::ExportFormat;
use journalapp::init::{initialize, JournalContext};
use journalapp::model::Field;
use journalapp::session::fs::FileSessionStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(command = ?cli.command, "parsed arguments");

    let mut ctx = initialize(cli.data.clone())?;

    match cli.command {
        Some(Commands::Login { username, password }) => {
            let result = ctx.api.login(&username, &password)?;
            render::print_messages(&result.messages);
        }
        Some(Commands::Logout) => {
            let result = ctx.api.logout()?;
            render::print_messages(&result.messages);
        }
        Some(Commands::Whoami) => {
            let result = ctx.api.whoami()?;
            render::print_messages(&result.messages);
        }
        Some(Commands::Show {
            filter,
            sort,
            page,
            json,
        }) => handle_show(&mut ctx, filter, &sort, page, json)?,
        Some(Commands::Export { format, out }) => handle_export(&ctx, format, out)?,
        Some(Commands::Shell) => shell::run(&mut ctx)?,
        Some(Commands::Config) => handle_config(&ctx)?,
        None => handle_naked(&mut ctx)?,
    }
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` default.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_show(
    ctx: &mut JournalContext,
    filter: Option<String>,
    sort: &[Field],
    page: Option<usize>,
    json: bool,
) -> Result<()> {
    let api = &mut ctx.api;
    if let Some(text) = filter {
        api.set_filter(&text)?;
    }
    for field in sort {
        api.sort_by(*field)?;
    }
    if let Some(page) = page {
        api.change_page(page)?;
    }

    let result = api.show()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_report(api, &result, HintStyle::Cli);
    Ok(())
}

fn handle_export(ctx: &JournalContext, format: ExportFormat, out: Option<PathBuf>) -> Result<()> {
    let dir = match out {
        Some(dir) => dir,
        None => ctx.config.export_dir(&std::env::current_dir()?),
    };
    let result = ctx.api.export(format, &dir)?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &JournalContext) -> Result<()> {
    println!("data_dir = {:?}", ctx.data_dir.display().to_string());
    if let serde_json::Value::Object(values) = serde_json::to_value(&ctx.config)? {
        for (key, value) in &values {
            match value {
                serde_json::Value::Null => println!("{} = (unset)", key),
                other => println!("{} = {}", key, other),
            }
        }
    }
    Ok(())
}

/// `journal` alone: the table when logged in, the login hint otherwise.
fn handle_naked(ctx: &mut JournalContext) -> Result<()> {
    if ctx.api.role()?.is_authenticated() {
        return handle_show(ctx, None, &[], None, false);
    }
    let result = ctx.api.whoami()?;
    render::print_messages(&result.messages);
    Ok(())
}

pub(super) fn print_report(
    api: &JournalApi<FileSessionStore>,
    result: &CmdResult,
    hints: HintStyle,
) {
    if let (Some(window), Some(role)) = (&result.window, result.role) {
        print!(
            "{}",
            render::render_report(&api.config().report_title, window, role, hints)
        );
    }
    render::print_messages(&result.messages);
}

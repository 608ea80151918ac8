//! `journal shell`: one report session over stdin.
//!
//! Each line is parsed with the same clap machinery as the top-level CLI. Errors are
//! printed and the loop continues; only `quit`, `exit` or end of input stop it.
//! Rows are numbered from 1 on screen and converted to page-local indexes here.
//! Free text (`filter`, `set`) is taken from the raw line so inner spacing survives.

use super::commands::print_report;
use super::render::{self, HintStyle};
use super::setup::{ShellCommand, ShellLine, SHELL_HELP};
use clap::Parser;
use journalapp::api::CmdResult;
use journalapp::error::{JournalError, Result};
use journalapp::init::JournalContext;
use std::io::{self, BufRead, IsTerminal, Write};
use std::num::NonZeroUsize;

const PROMPT: &str = "journal> ";

enum Flow {
    Continue,
    Quit,
}

pub fn run(ctx: &mut JournalContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let greeting = if ctx.api.role()?.is_authenticated() {
        ctx.api.show()?
    } else {
        ctx.api.whoami()?
    };
    print_result(ctx, &greeting);

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                eprintln!("{}", e.render().to_string().trim_end());
                continue;
            }
        };

        match execute(ctx, &line, command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("Error: {}", describe(&e)),
        }
    }
    Ok(())
}

fn execute(ctx: &mut JournalContext, line: &str, command: ShellCommand) -> Result<Flow> {
    let api = &mut ctx.api;
    let result = match command {
        ShellCommand::Show => api.show()?,
        ShellCommand::Filter { text } => api.set_filter(free_text(line, 1, &text))?,
        ShellCommand::Sort { field } => api.sort_by(field)?,
        ShellCommand::Page { page } => api.change_page(page)?,
        ShellCommand::Edit { row } => api.begin_edit(page_index(row))?,
        ShellCommand::Set { field, value } => api.update_edit(field, free_text(line, 2, &value))?,
        ShellCommand::Save => api.commit_edit()?,
        ShellCommand::Cancel => api.cancel_edit()?,
        ShellCommand::Delete { row } => api.delete_row(page_index(row))?,
        ShellCommand::Export { format } => {
            let dir = ctx.config.export_dir(&std::env::current_dir()?);
            api.export(format, &dir)?
        }
        ShellCommand::Login { username, password } => {
            let result = api.login(&username, &password)?;
            render::print_messages(&result.messages);
            api.show()?
        }
        ShellCommand::Logout => api.logout()?,
        ShellCommand::Whoami => api.whoami()?,
        ShellCommand::Help => {
            print!("{}", SHELL_HELP);
            return Ok(Flow::Continue);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    };
    print_result(ctx, &result);
    Ok(Flow::Continue)
}

fn print_result(ctx: &JournalContext, result: &CmdResult) {
    if result.window.is_some() {
        print_report(&ctx.api, result, HintStyle::Shell);
    } else {
        render::print_messages(&result.messages);
    }
}

/// The raw line after its first `skip` words, or "" when clap saw no text there.
fn free_text<'a>(line: &'a str, skip: usize, parsed: &[String]) -> &'a str {
    if parsed.is_empty() {
        return "";
    }
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

fn page_index(row: NonZeroUsize) -> usize {
    row.get() - 1
}

/// Error text with row numbers as the user typed them.
fn describe(error: &JournalError) -> String {
    match error {
        JournalError::RowNotFound(index) => {
            format!("Row {} is not on the current page", index + 1)
        }
        other => other.to_string(),
    }
}

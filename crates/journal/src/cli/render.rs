//! Terminal rendering for command results.
//!
//! Everything here returns strings; printing happens in `commands.rs` and `shell.rs`.
//! Widths are measured with `unicode-width` so accented descriptions and the sort
//! arrows line up.

use colored::Colorize;
use journalapp::api::{CmdMessage, MessageLevel};
use journalapp::model::Field;
use journalapp::session::{Capability, Role};
use journalapp::view::{ViewRow, ViewWindow};
use unicode_width::UnicodeWidthStr;

const INDEX_HEADER: &str = "#";
const ACTIONS_HEADER: &str = "Actions";
const ROW_ACTIONS: &str = "edit / delete";
const EDITING_ACTIONS: &str = "save / cancel";
const GAP: &str = "  ";

/// Where the hints point the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintStyle {
    Cli,
    Shell,
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Title, table, pager and hints for one window.
pub fn render_report(title: &str, window: &ViewWindow, role: Role, hints: HintStyle) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", title.bold(), format!("({})", role).dimmed()));
    if !window.filter_text.is_empty() {
        out.push_str(&format!(
            "{}\n",
            format!("Filter: \"{}\" ({} matching)", window.filter_text, window.matched).dimmed()
        ));
    }
    out.push('\n');
    out.push_str(&render_table(window, role.can(Capability::EditRows)));
    out.push('\n');
    out.push_str(&render_pager(window));
    out.push_str(&render_hints(role, hints));
    out
}

pub fn render_table(window: &ViewWindow, show_actions: bool) -> String {
    if window.rows.is_empty() {
        return format!("{}\n", "No entries to show.".dimmed());
    }

    let mut headers: Vec<String> = vec![INDEX_HEADER.to_string()];
    headers.extend(Field::ALL.iter().map(|field| {
        format!("{}{}", field.label(), window.sort.indicator(*field))
    }));
    if show_actions {
        headers.push(ACTIONS_HEADER.to_string());
    }

    let rows: Vec<(bool, Vec<String>)> = window
        .rows
        .iter()
        .map(|row| row_cells(window, row, show_actions))
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line = join_cells(&headers, &widths);
    out.push_str(&format!("{}\n", header_line.bold()));
    out.push_str(&format!("{}\n", "-".repeat(header_line.width()).dimmed()));
    for (editing, cells) in &rows {
        let line = join_cells(cells, &widths);
        if *editing {
            out.push_str(&format!("{}\n", line.cyan()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

/// Page buttons `1..total_pages`, current one bracketed.
pub fn render_pager(window: &ViewWindow) -> String {
    if window.total_pages == 0 {
        return String::new();
    }
    let buttons: Vec<String> = (1..=window.total_pages)
        .map(|page| {
            if page == window.page {
                format!("[{}]", page).bold().to_string()
            } else {
                page.to_string()
            }
        })
        .collect();
    let mut line = format!("Page {}", buttons.join(" "));
    if window.page > window.total_pages {
        line.push_str(&format!(
            " {}",
            format!("(page {} is past the end)", window.page).dimmed()
        ));
    }
    format!("{}\n", line)
}

pub fn render_hints(role: Role, style: HintStyle) -> String {
    let mut hints = Vec::new();
    if role.can(Capability::Filter) {
        hints.push(match style {
            HintStyle::Cli => "--filter TEXT to narrow rows",
            HintStyle::Shell => "filter TEXT to narrow rows",
        });
    }
    if role.can(Capability::Export) {
        hints.push(match style {
            HintStyle::Cli => "journal export xlsx|pdf",
            HintStyle::Shell => "export xlsx|pdf",
        });
    }
    if role.can(Capability::EditRows) && style == HintStyle::Shell {
        hints.push("edit ROW / delete ROW");
    }
    if hints.is_empty() {
        return String::new();
    }
    format!("{}\n", format!("Hint: {}", hints.join(", ")).dimmed())
}

fn row_cells(window: &ViewWindow, row: &ViewRow, show_actions: bool) -> (bool, Vec<String>) {
    let buffer = window.edit_for(row);
    let mut cells = vec![(row.index + 1).to_string()];
    cells.extend(Field::ALL.iter().map(|field| match buffer {
        Some(buffer) => buffer.get(*field).to_string(),
        None => row.entry.text(*field),
    }));
    if show_actions {
        let actions = if buffer.is_some() {
            EDITING_ACTIONS
        } else {
            ROW_ACTIONS
        };
        cells.push(actions.to_string());
    }
    (buffer.is_some(), cells)
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, width))| {
            let fill = " ".repeat(width.saturating_sub(cell.width()));
            if is_numeric_column(column) {
                format!("{}{}", fill, cell)
            } else {
                format!("{}{}", cell, fill)
            }
        })
        .collect();
    padded.join(GAP).trim_end().to_string()
}

/// Index, Debit and Credit are right-aligned.
fn is_numeric_column(column: usize) -> bool {
    match column {
        0 => true,
        c => Field::ALL.get(c - 1).is_some_and(|field| field.is_amount()),
    }
}

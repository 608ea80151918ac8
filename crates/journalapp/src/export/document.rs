use super::{ExportArtifact, ExportFormat};
use crate::error::Result;
use crate::model::{Field, JournalEntry};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use std::ops::Range;
use tracing::debug;

// A4 portrait, in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;

const TITLE_SIZE: f32 = 16.0;
const TITLE_BLOCK: f32 = 40.0;
const FONT_SIZE: f32 = 10.0;
const ROW_HEIGHT: f32 = 16.0;
const HEADER_OFFSET: f32 = 12.0;

/// Left edge and maximum characters per column, in [`Field::ALL`] order.
const COLUMNS: [(f32, usize); 5] = [
    (40.0, 12),
    (110.0, 14),
    (200.0, 40),
    (430.0, 12),
    (495.0, 12),
];

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// A4 table of every entry with `title` above it on the first page.
///
/// Rows flow onto as many pages as needed and the header repeats on each. The
/// standard Helvetica fonts only cover Latin-1, so characters outside printable
/// ASCII are written as `?`.
pub fn document(entries: &[JournalEntry], title: &str) -> Result<ExportArtifact> {
    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);

    let pages = page_ranges(entries.len());
    let page_ids: Vec<Ref> = (0..pages.len())
        .map(|i| Ref::new(5 + 2 * i as i32))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);

    for (number, (range, page_id)) in pages.iter().zip(&page_ids).enumerate() {
        let content_id = Ref::new(page_id.get() + 1);

        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(tree_id);
        page.contents(content_id);
        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR, regular_id);
            fonts.pair(BOLD, bold_id);
        }
        page.finish();

        let heading = (number == 0).then_some(title);
        let content = page_content(heading, &entries[range.clone()]);
        pdf.stream(content_id, &content.finish());
    }

    pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

    let bytes = pdf.finish();
    debug!(rows = entries.len(), pages = pages.len(), "document built");
    Ok(ExportArtifact {
        format: ExportFormat::Pdf,
        bytes,
    })
}

fn header_y(first_page: bool) -> f32 {
    if first_page {
        PAGE_HEIGHT - MARGIN - TITLE_BLOCK
    } else {
        PAGE_HEIGHT - MARGIN - HEADER_OFFSET
    }
}

fn rows_per_page(first_page: bool) -> usize {
    ((header_y(first_page) - MARGIN) / ROW_HEIGHT).floor() as usize
}

/// Which entries go on which page. There is always at least one page.
fn page_ranges(count: usize) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut capacity = rows_per_page(true);
    loop {
        let end = (start + capacity).min(count);
        ranges.push(start..end);
        if end >= count {
            return ranges;
        }
        start = end;
        capacity = rows_per_page(false);
    }
}

fn page_content(title: Option<&str>, rows: &[JournalEntry]) -> Content {
    let mut content = Content::new();

    if let Some(title) = title {
        let y = PAGE_HEIGHT - MARGIN - TITLE_SIZE;
        write_text(&mut content, BOLD, TITLE_SIZE, MARGIN, y, title, 80);
    }

    let mut y = header_y(title.is_some());
    for (field, (x, width)) in Field::ALL.into_iter().zip(COLUMNS) {
        write_text(&mut content, BOLD, FONT_SIZE, x, y, field.label(), width);
    }
    content.set_line_width(0.5);
    content.move_to(MARGIN, y - 4.0);
    content.line_to(PAGE_WIDTH - MARGIN, y - 4.0);
    content.stroke();

    for entry in rows {
        y -= ROW_HEIGHT;
        for (field, (x, width)) in Field::ALL.into_iter().zip(COLUMNS) {
            write_text(&mut content, REGULAR, FONT_SIZE, x, y, &entry.text(field), width);
        }
    }

    content
}

fn write_text(
    content: &mut Content,
    font: Name,
    size: f32,
    x: f32,
    y: f32,
    text: &str,
    max_chars: usize,
) {
    let text = fit_text(text, max_chars);
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, y);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

/// Printable ASCII only, cut to `max_chars` with a trailing `...`.
fn fit_text(text: &str, max_chars: usize) -> String {
    let ascii: String = text
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '?' })
        .collect();
    if ascii.len() <= max_chars {
        return ascii;
    }
    let keep = max_chars.saturating_sub(3);
    format!("{}...", &ascii[..keep])
}

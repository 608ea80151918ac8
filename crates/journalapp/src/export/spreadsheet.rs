use super::{ExportArtifact, ExportFormat};
use crate::error::Result;
use crate::model::{Field, JournalEntry};
use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

pub const SHEET_NAME: &str = "Journal Report";

/// Column widths in characters, in [`Field::ALL`] order.
const COLUMN_WIDTHS: [f64; 5] = [12.0, 14.0, 28.0, 10.0, 10.0];

/// One sheet: a bold header row, then one row per entry.
///
/// Amounts are written as numbers so the sheet can sum them; absent amounts leave the
/// cell empty.
pub fn spreadsheet(entries: &[JournalEntry]) -> Result<ExportArtifact> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, field) in Field::ALL.into_iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, field.label(), &header)?;
        worksheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
    }

    for (i, entry) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, field) in Field::ALL.into_iter().enumerate() {
            let col = col as u16;
            if let Some(amount) = entry.amount(field) {
                worksheet.write_number(row, col, amount.value())?;
            } else if !field.is_amount() {
                worksheet.write_string(row, col, &entry.text(field))?;
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(rows = entries.len(), size = bytes.len(), "spreadsheet built");
    Ok(ExportArtifact {
        format: ExportFormat::Xlsx,
        bytes,
    })
}

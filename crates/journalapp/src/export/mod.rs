//! # Export Adapters
//!
//! Two stateless writers turn the full ledger (never the filtered page) into a
//! downloadable file:
//!
//! | Format | File | Writer |
//! |--------|------|--------|
//! | [`ExportFormat::Xlsx`] | `journal-report.xlsx` | [`spreadsheet::spreadsheet`] via `rust_xlsxwriter` |
//! | [`ExportFormat::Pdf`] | `journal-report.pdf` | [`document::document`] via `pdf-writer` |
//!
//! Both use the fixed column order of [`crate::model::Field::ALL`]. Writers only build
//! bytes; putting them on disk is [`ExportArtifact::write_to`]'s job.

use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub mod document;
pub mod spreadsheet;

pub use document::document;
pub use spreadsheet::spreadsheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "journal-report.xlsx",
            ExportFormat::Pdf => "journal-report.pdf",
        }
    }

    /// Human name used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Xlsx => f.write_str("xlsx"),
            ExportFormat::Pdf => f.write_str("pdf"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown export format: {0} (expected xlsx or pdf)")]
pub struct ParseFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// A finished export: file name plus contents.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    /// Writes the artifact into `dir`, replacing an earlier export of the same format.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

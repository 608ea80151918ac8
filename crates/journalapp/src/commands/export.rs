use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::{self, ExportArtifact, ExportFormat};
use crate::session::{authorize, Capability, Role};
use crate::store::Ledger;
use std::path::Path;
use tracing::info;

/// Exports the whole ledger, ignoring the current filter and page, into `dir`.
pub fn run(
    ledger: &Ledger,
    role: Role,
    format: ExportFormat,
    dir: &Path,
    title: &str,
) -> Result<CmdResult> {
    authorize(role, Capability::Export)?;

    let artifact = build(ledger, format, title)?;
    let path = artifact.write_to(dir)?;
    info!(%format, path = %path.display(), "exported");

    let mut result = CmdResult::default().with_role(role);
    result.add_message(CmdMessage::success(format!(
        "{} exported to {}",
        format.label(),
        path.display()
    )));
    Ok(result.with_artifacts(vec![path]))
}

pub fn build(ledger: &Ledger, format: ExportFormat, title: &str) -> Result<ExportArtifact> {
    match format {
        ExportFormat::Xlsx => export::spreadsheet(ledger.entries()),
        ExportFormat::Pdf => export::document(ledger.entries(), title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use tempfile::TempDir;

    #[test]
    fn viewer_exports_both_formats() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::seeded();

        let xlsx = run(
            &ledger,
            Role::Viewer,
            ExportFormat::Xlsx,
            temp.path(),
            "Journal Report",
        )
        .unwrap();
        let pdf = run(
            &ledger,
            Role::Viewer,
            ExportFormat::Pdf,
            temp.path(),
            "Journal Report",
        )
        .unwrap();

        assert_eq!(xlsx.artifacts[0], temp.path().join("journal-report.xlsx"));
        assert_eq!(pdf.artifacts[0], temp.path().join("journal-report.pdf"));
        assert!(xlsx.messages[0].content.starts_with("Excel exported to "));
        assert!(pdf.messages[0].content.starts_with("PDF exported to "));
        assert!(temp.path().join("journal-report.pdf").exists());
    }

    #[test]
    fn staff_cannot_export() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &Ledger::seeded(),
            Role::Staff,
            ExportFormat::Pdf,
            temp.path(),
            "Journal Report",
        );
        assert!(matches!(result, Err(JournalError::Forbidden { .. })));
        assert!(!temp.path().join("journal-report.pdf").exists());
    }
}

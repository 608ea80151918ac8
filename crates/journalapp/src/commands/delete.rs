use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{authorize, Capability, Role};
use crate::view::ReportView;

pub fn run(view: &mut ReportView, role: Role, page_index: usize) -> Result<CmdResult> {
    authorize(role, Capability::EditRows)?;
    let removed = view.delete_row(page_index)?;

    let mut result = CmdResult::default()
        .with_role(role)
        .with_window(view.window());
    result.add_message(CmdMessage::success("Row deleted"));
    Ok(result.with_affected_entries(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;

    #[test]
    fn removes_row_from_store() {
        let mut view = ReportView::seeded(5);
        let first = view.ledger().entries()[0].clone();

        let result = run(&mut view, Role::Admin, 0).unwrap();
        assert_eq!(result.affected_entries[0].id, first.id);
        assert_eq!(result.messages[0].content, "Row deleted");
        assert_eq!(view.ledger().len(), 9);
        assert_eq!(result.window.unwrap().rows[0].entry.date, "2025-01-02");
    }

    #[test]
    fn viewer_cannot_delete() {
        let mut view = ReportView::seeded(5);
        assert!(matches!(
            run(&mut view, Role::Viewer, 0),
            Err(JournalError::Forbidden { .. })
        ));
        assert_eq!(view.ledger().len(), 10);
    }

    #[test]
    fn row_outside_page_is_not_found() {
        let mut view = ReportView::seeded(5);
        assert!(matches!(
            run(&mut view, Role::Staff, 9),
            Err(JournalError::RowNotFound(9))
        ));
    }
}

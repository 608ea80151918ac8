use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Field;
use crate::session::{authorize, Capability, Role};
use crate::view::ReportView;

pub fn begin(view: &mut ReportView, role: Role, page_index: usize) -> Result<CmdResult> {
    authorize(role, Capability::EditRows)?;
    view.begin_edit(page_index)?;
    Ok(CmdResult::default().with_role(role).with_window(view.window()))
}

pub fn update(view: &mut ReportView, role: Role, field: Field, value: &str) -> Result<CmdResult> {
    authorize(role, Capability::EditRows)?;
    view.update_edit_buffer(field, value)?;
    Ok(CmdResult::default().with_role(role).with_window(view.window()))
}

pub fn commit(view: &mut ReportView, role: Role) -> Result<CmdResult> {
    authorize(role, Capability::EditRows)?;
    let saved = view.commit_edit()?;

    let mut result = CmdResult::default()
        .with_role(role)
        .with_window(view.window());
    if saved.is_double_sided() {
        result.add_message(CmdMessage::warning(
            "Entry now has both a debit and a credit",
        ));
    }
    result.add_message(CmdMessage::success("Row updated"));
    Ok(result.with_affected_entries(vec![saved]))
}

pub fn cancel(view: &mut ReportView, role: Role) -> Result<CmdResult> {
    authorize(role, Capability::EditRows)?;
    let message = match view.cancel_edit() {
        Some(_) => CmdMessage::info("Edit cancelled"),
        None => CmdMessage::info("No edit in progress"),
    };
    let mut result = CmdResult::default()
        .with_role(role)
        .with_window(view.window());
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::JournalError;

    #[test]
    fn viewer_cannot_edit() {
        let mut view = ReportView::seeded(5);
        assert!(matches!(
            begin(&mut view, Role::Viewer, 0),
            Err(JournalError::Forbidden {
                capability: Capability::EditRows,
                ..
            })
        ));
        assert!(view.editing().is_none());
    }

    #[test]
    fn staff_edit_round() {
        let mut view = ReportView::seeded(5);
        let result = begin(&mut view, Role::Staff, 0).unwrap();
        assert!(result.window.unwrap().editing.is_some());

        update(&mut view, Role::Staff, Field::Description, "X").unwrap();
        let result = commit(&mut view, Role::Staff).unwrap();

        assert_eq!(result.affected_entries[0].description, "X");
        assert_eq!(result.messages.last().unwrap().content, "Row updated");
        assert!(result.window.unwrap().editing.is_none());
        assert_eq!(view.ledger().entries()[0].description, "X");
    }

    #[test]
    fn double_sided_commit_warns() {
        let mut view = ReportView::seeded(5);
        begin(&mut view, Role::Admin, 0).unwrap();
        update(&mut view, Role::Admin, Field::Credit, "10").unwrap();
        let result = commit(&mut view, Role::Admin).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].level, MessageLevel::Success);
    }

    #[test]
    fn cancel_without_edit_is_informational() {
        let mut view = ReportView::seeded(5);
        let result = cancel(&mut view, Role::Staff).unwrap();
        assert_eq!(result.messages[0].content, "No edit in progress");
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::session::{authorize, Capability, Role};
use crate::view::ReportView;

pub fn show(view: &ReportView, role: Role) -> Result<CmdResult> {
    authorize(role, Capability::ViewTable)?;
    Ok(CmdResult::default().with_role(role).with_window(view.window()))
}

pub fn filter(view: &mut ReportView, role: Role, text: &str) -> Result<CmdResult> {
    authorize(role, Capability::Filter)?;
    view.set_filter(text);
    show(view, role)
}

pub fn sort(view: &mut ReportView, role: Role, field: Field) -> Result<CmdResult> {
    authorize(role, Capability::ViewTable)?;
    view.sort_by(field);
    show(view, role)
}

pub fn page(view: &mut ReportView, role: Role, page: usize) -> Result<CmdResult> {
    authorize(role, Capability::ViewTable)?;
    view.change_page(page);
    show(view, role)
}

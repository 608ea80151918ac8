use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{self as sessions, SessionStore};

pub fn login<S: SessionStore>(store: &mut S, username: &str, password: &str) -> Result<CmdResult> {
    let role = sessions::login(store, username, password)?;
    let mut result = CmdResult::default().with_role(role);
    result.add_message(CmdMessage::success(format!("Logged in as {}", role)));
    Ok(result)
}

pub fn logout<S: SessionStore>(store: &mut S) -> Result<CmdResult> {
    sessions::logout(store)?;
    let mut result = CmdResult::default().with_role(sessions::Role::Guest);
    result.add_message(CmdMessage::info("Logged out"));
    Ok(result)
}

pub fn whoami<S: SessionStore>(store: &S) -> Result<CmdResult> {
    let role = sessions::current_role(store)?;
    let mut result = CmdResult::default().with_role(role);

    let message = if !role.is_authenticated() {
        "Not logged in. Try: admin/admin, staff/staff, viewer/viewer".to_string()
    } else {
        match sessions::session_started(store)? {
            Some(started) => format!(
                "Logged in as {} since {}",
                role,
                started.format("%Y-%m-%d %H:%M UTC")
            ),
            None => format!("Logged in as {}", role),
        }
    };
    result.add_message(CmdMessage::info(message));
    Ok(result)
}

//! # Sessions and Roles
//!
//! Access to the report is gated by a role tag kept in a small string-keyed session
//! store, the same shape as a browser's local storage.
//!
//! ## Credentials
//!
//! There is no user database. [`login`] checks the pair against a fixed table of three
//! demo accounts (`admin/admin`, `staff/staff`, `viewer/viewer`). Nothing is hashed and
//! there is no lockout. This is a demo gate, not a security boundary.
//!
//! ## Storage Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `role` | `admin`, `staff` or `viewer`; absent means guest |
//! | `logged_in_at` | RFC 3339 timestamp of the last successful login |
//!
//! ## Capabilities
//!
//! Every gated operation asks [`authorize`] instead of comparing roles itself:
//!
//! | Capability | guest | viewer | staff | admin |
//! |------------|-------|--------|-------|-------|
//! | `ViewTable` | | x | x | x |
//! | `Filter` | | x | | x |
//! | `Export` | | x | | x |
//! | `EditRows` | | | x | x |
//!
//! ## Implementations
//!
//! - [`fs::FileSessionStore`]: JSON file in the data directory (production).
//! - [`memory::MemorySessionStore`]: for tests.

use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

pub mod fs;
pub mod memory;

pub const ROLE_KEY: &str = "role";
pub const LOGGED_IN_AT_KEY: &str = "logged_in_at";

const CREDENTIALS: [(&str, &str, Role); 3] = [
    ("admin", "admin", Role::Admin),
    ("staff", "staff", Role::Staff),
    ("viewer", "viewer", Role::Viewer),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    Viewer,
    Staff,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Viewer => "viewer",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Reads a stored role tag. Anything unrecognised is a guest.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("admin") => Role::Admin,
            Some("staff") => Role::Staff,
            Some("viewer") => Role::Viewer,
            _ => Role::Guest,
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Guest => false,
            Role::Viewer => matches!(capability, ViewTable | Filter | Export),
            Role::Staff => matches!(capability, ViewTable | EditRows),
            Role::Admin => true,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self != Role::Guest
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something a role may or may not be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// See the table, sort it and move between pages.
    ViewTable,
    Filter,
    Export,
    /// Edit and delete rows.
    EditRows,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Capability::ViewTable => "view the journal",
            Capability::Filter => "filter the journal",
            Capability::Export => "export the journal",
            Capability::EditRows => "edit or delete rows",
        };
        f.write_str(text)
    }
}

/// String-keyed session storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Sets several keys in order. Stores that can write them together should.
    fn set_all(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// The single capability check used by every gated operation.
pub fn authorize(role: Role, capability: Capability) -> Result<()> {
    if role.can(capability) {
        Ok(())
    } else {
        warn!(%role, ?capability, "capability denied");
        Err(JournalError::Forbidden { role, capability })
    }
}

pub fn login<S: SessionStore>(store: &mut S, username: &str, password: &str) -> Result<Role> {
    if username.is_empty() || password.is_empty() {
        return Err(JournalError::MissingCredentials);
    }

    let role = CREDENTIALS
        .iter()
        .find(|(user, pass, _)| *user == username && *pass == password)
        .map(|(_, _, role)| *role);

    let Some(role) = role else {
        warn!(username, "rejected login");
        return Err(JournalError::InvalidCredentials);
    };

    // Role last: a store that fails part way never holds a new role without its timestamp.
    let logged_in_at = Utc::now().to_rfc3339();
    store.set_all(&[(LOGGED_IN_AT_KEY, logged_in_at.as_str()), (ROLE_KEY, role.as_str())])?;
    info!(%role, "logged in");
    Ok(role)
}

pub fn logout<S: SessionStore>(store: &mut S) -> Result<()> {
    store.remove(ROLE_KEY)?;
    store.remove(LOGGED_IN_AT_KEY)?;
    info!("logged out");
    Ok(())
}

pub fn current_role<S: SessionStore>(store: &S) -> Result<Role> {
    Ok(Role::from_tag(store.get(ROLE_KEY)?.as_deref()))
}

/// When the current session started, if there is one with a readable timestamp.
pub fn session_started<S: SessionStore>(store: &S) -> Result<Option<DateTime<Utc>>> {
    let started = store
        .get(LOGGED_IN_AT_KEY)?
        .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
        .map(|ts| ts.with_timezone(&Utc));
    Ok(started)
}

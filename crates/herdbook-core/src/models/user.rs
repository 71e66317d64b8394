use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name given to every guest session
pub const GUEST_USERNAME: &str = "Guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum Role {
    Admin,
    Farmer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Farmer => write!(f, "Farmer"),
        }
    }
}

/// The signed-in user. Never persisted; always rebuilt from the session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct User {
    pub username: String,
    pub role: Role,
}

impl User {
    /// Guest sessions always get the low-privilege Farmer role
    pub fn guest() -> Self {
        Self {
            username: GUEST_USERNAME.to_string(),
            role: Role::Farmer,
        }
    }

    /// Credentialed sessions always map to Admin; no role is fetched from the server
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Admin,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.role == Role::Farmer && self.username == GUEST_USERNAME
    }
}

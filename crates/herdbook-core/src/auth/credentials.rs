use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Username and password as typed at the login prompt.
///
/// Serialized as `{"username": ..., "password": ...}` into the session
/// record so a credentialed session can be re-validated on the next start.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An encoded credential ready to be attached to a request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    scheme: &'static str,
    value: String,
}

impl AuthToken {
    pub fn new(scheme: &'static str, value: impl Into<String>) -> Self {
        Self {
            scheme,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Full `Authorization` header value, e.g. `Basic YWxpY2U6czNjcmV0`
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.value)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken({} <redacted>)", self.scheme)
    }
}

/// Turns credentials into the token the remote validator attaches to requests.
pub trait AuthScheme: Send + Sync {
    fn token(&self, credentials: &Credentials) -> AuthToken;
}

/// HTTP Basic: reversible base64 of `username:password`, not a hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAuth;

impl AuthScheme for BasicAuth {
    fn token(&self, credentials: &Credentials) -> AuthToken {
        let raw = format!("{}:{}", credentials.username, credentials.password);
        AuthToken::new("Basic", STANDARD.encode(raw))
    }
}

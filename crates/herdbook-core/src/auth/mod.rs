//! Authentication module for managing the user session.
//!
//! This module provides:
//! - `SessionManager`: the login / guest / logout state machine and startup restoration
//! - `SessionRecord`: what is persisted between runs (guest flag or credentials)
//! - `AuthScheme`, `BasicAuth`: how credentials become a request token
//! - `RemoteValidator`: the probe used to check credentials against the server
//!
//! Credentialed sessions are re-validated on every start; guest sessions are trusted.

pub mod credentials;
pub mod error;
pub mod outcome;
pub mod record;
pub mod session;
pub mod validator;

pub use credentials::{AuthScheme, AuthToken, BasicAuth, Credentials};
pub use error::LoginError;
pub use outcome::AuthOutcome;
pub use record::{RecordError, SessionRecord, CREDENTIALS_KEY, DEMO_MODE_KEY};
pub use session::{SessionConfig, SessionEvent, SessionManager, SessionState};
pub use validator::RemoteValidator;

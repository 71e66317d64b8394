//! herdbook core library.
//!
//! Session authentication for the farm management client: restoring a
//! persisted session at startup, validating stored credentials against the
//! farm API, login / guest access / logout, plus the display models the
//! front ends share.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use herdbook_core::{ApiClient, Config, Credentials, SessionManager, store};
//!
//! let config = Config::load()?;
//! let api = ApiClient::new(&config.api_base_url, config.request_timeout())?;
//! let store = store::open(config.store, config.cache_dir()?);
//! let mut session = SessionManager::init(store, api, config.session_config()).await;
//!
//! if !session.is_authenticated() {
//!     session.login(Credentials::new("alice", "s3cret")).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod store;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{
    AuthOutcome, AuthScheme, AuthToken, BasicAuth, Credentials, LoginError, RemoteValidator,
    SessionConfig, SessionEvent, SessionManager, SessionState,
};
pub use config::Config;
pub use models::{AssessmentView, MedicalAssessment, Reference, Role, User};
pub use store::{KeyValueStore, StoreError, StoreKind};

//! The session manager: who is signed in, and whether that survives a restart.
//!
//! ```text
//!            restore()                    login() ok
//!   [Loading] ──────────→ [Signed out] ─────────────→ [Admin]
//!       │                     │    ↑                     │
//!       │ demo flag           │    └──── logout() ───────┤
//!       ▼                     ▼ login_guest()            │
//!   [Guest] ←─────────────────┘                          │
//!       └──────────────────── logout() ──────────────────┘
//! ```
//!
//! Restoration rules for a stored credentialed session: a 401/403 from the
//! validation probe clears it, while any other failure (no response, timeout,
//! 5xx) keeps it so a flaky connection never forces a re-login.

use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use super::record::{RecordError, SessionRecord, DEMO_MODE_KEY};
use super::{AuthOutcome, AuthScheme, AuthToken, BasicAuth, Credentials, LoginError, RemoteValidator};
use crate::models::User;
use crate::store::KeyValueStore;

/// Pause before a guest session starts, so the loading indicator is seen
pub(crate) const DEFAULT_GUEST_DELAY_MS: u64 = 800;

/// Events buffered per subscriber before the oldest are dropped
const EVENT_BUFFER_SIZE: usize = 16;

/// Snapshot published to observers after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until startup restoration finishes, and while a guest login runs
    pub is_loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Startup restoration finished
    Restored,
    LoggedIn,
    GuestStarted,
    /// The presentation layer should navigate to the login view
    LoggedOut,
    /// A stored session was dropped as corrupted or rejected by the server
    SessionCleared,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub guest_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            guest_delay: Duration::from_millis(DEFAULT_GUEST_DELAY_MS),
        }
    }
}

pub struct SessionManager<S, V> {
    store: S,
    validator: V,
    scheme: Box<dyn AuthScheme>,
    config: SessionConfig,
    state: watch::Sender<SessionState>,
    events: broadcast::Sender<SessionEvent>,
    token: Option<AuthToken>,
    restored: bool,
}

impl<S: KeyValueStore, V: RemoteValidator> SessionManager<S, V> {
    /// Create a manager in the loading state. Call `restore` before use, or
    /// use `init` which does both.
    pub fn new(store: S, validator: V, config: SessionConfig) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        let (events, _) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self {
            store,
            validator,
            scheme: Box::new(BasicAuth),
            config,
            state,
            events,
            token: None,
            restored: false,
        }
    }

    /// Replace the default HTTP Basic scheme
    pub fn with_scheme(mut self, scheme: impl AuthScheme + 'static) -> Self {
        self.scheme = Box::new(scheme);
        self
    }

    /// Create a manager and restore the persisted session.
    pub async fn init(store: S, validator: V, config: SessionConfig) -> Self {
        let mut manager = Self::new(store, validator, config);
        manager.restore().await;
        manager
    }

    // ===== State =====

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Token of the active credentialed session, for further API calls
    pub fn auth_token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Watch state changes (e.g. to drive a loading indicator)
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn publish(&self, update: impl FnOnce(&mut SessionState)) {
        self.state.send_modify(update);
    }

    fn emit(&self, event: SessionEvent) {
        debug!(?event, "Session event");
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    // ===== Transitions =====

    /// Derive the user from the persisted session record. Runs once; later
    /// calls are ignored. Never fails: every problem resolves to either a
    /// restored user or a signed-out state.
    pub async fn restore(&mut self) {
        if self.restored {
            debug!("Session already restored");
            return;
        }
        self.restored = true;

        let user = match SessionRecord::load(&self.store) {
            Ok(Some(SessionRecord::Guest)) => {
                debug!("Guest session found");
                Some(User::guest())
            }
            Ok(Some(SessionRecord::Credentialed(credentials))) => {
                self.validate_stored(credentials).await
            }
            Ok(None) => {
                debug!("No stored session");
                None
            }
            Err(RecordError::Corrupted(e)) => {
                warn!(error = %e, "Corrupted stored session, clearing it");
                self.drop_stored_session();
                None
            }
            Err(RecordError::Store(e)) => {
                warn!(error = %e, "Failed to read session store");
                None
            }
        };

        if let Some(ref user) = user {
            info!(username = %user.username, role = %user.role, "Session restored");
        }
        self.publish(|state| {
            state.user = user;
            state.is_loading = false;
        });
        self.emit(SessionEvent::Restored);
    }

    async fn validate_stored(&mut self, credentials: Credentials) -> Option<User> {
        let token = self.scheme.token(&credentials);
        let probe = self.validator.probe(Some(&token)).await;

        let outcome = AuthOutcome::of(&probe);
        match probe {
            Ok(()) => debug!(username = %credentials.username, "Stored credentials accepted"),
            Err(e) if outcome.keeps_session() => {
                warn!(error = %e, "Session validation failed, keeping session")
            }
            Err(e) => warn!(error = %e, "Stored credentials rejected, clearing session"),
        }
        if !outcome.keeps_session() {
            self.drop_stored_session();
            return None;
        }

        self.token = Some(token);
        Some(User::admin(credentials.username))
    }

    fn drop_stored_session(&mut self) {
        // Failures are already logged per key
        let _ = SessionRecord::clear(&self.store);
        self.token = None;
        self.emit(SessionEvent::SessionCleared);
    }

    /// Validate credentials against the server and start an Admin session.
    ///
    /// On failure nothing is persisted and the current user is unchanged,
    /// except that guest mode has already been switched off.
    pub async fn login(&mut self, credentials: Credentials) -> Result<(), LoginError> {
        if let Err(e) = self.store.remove(DEMO_MODE_KEY) {
            warn!(error = %e, "Failed to clear guest flag");
        }

        let token = self.scheme.token(&credentials);
        debug!(username = %credentials.username, "Validating credentials");

        if let Err(e) = self.validator.probe(Some(&token)).await {
            error!(error = %e, "Login failed");
            return Err(e.into());
        }

        let user = User::admin(credentials.username.clone());
        if let Err(e) = SessionRecord::Credentialed(credentials).save(&self.store) {
            warn!(error = %e, "Failed to persist credentials");
        }

        info!(username = %user.username, "Login successful");
        self.token = Some(token);
        self.publish(|state| state.user = Some(user));
        self.emit(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Start a guest session. Never touches the network.
    pub async fn login_guest(&mut self) {
        self.publish(|state| state.is_loading = true);

        if !self.config.guest_delay.is_zero() {
            tokio::time::sleep(self.config.guest_delay).await;
        }

        if let Err(e) = SessionRecord::Guest.save(&self.store) {
            warn!(error = %e, "Failed to persist guest flag");
        }

        info!("Guest session started");
        self.token = None;
        self.publish(|state| {
            state.user = Some(User::guest());
            state.is_loading = false;
        });
        self.emit(SessionEvent::GuestStarted);
    }

    /// End any session and forget it on disk.
    pub fn logout(&mut self) {
        // Failures are already logged per key
        let _ = SessionRecord::clear(&self.store);
        self.token = None;
        self.publish(|state| state.user = None);
        info!("Logged out");
        self.emit(SessionEvent::LoggedOut);
    }
}

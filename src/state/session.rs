//! Session lifecycle: token acquisition, persistence, validation, and
//! propagation to the rest of the UI.
//!
//! STATE MACHINE
//! =============
//! ```text
//!   Anonymous ──begin_restore (token found)──▶ Resolving
//!   Resolving ──finish_restore(Some(user))──▶ Authenticated
//!   Resolving ──finish_restore(None)────────▶ Anonymous  (storage purged)
//!   any ──────login──────▶ Authenticated     (storage written)
//!   any ──────logout─────▶ Anonymous         (storage cleared)
//! ```
//! The optimistic window where a token exists but no user has been
//! resolved yet is the first-class `Resolving` state, not an inferred
//! combination of flags. A token that fails resolution is purged together
//! with the user record it was meant to produce; the store never rests in
//! a token-but-no-user state once `ready` is true. `finish_restore`
//! applies only while still `Resolving`: a login that lands while the
//! profile fetch is in flight wins over the late outcome.
//!
//! The store is synchronous. The single suspension point of restoration
//! (the profile fetch) belongs to the caller: `begin_restore` hands back
//! the persisted token, the caller validates it against the backend, and
//! `finish_restore` applies the outcome. No token found means no network
//! call is ever made.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::SessionStorage;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the authenticated user's id.
pub const USER_ID_KEY: &str = "userId";

/// The current authentication state of this browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No credentials; the user is logged out.
    #[default]
    Anonymous,
    /// A persisted token was found and is being validated against the
    /// backend. Not yet authenticated.
    Resolving { token: String },
    /// The token was validated (or freshly issued) and resolved to a user.
    Authenticated { token: String, user: User },
}

/// Single source of truth for "who is logged in", with durable
/// persistence across reloads through a [`SessionStorage`] medium.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    ready: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    /// A store that has not yet attempted restoration.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::Anonymous,
            ready: false,
        }
    }

    /// Start restoring a previous session from durable storage.
    ///
    /// Returns the persisted token when one exists; the caller must
    /// validate it and report back via [`finish_restore`]. When no token
    /// is persisted the store becomes ready and anonymous immediately and
    /// no validation (hence no network call) is needed.
    ///
    /// [`finish_restore`]: Self::finish_restore
    pub fn begin_restore(&mut self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Some(token) => {
                self.session = Session::Resolving {
                    token: token.clone(),
                };
                Some(token)
            }
            None => {
                self.session = Session::Anonymous;
                self.ready = true;
                None
            }
        }
    }

    /// Apply the outcome of validating the token handed out by
    /// [`begin_restore`].
    ///
    /// `Some(user)` promotes the resolving token to an authenticated
    /// session. `None` covers every failure — explicit rejection and
    /// transport error alike — and demotes to anonymous, purging the
    /// stale token and user id from storage together. Either way the
    /// store is ready afterwards.
    ///
    /// No-op unless the store is still resolving: an explicit `login`
    /// landing while the stale token's profile fetch is in flight wins,
    /// and the late outcome must not wipe the fresh session.
    ///
    /// [`begin_restore`]: Self::begin_restore
    pub fn finish_restore(&mut self, profile: Option<User>) {
        if !matches!(self.session, Session::Resolving { .. }) {
            return;
        }
        match (std::mem::take(&mut self.session), profile) {
            (Session::Resolving { token }, Some(user)) => {
                self.session = Session::Authenticated { token, user };
            }
            _ => self.clear(),
        }
        self.ready = true;
    }

    /// Accept an already-validated token and user record, overwriting any
    /// prior session, and persist both to durable storage.
    pub fn login(&mut self, token: String, user: User) {
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(USER_ID_KEY, &user.id.to_string());
        self.session = Session::Authenticated { token, user };
        self.ready = true;
    }

    /// Clear the session and remove its durable-storage entries.
    /// Idempotent: calling while already anonymous is a no-op.
    pub fn logout(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_ID_KEY);
        self.session = Session::Anonymous;
    }

    /// Whether initial restoration has completed. UI must render an
    /// indeterminate state until this is true, never the anonymous or
    /// authenticated branch.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// True iff a user record is present. Protected UI and protected
    /// calls gate on this, not on token presence: a token exists without
    /// a user during the resolving window.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated { .. })
    }

    /// The bearer token, present while resolving or authenticated.
    pub fn token(&self) -> Option<&str> {
        match &self.session {
            Session::Anonymous => None,
            Session::Resolving { token } | Session::Authenticated { token, .. } => Some(token),
        }
    }

    /// The authenticated user record, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// The current lifecycle state.
    pub fn session(&self) -> &Session {
        &self.session
    }
}

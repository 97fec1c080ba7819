//! Session gate: a single shared password unlocks the inventory views.
//!
//! The authenticated flag is the only session state. It is persisted as the
//! string `"true"` under one storage key; any other stored value counts as
//! logged out.

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key holding the authenticated flag.
pub const DEFAULT_SESSION_KEY: &str = "padoca-auth";

/// The shared password accepted by [`SessionStore::login`] unless configured otherwise.
pub const DEFAULT_PASSWORD: &str = "padariapadoca";

const AUTHENTICATED: &str = "true";

/// Where the presentation layer should navigate for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Inventory,
}

/// Process-wide authentication state backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
    secret: String,
    authenticated: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create an unauthenticated session using the default key and password.
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, DEFAULT_SESSION_KEY, DEFAULT_PASSWORD)
    }

    pub fn with_settings(storage: S, key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            secret: secret.into(),
            authenticated: false,
        }
    }

    /// Read the persisted flag into memory and return the resulting state.
    ///
    /// Idempotent: re-reading the same stored value yields the same state.
    pub fn initialize(&mut self) -> Result<bool, StorageError> {
        let stored = self.storage.get(&self.key)?;
        self.authenticated = stored.as_deref() == Some(AUTHENTICATED);
        tracing::debug!(authenticated = self.authenticated, "session restored");
        Ok(self.authenticated)
    }

    /// Compare `candidate` against the shared secret.
    ///
    /// On a match the session becomes authenticated and the flag is
    /// persisted. A mismatch leaves the state untouched and returns false.
    pub fn login(&mut self, candidate: &str) -> Result<bool, StorageError> {
        if candidate != self.secret {
            tracing::warn!("login rejected");
            return Ok(false);
        }

        self.storage.set(&self.key, AUTHENTICATED)?;
        self.authenticated = true;
        tracing::info!("logged in");
        Ok(true)
    }

    /// Clear the in-memory flag and remove the persisted one.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.authenticated = false;
        self.storage.remove(&self.key)?;
        tracing::info!("logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The view the caller should show: the login page until authenticated.
    pub fn landing_route(&self) -> Route {
        if self.authenticated {
            Route::Inventory
        } else {
            Route::Login
        }
    }
}

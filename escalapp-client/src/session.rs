use std::sync::{PoisonError, RwLock};

use secrecy::Secret;

use crate::models::user::User;

/// In-memory session state: the authenticated identity and its bearer
/// credential.
///
/// The token lives only in process memory and is never persisted. Identity
/// and credential are stored in one cell so they can only ever be set and
/// cleared together; `is_authenticated` is true exactly while both are
/// present. The store performs no I/O and no navigation.
#[derive(Default)]
pub struct SessionStore {
    inner: RwLock<Option<SessionState>>,
}

struct SessionState {
    user: User,
    token: Secret<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|state| state.user.clone())
    }

    /// Read-only token access for the request layer.
    pub fn access_token(&self) -> Option<Secret<String>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|state| state.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replaces identity and credential atomically.
    pub fn set_session(&self, user: User, token: Secret<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            Some(SessionState { user, token });
    }

    /// Replaces the identity wholesale after a profile fetch. A no-op when no
    /// session exists, so the identity can never be present without the
    /// credential.
    pub fn set_user(&self, user: User) {
        if let Some(state) = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            state.user = user;
        }
    }

    /// Removes identity and credential atomically. Idempotent.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

use std::sync::Arc;

use crate::navigation::{Navigator, Route};
use crate::roles::{role_names, SUPER_ADMIN_ROLE};
use crate::session::SessionStore;

/// Access-control predicate evaluated before a protected navigation commits.
///
/// Rules, in order:
///   1. unauthenticated callers are denied;
///   2. the super admin role grants access everywhere;
///   3. an empty requirement admits any authenticated caller;
///   4. otherwise the caller needs at least one of the required roles.
///
/// Every denial redirects to the login route, exactly once; nothing else
/// navigates. The decision is synchronous, with no retries.
pub struct RouteGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn can_enter(&self, required_roles: &[&str]) -> bool {
        let Some(user) = self.session.current_user() else {
            tracing::debug!("route denied: no active session");
            self.navigator.navigate(Route::Login);
            return false;
        };

        let held = role_names(&user);

        if held.contains(SUPER_ADMIN_ROLE) {
            return true;
        }

        if required_roles.is_empty() {
            return true;
        }

        if required_roles.iter().any(|role| held.contains(*role)) {
            return true;
        }

        tracing::debug!(user_id = user.id, "route denied: required role missing");
        self.navigator.navigate(Route::Login);
        false
    }
}

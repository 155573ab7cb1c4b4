//! escalapp-client: session and authorization layer for the EscalApp admin UI.
//!
//! Wraps the admin_ws HTTP API: credential lifecycle, in-memory session
//! state, role-gated route access and the authenticating request layer.

pub mod config;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod roles;
pub mod services;
pub mod session;

use std::sync::Arc;

use crate::guard::RouteGuard;
use crate::navigation::Navigator;
use crate::services::{admin::AdminService, api::ApiClient, auth::AuthService};
use crate::session::SessionStore;

/// Shared application state wiring the session store, the guard and the
/// service clients together. Construct once per process, inject everywhere.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub auth: Arc<AuthService>,
    pub admin: Arc<AdminService>,
    pub guard: Arc<RouteGuard>,
}

impl AppState {
    pub fn new(settings: &config::Settings, navigator: Arc<dyn Navigator>) -> Self {
        let session = Arc::new(SessionStore::new());
        let api = Arc::new(ApiClient::new(
            &settings.api,
            session.clone(),
            navigator.clone(),
        ));
        let auth = Arc::new(AuthService::new(
            api.clone(),
            session.clone(),
            navigator.clone(),
        ));
        let admin = Arc::new(AdminService::new(api.clone()));
        let guard = Arc::new(RouteGuard::new(session.clone(), navigator));

        Self {
            session,
            auth,
            admin,
            guard,
        }
    }
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use escalapp_client::config::ApiSettings;
use escalapp_client::models::user::{User, UserBusiness, UserRole};
use escalapp_client::navigation::{Navigator, Route};
use escalapp_client::services::api::ApiClient;
use escalapp_client::services::auth::AuthService;
use escalapp_client::session::SessionStore;
use wiremock::MockServer;

/// Navigator that records every transition for assertions.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}

/// Builds a user with the given global roles and (business name, roles)
/// memberships.
pub fn user_with_roles(global: &[&str], businesses: &[(&str, &[&str])]) -> User {
    User {
        id: 1,
        first_name: "Ana".to_string(),
        middle_name: None,
        last_name: "López".to_string(),
        second_last_name: None,
        email: "ana@example.com".to_string(),
        businesses: businesses
            .iter()
            .enumerate()
            .map(|(i, (name, roles))| UserBusiness {
                id: i as i64 + 1,
                name: (*name).to_string(),
                roles: roles
                    .iter()
                    .enumerate()
                    .map(|(j, description)| UserRole {
                        id: j as i64 + 1,
                        description: (*description).to_string(),
                    })
                    .collect(),
            })
            .collect(),
        global_roles: global
            .iter()
            .enumerate()
            .map(|(j, description)| UserRole {
                id: 100 + j as i64,
                description: (*description).to_string(),
            })
            .collect(),
    }
}

pub struct TestClient {
    pub api: Arc<ApiClient>,
    pub auth: AuthService,
    pub session: Arc<SessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Wires a session store, recording navigator and service clients against a
/// mock backend.
pub fn test_client(server: &MockServer) -> TestClient {
    let session = Arc::new(SessionStore::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let settings = ApiSettings {
        base_url: server.uri(),
    };
    let api = Arc::new(ApiClient::new(
        &settings,
        session.clone(),
        navigator.clone(),
    ));
    let auth = AuthService::new(api.clone(), session.clone(), navigator.clone());

    TestClient {
        api,
        auth,
        session,
        navigator,
    }
}

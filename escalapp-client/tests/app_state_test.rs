mod common;

use std::sync::Arc;

use common::RecordingNavigator;
use escalapp_client::config::{get_configuration, ApiSettings, LoggingSettings, Settings};
use escalapp_client::models::forms::LoginForm;
use escalapp_client::navigation::Route;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn configuration_loads_from_yaml() {
    let settings = get_configuration().expect("Failed to read configuration");

    assert_eq!(settings.api.base_url, "http://localhost:3000/admin");
    assert_eq!(settings.logging.level, "info");
}

#[tokio::test]
async fn app_state_shares_one_session_across_collaborators() {
    escalapp_core::observability::logging::init_tracing("escalapp-client-tests", "debug");

    let server = MockServer::start().await;
    let navigator = Arc::new(RecordingNavigator::default());
    let settings = Settings {
        api: ApiSettings {
            base_url: server.uri(),
        },
        logging: LoggingSettings::default(),
    };
    let state = escalapp_client::AppState::new(&settings, navigator.clone());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Inicio de sesión exitoso",
            "data": {
                "token": "tok-A",
                "usuario": {
                    "id_usuario": 1,
                    "primer_nombre": "Ana",
                    "primer_apellido": "López",
                    "email": "ana@example.com",
                    "negocios": [],
                    "roles_globales": [
                        { "id_rol": 1, "descripcion": "SUPER ADMINISTRADOR" }
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let form = LoginForm {
        identification: "u1".to_string(),
        password: "validPass1".to_string(),
    };
    state.auth.login(&form).await.unwrap();

    // The guard sees the session the lifecycle just populated.
    assert!(state.session.is_authenticated());
    assert!(state.guard.can_enter(&["ADMINISTRADOR RESTAURANTE"]));
    assert_eq!(navigator.visited(), vec![Route::Dashboard]);
}

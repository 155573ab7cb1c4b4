use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;

use escalapp_core::envelope::ApiResponse;
use escalapp_core::error::ApiError;

use crate::config::ApiSettings;
use crate::navigation::{Navigator, Route};
use crate::session::SessionStore;

/// Endpoints that must never carry a credential, matched by exact path.
/// `/usuarios` is registration; the profile fetch at `/usuarios/perfil`
/// stays authenticated.
const PUBLIC_PATHS: &[&str] = &[
    "/auth/login",
    "/usuarios",
    "/auth/forgot-password",
    "/auth/verify-otp",
    "/auth/reset-password",
];

/// HTTP layer shared by every service client.
///
/// Attaches `Authorization: Bearer <token>` to non-public requests when a
/// credential is held and enforces the unauthorized policy: a 401 on any
/// non-public path clears the session, redirects to login and propagates the
/// failure to the caller. Credential expiry is a hard failure; there is no
/// refresh-and-retry path.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let request = self.client.get(self.url(path));
        self.dispatch(request, path).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.dispatch(request, path).await
    }

    /// Decodes the `{success, message, data?}` envelope from a response body.
    /// The status line is not consulted; failure envelopes arrive on 4xx and
    /// 2xx alike.
    pub async fn read_envelope<T>(response: Response) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        response.json::<ApiResponse<T>>().await.map_err(|e| {
            ApiError::UnexpectedResponse(format!(
                "undecodable response body (status {status}): {e}"
            ))
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.contains(&path)
    }

    async fn dispatch(
        &self,
        mut request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<Response, ApiError> {
        let public = Self::is_public(path);

        if !public {
            if let Some(token) = self.session.access_token() {
                request = request.bearer_auth(token.expose_secret());
            }
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "request failed to reach the server");
            ApiError::from(e)
        })?;

        if !public && response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "credential rejected by the server; clearing session");
            self.session.clear();
            self.navigator.navigate(Route::Login);
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }
}

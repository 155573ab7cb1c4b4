use std::sync::Arc;

use validator::Validate;

use escalapp_core::error::ApiError;

use crate::models::forms::{LoginForm, RegisterForm, ResetPasswordForm};
use crate::models::user::{LoginData, RegisterData, User};
use crate::navigation::{Navigator, Route};
use crate::services::api::ApiClient;
use crate::session::SessionStore;

/// Credential lifecycle: login, logout, registration and the password-reset
/// flow.
///
/// Each operation is a single request/response exchange with no intermediate
/// state. The session store is mutated only here and by the 401 handling in
/// [`ApiClient`].
pub struct AuthService {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthService {
    pub fn new(
        api: Arc<ApiClient>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
        }
    }

    /// Signs in with identification number and password.
    ///
    /// On success the identity and token are stored together and the caller
    /// is sent to the dashboard. On a rejected login the server's message is
    /// surfaced and the session stays cleared.
    pub async fn login(&self, form: &LoginForm) -> Result<User, ApiError> {
        form.validate()?;

        let response = self.api.post("/auth/login", form).await?;
        let envelope = ApiClient::read_envelope::<LoginData>(response).await?;
        let data = envelope.data_or(ApiError::Authentication)?;

        self.session.set_session(data.user.clone(), data.token);
        tracing::info!(user_id = data.user.id, "user logged in");
        self.navigator.navigate(Route::Dashboard);

        Ok(data.user)
    }

    /// Clears the session and returns to the login route. Never fails: the
    /// credential is stateless, so there is nothing to revoke server-side.
    pub fn logout(&self) {
        self.session.clear();
        tracing::info!("session cleared on logout");
        self.navigator.navigate(Route::Login);
    }

    /// Creates an account and returns the new user id.
    pub async fn register(&self, form: &RegisterForm) -> Result<i64, ApiError> {
        form.validate()?;

        let response = self.api.post("/usuarios", form).await?;
        let envelope = ApiClient::read_envelope::<RegisterData>(response).await?;
        let data = envelope.data_or(ApiError::Rejected)?;

        tracing::info!(user_id = data.user_id, "user registered");
        Ok(data.user_id)
    }

    /// Requests a six-digit reset code for the given email.
    ///
    /// Reports success for any server response, whether or not the email is
    /// registered, so callers cannot probe which accounts exist. Only
    /// transport failures propagate.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.api
            .post(
                "/auth/forgot-password",
                &serde_json::json!({ "email": email }),
            )
            .await?;

        Ok(())
    }

    /// Checks a reset code without consuming it (step one of the reset flow).
    /// A wrong or expired code is a recoverable rejection, not fatal.
    pub async fn verify_reset_code(&self, email: &str, code: &str) -> Result<(), ApiError> {
        let response = self
            .api
            .post(
                "/auth/verify-otp",
                &serde_json::json!({ "email": email, "code": code }),
            )
            .await?;
        let envelope = ApiClient::read_envelope::<serde_json::Value>(response).await?;

        envelope.ok_or(ApiError::Rejected)
    }

    /// Verifies the code and sets the new password (step two of the flow).
    pub async fn reset_password(&self, form: &ResetPasswordForm) -> Result<(), ApiError> {
        form.validate()?;

        let response = self.api.post("/auth/reset-password", form).await?;
        let envelope = ApiClient::read_envelope::<serde_json::Value>(response).await?;

        envelope.ok_or(ApiError::Rejected)
    }

    /// Reloads the authenticated profile, replacing the stored identity
    /// wholesale. The credential is untouched.
    pub async fn load_profile(&self) -> Result<User, ApiError> {
        let response = self.api.get("/usuarios/perfil").await?;
        let envelope = ApiClient::read_envelope::<User>(response).await?;
        let user = envelope.data_or(ApiError::Rejected)?;

        self.session.set_user(user.clone());
        Ok(user)
    }
}

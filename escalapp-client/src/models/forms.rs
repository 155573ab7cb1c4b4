use serde::Serialize;
use validator::Validate;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Serialize, Validate)]
pub struct LoginForm {
    #[serde(rename = "num_identificacion")]
    #[validate(length(min = 1, message = "Identification number is required"))]
    pub identification: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Fields for `POST /usuarios`. Creates the account; does not sign the
/// caller in — an administrator typically performs this from the dashboard.
#[derive(Debug, Serialize, Validate)]
pub struct RegisterForm {
    #[serde(rename = "primer_nombre")]
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[serde(rename = "segundo_nombre", skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(rename = "primer_apellido")]
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[serde(rename = "segundo_apellido", skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,

    #[serde(rename = "num_identificacion")]
    #[validate(length(min = 1, message = "Identification number is required"))]
    pub identification: String,

    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Backend expects `YYYY-MM-DD`.
    #[serde(rename = "fecha_nacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(rename = "id_rol")]
    pub role_id: i64,

    #[serde(rename = "id_negocio", skip_serializing_if = "Option::is_none")]
    pub business_id: Option<i64>,
}

/// Step two of the password-reset flow: verifies the code and sets the new
/// password in one exchange.
#[derive(Debug, Serialize, Validate)]
pub struct ResetPasswordForm {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(equal = 6, message = "Reset code must be 6 digits"))]
    pub code: String,

    #[serde(rename = "newPassword")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// A role held by a user, either globally or through a business membership.
///
/// The description string is the comparison key everywhere; the backend does
/// not expose stable role ids on every response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(rename = "id_rol")]
    pub id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// A business the user belongs to, with the roles held inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBusiness {
    #[serde(rename = "id_negocio")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

/// Authenticated identity as returned by login and `GET /usuarios/perfil`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "primer_nombre")]
    pub first_name: String,
    #[serde(rename = "segundo_nombre", default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(rename = "primer_apellido")]
    pub last_name: String,
    #[serde(rename = "segundo_apellido", default, skip_serializing_if = "Option::is_none")]
    pub second_last_name: Option<String>,
    pub email: String,
    /// Businesses the user belongs to, with per-business roles.
    #[serde(rename = "negocios", default)]
    pub businesses: Vec<UserBusiness>,
    /// Roles not tied to any business (e.g. the super admin role).
    #[serde(rename = "roles_globales", default)]
    pub global_roles: Vec<UserRole>,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: Secret<String>,
    #[serde(rename = "usuario")]
    pub user: User,
}

/// Payload of a successful `POST /usuarios`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterData {
    #[serde(rename = "id_usuario")]
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_backend_field_names() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id_usuario": 7,
            "primer_nombre": "Ana",
            "primer_apellido": "López",
            "email": "ana@example.com",
            "negocios": [{
                "id_negocio": 1,
                "nombre": "La Esquina",
                "roles": [{ "id_rol": 3, "descripcion": "CAJERO RESTAURANTE" }]
            }],
            "roles_globales": []
        }))
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.businesses[0].roles[0].description, "CAJERO RESTAURANTE");
        assert!(user.middle_name.is_none());
    }

    #[test]
    fn missing_role_lists_default_to_empty() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id_usuario": 1,
            "primer_nombre": "Luis",
            "primer_apellido": "Mora",
            "email": "luis@example.com"
        }))
        .unwrap();

        assert!(user.businesses.is_empty());
        assert!(user.global_roles.is_empty());
    }
}

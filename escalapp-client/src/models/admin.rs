use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Record status as stored by the backend: `"A"` active, `"I"` inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "I")]
    Inactive,
}

/// Business type from `GET /tipos-negocio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessType {
    #[serde(rename = "id_tipo_negocio")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: NaiveDateTime,
}

/// Catalog role from `GET /roles/lista`.
///
/// `business_type_id` is `None` for global roles such as the super admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "id_rol")]
    pub id: i64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "id_tipo_negocio")]
    pub business_type_id: Option<i64>,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: NaiveDateTime,
}

/// A business type with its associated roles resolved client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessTypeWithRoles {
    #[serde(flatten)]
    pub business_type: BusinessType,
    pub roles: Vec<Role>,
}

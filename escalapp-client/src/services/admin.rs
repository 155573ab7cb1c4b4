use std::sync::Arc;

use escalapp_core::error::ApiError;

use crate::models::admin::{BusinessType, BusinessTypeWithRoles, Role};
use crate::services::api::ApiClient;

/// Dashboard data layer: business-type and role catalogs, fetched over the
/// authenticated request path.
pub struct AdminService {
    api: Arc<ApiClient>,
}

impl AdminService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// `GET /tipos-negocio` — active business types. A success envelope
    /// without data is treated as an empty catalog.
    pub async fn business_types(&self) -> Result<Vec<BusinessType>, ApiError> {
        let response = self.api.get("/tipos-negocio").await?;
        let envelope = ApiClient::read_envelope::<Vec<BusinessType>>(response).await?;

        Ok(envelope.data.unwrap_or_default())
    }

    /// `GET /roles/lista` — full role catalog including each role's owning
    /// business type.
    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        let response = self.api.get("/roles/lista").await?;
        let envelope = ApiClient::read_envelope::<Vec<Role>>(response).await?;

        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetches both catalogs concurrently and attaches to each business type
    /// the roles whose `business_type_id` matches it. Global roles attach to
    /// no business type.
    pub async fn business_types_with_roles(&self) -> Result<Vec<BusinessTypeWithRoles>, ApiError> {
        let (business_types, roles) = tokio::try_join!(self.business_types(), self.roles())?;

        Ok(business_types
            .into_iter()
            .map(|business_type| {
                let roles = roles
                    .iter()
                    .filter(|role| role.business_type_id == Some(business_type.id))
                    .cloned()
                    .collect();
                BusinessTypeWithRoles {
                    business_type,
                    roles,
                }
            })
            .collect())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Response envelope used by every admin_ws endpoint:
/// `{ success, message, data?, errors? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
}

impl<T> ApiResponse<T> {
    /// Yields `data` from a successful envelope; a failure envelope is mapped
    /// through `on_failure` with the server-provided message.
    pub fn data_or<F>(self, on_failure: F) -> Result<T, ApiError>
    where
        F: FnOnce(String) -> ApiError,
    {
        if self.success {
            self.data.ok_or_else(|| {
                ApiError::UnexpectedResponse(
                    "envelope marked success but carried no data".to_string(),
                )
            })
        } else {
            Err(on_failure(self.message))
        }
    }

    /// Collapses the envelope to success/failure, discarding any payload.
    pub fn ok_or<F>(self, on_failure: F) -> Result<(), ApiError>
    where
        F: FnOnce(String) -> ApiError,
    {
        if self.success {
            Ok(())
        } else {
            Err(on_failure(self.message))
        }
    }
}

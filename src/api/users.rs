use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::schemas::register_schema::{RegisterPayload, RegisterResponseSchema};

// Raw response for POST /users. The backend reports failures both through the
// status code and through 2xx bodies that lack a token, so everything is
// optional here and sorted out below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody {
    code_intern: Option<String>,
    message: Option<String>,
    token: Option<String>,
}

impl ApiClient {
    /// POST /users. Registers a new account.
    pub async fn register(
        &self,
        payload: &RegisterPayload,
    ) -> Result<RegisterResponseSchema, ApiError> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body: RegisterBody = response.json().await?;

        match body.token {
            Some(token) if status.is_success() => Ok(RegisterResponseSchema {
                code_intern: body.code_intern,
                message: body.message.unwrap_or_else(|| "User registered".to_string()),
                token,
            }),
            _ => Err(ApiError::Rejected {
                status,
                code: body.code_intern,
                message: body
                    .message
                    .unwrap_or_else(|| "Failed to register user".to_string()),
            }),
        }
    }
}

use super::{ApiClient, ApiError};
use crate::schemas::login_schema::{LoginResponseSchema, LoginSchema};

impl ApiClient {
    /// POST /auth/login. Exchanges credentials for a bearer token.
    pub async fn login(&self, credentials: &LoginSchema) -> Result<LoginResponseSchema, ApiError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response, "Login failed").await);
        }

        Ok(response.json().await?)
    }
}

use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Connection settings for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_BASE_URL is not set")]
    MissingBaseUrl,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. A trailing slash is stripped
    /// so endpoint paths can always be joined with a leading one.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        Self {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the `API_BASE_URL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_BASE_URL_ENV).map_err(|_| ConfigError::MissingBaseUrl)?;
        Ok(Self::new(url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

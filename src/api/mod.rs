//! Stateless client for the catalog backend REST API.
//!
//! Every authenticated call takes the bearer token explicitly; reading the
//! session store is the caller's concern. Each function issues exactly one
//! request: no retries, no timeout overrides beyond the platform default.

mod auth;
mod error;
mod products;
mod users;

pub use error::ApiError;

use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

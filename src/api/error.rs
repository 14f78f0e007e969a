use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Transport and body-decoding failures fold into `Network`; a non-2xx (or
/// otherwise unusable) response becomes `Rejected`, with the message taken
/// from the body when one was provided.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected {
        status: StatusCode,
        /// Structured error code (`codeIntern`) when the backend sent one.
        code: Option<String>,
        message: String,
    },
}

// Error body shape shared by every endpoint: {codeIntern?, message?}.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code_intern: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build a `Rejected` error from a non-2xx response, falling back to
    /// `fallback` when the body carries no message.
    pub(crate) async fn from_response(response: reqwest::Response, fallback: &str) -> Self {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Self::Rejected {
            status,
            code: body.code_intern,
            message: body.message.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Structured backend error code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            Self::Network(_) => None,
        }
    }
}

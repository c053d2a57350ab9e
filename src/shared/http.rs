//! Response decoding shared by the HTTP adapters.
//!
//! The backend reports failures as a JSON body shaped `{ "message": ... }`.
//! When that body is missing or unparsable, the status line is used as the
//! error message instead, matching what the admin UI displays verbatim.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Resource not found")]
    NotFound,

    /// Non-2xx response; carries the backend's own message so validation
    /// errors (duplicate slug, missing field) reach the user unchanged.
    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        HttpError::Network(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode a JSON response, translating error statuses into [`HttpError`].
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HttpError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(HttpError::Unauthorized);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(HttpError::NotFound);
    }

    if !status.is_success() {
        let status_line = format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("request failed")
        );
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(status_line);
        return Err(HttpError::Rejected(message));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::Decode(e.to_string()))
}

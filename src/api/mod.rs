//! Backend API Client
//!
//! One function per backend operation, one HTTP round trip each. Non-2xx
//! responses become typed [`ApiError`]s; nothing is retried, cached or logged
//! on failure.

mod articles;
mod feedback;

use std::fmt;

use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;

/// Backend operation, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Create,
    Fetch,
    Feedback,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Search => "search",
            Operation::Create => "create",
            Operation::Fetch => "load article",
            Operation::Feedback => "feedback submission",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{operation} failed: {status_text}")]
    Http {
        operation: Operation,
        status: u16,
        status_text: String,
    },
    /// 404 on article lookup
    #[error("article does not exist")]
    NotFound,
    /// Non-2xx feedback response carrying a `detail` message
    #[error("{0}")]
    Rejected(String),
    /// The request could not complete
    #[error("network error: {0}")]
    Transport(String),
    /// 2xx response with an unexpected body
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.as_str())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<RawResponse> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Status and body of a completed round trip
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    fn status_text(&self) -> String {
        self.status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| self.status.as_u16().to_string())
    }

    fn http_error(&self, operation: Operation) -> ApiError {
        ApiError::Http {
            operation,
            status: self.status.as_u16(),
            status_text: self.status_text(),
        }
    }

    /// Decode a 2xx body, or report the status as a failure of `operation`
    fn json<T: DeserializeOwned>(&self, operation: Operation) -> ApiResult<T> {
        if !self.status.is_success() {
            return Err(self.http_error(operation));
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    }
}

//! Client error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Label Studio API error
    #[error("Label Studio error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Rejected credentials
    #[error("Unauthorized ({status}): {detail}")]
    Unauthorized { status: u16, detail: String },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server is reachable but not healthy
    #[error("Label Studio is not healthy: status {0}")]
    Unhealthy(String),

    /// Project not found
    #[error("Project not found: {0}")]
    ProjectNotFound(u64),
}

impl ClientError {
    /// Build an error from a non-2xx response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                "no response body".to_string()
            } else {
                body.trim().to_string()
            }
        });

        match status {
            401 | 403 => Self::Unauthorized { status, detail },
            _ => Self::Api { status, detail },
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_)) || matches!(self, Self::Api { status: 404, .. })
    }

    /// Check if the server rejected the access key
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

// Django REST framework reports errors as `{"detail": "..."}`.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

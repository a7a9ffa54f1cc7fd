//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from Grafana.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body could not be interpreted.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Connection refused or otherwise not established.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No usable bearer token was configured.
    #[error("API token is required")]
    MissingApiToken,
}

impl ClientError {
    /// HTTP status carried by the error, if Grafana answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401)
    }

    /// Check if the server refused access to an otherwise authenticated caller.
    pub fn is_permission_error(&self) -> bool {
        self.status() == Some(403)
    }

    /// Check if this error never reached an HTTP response.
    pub fn is_transport_error(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::ConnectionRefused(_) => true,
            Self::HttpError(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

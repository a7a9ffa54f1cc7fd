//! Single-attempt request execution with status mapping and metrics.
//!
//! Responsibilities:
//! - Send a prepared `reqwest::RequestBuilder` exactly once.
//! - Turn non-2xx responses into [`ClientError::ApiError`], using Grafana's
//!   `{"message": ...}` body when it has one.
//! - Classify transport failures as timeouts or refused connections.
//! - Record request, duration and error metrics when a collector is given.
//!
//! Does NOT handle:
//! - Retries. A failed request is reported to the caller as is.
//! - Body parsing for successful responses (see [`read_json`]).

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Header some proxies in front of Grafana use to tag requests.
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Error body shape Grafana uses for most failures.
#[derive(Debug, Deserialize)]
struct GrafanaErrorBody {
    message: String,
}

/// Send an HTTP request once and map the outcome to a [`Result`].
///
/// # Arguments
///
/// * `builder` - The prepared request
/// * `endpoint` - Endpoint path used as the metrics label (e.g. `/api/search`)
/// * `method` - HTTP method used as the metrics label
/// * `metrics` - Optional collector
///
/// # Errors
///
/// - [`ClientError::ApiError`] for any non-2xx status
/// - [`ClientError::Timeout`] / [`ClientError::ConnectionRefused`] for
///   transport failures that reqwest can classify
/// - [`ClientError::HttpError`] for everything else reqwest reports
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let start = Instant::now();

    let result = match builder.send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, start.elapsed(), Some(status));
            }
            if response.status().is_success() {
                Ok(response)
            } else {
                Err(api_error(response).await)
            }
        }
        Err(e) => {
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, start.elapsed(), None);
            }
            Err(transport_error(e))
        }
    };

    if let Err(ref e) = result {
        debug!(endpoint, method, error = %e, "Request failed");
        if let Some(m) = metrics {
            m.record_client_error(endpoint, method, e);
        }
    }

    result
}

/// Read a successful response body as JSON.
///
/// Parse failures become [`ClientError::InvalidResponse`] naming the model
/// and are counted as deserialization failures.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    model_type: &'static str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let body = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&body).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, model_type);
        }
        ClientError::InvalidResponse(format!("Failed to parse {}: {}", model_type, e))
    })
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    ClientError::ApiError {
        status,
        url,
        message: error_message(&body),
        request_id,
    }
}

/// Extract Grafana's error message, falling back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<GrafanaErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().to_string(),
    }
}

fn transport_error(e: reqwest::Error) -> ClientError {
    let url = e.url().map(|u| u.to_string()).unwrap_or_default();
    if e.is_timeout() {
        ClientError::Timeout(url)
    } else if e.is_connect() {
        ClientError::ConnectionRefused(url)
    } else {
        ClientError::HttpError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_grafana_message() {
        assert_eq!(
            error_message(r#"{"message":"Dashboard not found","status":"not-found"}"#),
            "Dashboard not found"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }
}

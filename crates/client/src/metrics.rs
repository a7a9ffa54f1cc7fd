//! Metrics collection for Grafana API calls and backup outcomes.
//!
//! This module records:
//! - Request latency histograms
//! - Request and error counters
//! - Dashboards written and failed during a backup run
//!
//! # What this module does NOT handle:
//! - Metrics exposition (see [`crate::metrics_exporter`])
//! - Persistent storage of metrics
//!
//! # Invariants
//! - Label names are consistent: `endpoint`, `method`, `status`, `error_category`
//! - Recording is infallible and a no-op when the collector is disabled
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "grafana_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "grafana_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "grafana_api_errors_total";

/// Metric name for deserialization failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "grafana_api_deserialization_failures_total";

/// Metric name for dashboards successfully written to disk.
pub const METRIC_DASHBOARDS_WRITTEN: &str = "grafana_backup_dashboards_written_total";

/// Metric name for dashboards that could not be backed up.
pub const METRIC_DASHBOARDS_FAILED: &str = "grafana_backup_dashboards_failed_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Response body could not be parsed
    Parse,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ConnectionRefused(_) => ErrorCategory::Transport,
            ClientError::InvalidResponse(_) => ErrorCategory::Parse,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) => {
                if e.is_timeout() {
                    ErrorCategory::Timeout
                } else if e.is_connect() || e.is_request() {
                    ErrorCategory::Transport
                } else if e.is_decode() {
                    ErrorCategory::Parse
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::InvalidUrl(_) | ClientError::MissingApiToken => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for Grafana API calls.
///
/// A thin wrapper around the `metrics` crate macros that keeps labels
/// consistent across call sites.
///
/// # Example
///
/// ```rust,ignore
/// use grafana_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("/api/search", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error from a ClientError, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        let category = ErrorCategory::from(error);
        self.record_error(endpoint, method, category);
    }

    /// Record a deserialization failure.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `model_type` - The type name that failed to deserialize
    pub fn record_deserialization_failure(&self, endpoint: &str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model_type" => model_type.to_string(),
        )
        .increment(1);
    }

    /// Record a dashboard written to the backup directory.
    pub fn record_dashboard_written(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DASHBOARDS_WRITTEN).increment(1);
    }

    /// Record a dashboard that failed to back up.
    pub fn record_dashboard_failed(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DASHBOARDS_FAILED).increment(1);
    }
}

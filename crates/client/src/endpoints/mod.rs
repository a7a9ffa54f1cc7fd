//! REST API endpoint implementations.
//!
//! Every endpoint is a free function taking the shared `reqwest::Client`,
//! the normalized base URL and the bearer token, so it can be exercised
//! directly against a mock server.

mod dashboards;
mod request;
mod search;
pub mod url_encoding;

pub use dashboards::get_dashboard;
pub use request::{read_json, send_request};
pub use search::search;
pub use url_encoding::{encode_path_segment, encode_resource_uri};

//! Data models for Grafana API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod dashboards;
pub mod search;
pub mod templating;

pub use dashboards::DashboardDocument;
pub use search::{ResourceDescriptor, SearchKind, SearchOptions};
pub use templating::reset_template_variables;

//! Dashboard models for the `/api/dashboards/<uri>` endpoint.

use grafana_config::{BackupMode, ResetScope};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::templating::reset_template_variables;

/// Dashboard detail document as returned by Grafana.
///
/// `dashboard` is opaque JSON. Every other top-level field, `meta` included,
/// is kept verbatim in `extra` so a sanitized document round-trips everything
/// it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDocument {
    pub dashboard: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DashboardDocument {
    /// The `meta` object Grafana sent alongside the dashboard, if any.
    pub fn meta(&self) -> Option<&Value> {
        self.extra.get("meta")
    }

    /// True only when `meta.isFolder` is the boolean `true`.
    pub fn is_folder(&self) -> bool {
        self.meta()
            .and_then(|meta| meta.get("isFolder"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Reset template variables unless the document is a folder.
    ///
    /// Returns the number of variables reset.
    pub fn sanitize(&mut self, scope: ResetScope) -> usize {
        if self.is_folder() {
            return 0;
        }
        reset_template_variables(&mut self.dashboard, scope)
    }

    /// Produce the JSON value written to the backup file.
    ///
    /// Raw mode keeps only the `dashboard` field, untouched. Sanitized mode
    /// keeps the whole document after [`Self::sanitize`].
    pub fn into_backup(mut self, mode: BackupMode, scope: ResetScope) -> Value {
        match mode {
            BackupMode::Raw => self.dashboard,
            BackupMode::Sanitized => {
                self.sanitize(scope);
                let mut document = self.extra;
                document.insert("dashboard".to_string(), self.dashboard);
                Value::Object(document)
            }
        }
    }
}

//! Template-variable sanitizing for dashboard definitions.
//!
//! Responsibilities:
//! - Reset `current` to an empty selection and clear `options` for entries of
//!   `dashboard.templating.list`.
//!
//! Does NOT handle:
//! - Deciding whether a document should be sanitized at all (folders are
//!   skipped by [`crate::models::DashboardDocument::sanitize`]).
//!
//! Invariants:
//! - Fields other than `current` and `options` are never touched.
//! - A dashboard without a templating list is left as is.

use grafana_config::ResetScope;
use serde_json::{Value, json};

/// Reset template-variable selections inside a dashboard definition.
///
/// `ResetScope::First` reproduces the long-standing behavior where every
/// pass over the list targeted entry 0, so only the first variable ends up
/// reset. `ResetScope::All` resets each variable.
///
/// Returns the number of entries that were reset.
pub fn reset_template_variables(dashboard: &mut Value, scope: ResetScope) -> usize {
    let Some(list) = dashboard
        .pointer_mut("/templating/list")
        .and_then(Value::as_array_mut)
    else {
        return 0;
    };

    match scope {
        ResetScope::First => list.first_mut().map_or(0, |entry| reset_variable(entry) as usize),
        ResetScope::All => list
            .iter_mut()
            .map(reset_variable)
            .filter(|reset| *reset)
            .count(),
    }
}

fn reset_variable(entry: &mut Value) -> bool {
    let Some(variable) = entry.as_object_mut() else {
        return false;
    };
    variable.insert("current".to_string(), json!({ "text": "", "value": "" }));
    variable.insert("options".to_string(), json!([]));
    true
}

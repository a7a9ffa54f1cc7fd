//! Search models for the `/api/search` endpoint.
//!
//! Grafana answers a search with a flat JSON array; every element describes
//! one dashboard or folder. Only `uri` drives the backup, the remaining
//! fields are kept for listings and log context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One element of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Resource URI such as `db/test`, relative to `/api/dashboards/`.
    #[serde(default)]
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Resource type as reported by Grafana (`dash-db`, `dash-folder`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
}

impl ResourceDescriptor {
    /// Descriptor carrying only a URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Second `/`-separated segment of the URI, used as the backup file stem.
    ///
    /// Returns `None` when the segment is missing, empty, a relative path
    /// component, or contains a path separator or NUL byte.
    pub fn backup_name(&self) -> Option<&str> {
        let segment = self.uri.split('/').nth(1)?;
        if segment.is_empty()
            || segment == "."
            || segment == ".."
            || segment.contains(['\\', '\0'])
        {
            return None;
        }
        Some(segment)
    }

    /// Whether Grafana reported this resource as a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.as_deref() == Some(SearchKind::DashFolder.as_str())
    }
}

/// Resource type filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    DashDb,
    DashFolder,
}

impl SearchKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SearchKind::DashDb => "dash-db",
            SearchKind::DashFolder => "dash-folder",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dash-db" => Ok(SearchKind::DashDb),
            "dash-folder" => Ok(SearchKind::DashFolder),
            other => Err(format!(
                "unknown search type '{other}', expected dash-db or dash-folder"
            )),
        }
    }
}

/// Optional filters for a search request.
///
/// With every field unset the request carries no query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub kind: Option<SearchKind>,
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Query parameters in the order Grafana documents them.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(query) = &self.query {
            params.push(("query".to_string(), query.clone()));
        }
        for tag in &self.tags {
            params.push(("tag".to_string(), tag.clone()));
        }
        if let Some(kind) = self.kind {
            params.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_name_uses_second_segment() {
        assert_eq!(ResourceDescriptor::from_uri("db/test").backup_name(), Some("test"));
        assert_eq!(
            ResourceDescriptor::from_uri("db/test/extra").backup_name(),
            Some("test")
        );
    }

    #[test]
    fn test_backup_name_rejects_unusable_segments() {
        for uri in ["", "db", "db/", "db/.", "db/..", "db/a\\b", "/"] {
            assert_eq!(
                ResourceDescriptor::from_uri(uri).backup_name(),
                None,
                "uri {uri:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_descriptor_parses_grafana_fields() {
        let json = r#"{
            "id": 1,
            "uid": "abc",
            "title": "Production Overview",
            "uri": "db/production-overview",
            "url": "/d/abc/production-overview",
            "type": "dash-db",
            "tags": ["prod"],
            "isStarred": false,
            "folderTitle": "Ops"
        }"#;
        let descriptor: ResourceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.uri, "db/production-overview");
        assert_eq!(descriptor.uid.as_deref(), Some("abc"));
        assert_eq!(descriptor.kind.as_deref(), Some("dash-db"));
        assert_eq!(descriptor.tags, vec!["prod".to_string()]);
        assert_eq!(descriptor.folder_title.as_deref(), Some("Ops"));
        assert!(!descriptor.is_folder());
    }

    #[test]
    fn test_descriptor_with_only_uri() {
        let descriptor: ResourceDescriptor = serde_json::from_str(r#"{"uri":"db/x"}"#).unwrap();
        assert_eq!(descriptor, ResourceDescriptor::from_uri("db/x"));
    }

    #[test]
    fn test_search_kind_from_str() {
        assert_eq!("dash-db".parse::<SearchKind>().unwrap(), SearchKind::DashDb);
        assert_eq!(
            "DASH-FOLDER".parse::<SearchKind>().unwrap(),
            SearchKind::DashFolder
        );
        assert!("dashboard".parse::<SearchKind>().is_err());
    }

    #[test]
    fn test_query_params_empty_by_default() {
        assert!(SearchOptions::default().query_params().is_empty());
    }

    #[test]
    fn test_query_params_repeat_tags() {
        let options = SearchOptions {
            query: Some("cpu".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
            kind: Some(SearchKind::DashDb),
            limit: Some(50),
        };
        let params = options.query_params();
        assert_eq!(
            params,
            vec![
                ("query".to_string(), "cpu".to_string()),
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b".to_string()),
                ("type".to_string(), "dash-db".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );
    }
}

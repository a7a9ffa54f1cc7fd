//! URL encoding for resource URIs interpolated into API paths.
//!
//! Search results hand back URIs such as `db/my-dashboard`. Each
//! `/`-separated segment is percent-encoded on its own so slugs with spaces
//! or reserved characters cannot change the request path.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::{encode_path_segment, encode_resource_uri};
//!
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! assert_eq!(encode_resource_uri("db/cpu load").unwrap(), "db/cpu%20load");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

use crate::error::{ClientError, Result};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 plus characters that are reserved in URI templates,
/// would start a query or fragment, or would cause double-decoding.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'%')      // Percent (prevents double-encoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b';')      // Semicolon
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Encode a resource URI segment by segment, keeping its `/` separators.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] for an empty URI or one containing a
/// `.` or `..` segment, which would escape the dashboard endpoint.
pub fn encode_resource_uri(uri: &str) -> Result<String> {
    let trimmed = uri.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::InvalidUrl(format!(
            "Empty resource URI '{}'",
            uri
        )));
    }

    let mut encoded = Vec::new();
    for segment in trimmed.split('/') {
        if segment == "." || segment == ".." {
            return Err(ClientError::InvalidUrl(format!(
                "Relative segment in resource URI '{}'",
                uri
            )));
        }
        encoded.push(encode_path_segment(segment));
    }
    Ok(encoded.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("simple"), "simple");
        assert_eq!(encode_path_segment("cpu-usage_2"), "cpu-usage_2");
        assert_eq!(encode_path_segment("my.dashboard"), "my.dashboard");
    }

    #[test]
    fn test_encode_space_and_slash() {
        assert_eq!(encode_path_segment("two words"), "two%20words");
        assert_eq!(encode_path_segment("a/b/c"), "a%2Fb%2Fc");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_question_and_hash() {
        assert_eq!(encode_path_segment("a?b"), "a%3Fb");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_resource_uri_keeps_separators() {
        assert_eq!(encode_resource_uri("db/test").unwrap(), "db/test");
        assert_eq!(encode_resource_uri("/db/test").unwrap(), "db/test");
        assert_eq!(encode_resource_uri("db/a b?c").unwrap(), "db/a%20b%3Fc");
    }

    #[test]
    fn test_resource_uri_rejects_traversal() {
        assert!(matches!(
            encode_resource_uri("db/../admin"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            encode_resource_uri("./x"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(encode_resource_uri(""), Err(ClientError::InvalidUrl(_))));
    }
}

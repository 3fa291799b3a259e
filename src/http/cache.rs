//! HTTP cache validation module
//!
//! Provides `ETag` generation, `Last-Modified` formatting, and conditional
//! request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Generate `ETag` using fast hashing
///
/// # Arguments
/// * `content` - File content
///
/// # Returns
/// Quoted `ETag` string, e.g., `"abc123def"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if client's `If-None-Match` header matches the server's `ETag`
///
/// Supports:
/// - Single `ETag`: `"abc123"`
/// - Multiple `ETags`: `"abc123", "def456"`
/// - Wildcard: `*`
///
/// # Returns
/// Returns true if matched (should return 304), false otherwise
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        // Handle multiple ETags separated by comma
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

/// Format a filesystem timestamp as an HTTP date (IMF-fixdate, GMT)
///
/// Used for the `Last-Modified` response header.
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Check if client's `If-Modified-Since` header covers the file's mtime
///
/// HTTP dates carry second granularity, so the comparison truncates the
/// mtime to seconds. Unparseable header values never match.
///
/// # Returns
/// Returns true if the file is unchanged (should return 304), false otherwise
pub fn check_modified_since(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(header) = if_modified_since else {
        return false;
    };
    let Ok(since) = DateTime::parse_from_rfc2822(header) else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

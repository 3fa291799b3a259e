//! MIME type resolution module
//!
//! Maps file extensions to Content-Type values. Overrides configured at
//! startup are consulted before the built-in table.

use std::collections::HashMap;

/// Fallback for extensions no table knows about
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension table with startup-time overrides.
///
/// Overrides win over the built-in table, so a configured entry can both
/// add a missing type (`wasm`) and replace a built-in one. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct MimeTypes {
    overrides: HashMap<String, String>,
}

impl MimeTypes {
    /// Build the table from configured overrides. Keys are matched
    /// case-insensitively, so they are lowercased here once.
    pub fn new(overrides: &HashMap<String, String>) -> Self {
        Self {
            overrides: overrides
                .iter()
                .map(|(ext, ty)| (ext.to_ascii_lowercase(), ty.clone()))
                .collect(),
        }
    }

    /// Resolve the Content-Type for a file extension
    ///
    /// Lookup order: overrides, built-in table, `application/octet-stream`.
    pub fn content_type(&self, extension: Option<&str>) -> &str {
        let Some(ext) = extension else {
            return DEFAULT_CONTENT_TYPE;
        };
        let ext = ext.to_ascii_lowercase();
        if let Some(forced) = self.overrides.get(&ext) {
            return forced;
        }
        builtin_content_type(&ext).unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Built-in Content-Type mapping for common file extensions
///
/// Returns `None` for unknown extensions so callers can distinguish "no
/// mapping" from an explicit `application/octet-stream` entry.
pub fn builtin_content_type(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css",
        "txt" | "md" => "text/plain; charset=utf-8",
        "xml" => "application/xml",

        // Scripts
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" | "ogv" => "video/ogg",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Documents
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" | "gzip" => "application/gzip",
        "tar" => "application/x-tar",

        _ => return None,
    };
    Some(content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wasm_table() -> MimeTypes {
        let mut overrides = HashMap::new();
        overrides.insert("wasm".to_string(), "application/wasm".to_string());
        MimeTypes::new(&overrides)
    }

    #[test]
    fn test_builtin_types() {
        assert_eq!(
            builtin_content_type("html"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(builtin_content_type("css"), Some("text/css"));
        assert_eq!(builtin_content_type("js"), Some("application/javascript"));
        assert_eq!(builtin_content_type("png"), Some("image/png"));
        assert_eq!(builtin_content_type("wasm"), None);
        assert_eq!(builtin_content_type("xyz"), None);
    }

    #[test]
    fn test_override_adds_missing_type() {
        let table = wasm_table();
        assert_eq!(table.content_type(Some("wasm")), "application/wasm");
    }

    #[test]
    fn test_override_beats_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("svg".to_string(), "text/plain".to_string());
        let table = MimeTypes::new(&overrides);
        assert_eq!(table.content_type(Some("svg")), "text/plain");
    }

    #[test]
    fn test_builtin_fallthrough() {
        let table = wasm_table();
        assert_eq!(table.content_type(Some("json")), "application/json");
        assert_eq!(table.content_type(Some("JSON")), "application/json");
    }

    #[test]
    fn test_unknown_extension() {
        let table = wasm_table();
        assert_eq!(table.content_type(Some("xyz")), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.content_type(None), DEFAULT_CONTENT_TYPE);
    }
}

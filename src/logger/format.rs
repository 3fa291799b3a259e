//! Access log format module
//!
//! Supports the two classic formats:
//! - `common` (Common Log Format - CLF)
//! - `combined` (Apache/Nginx combined format)

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version (1.0, 1.1, 2)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with the current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
        }
    }

    /// Format the log entry according to the specified format
    ///
    /// Unknown format names fall back to `common`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => self.format_combined(),
            _ => self.format_common(),
        }
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

/// Version label for the request line
pub fn version_label(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:54321".to_string(),
            "GET".to_string(),
            "/app.wasm".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 1024;
        entry
    }

    #[test]
    fn test_common_format() {
        let line = sample_entry().format("common");
        assert!(line.starts_with("127.0.0.1:54321 - - ["));
        assert!(line.contains("\"GET /app.wasm HTTP/1.1\" 200 1024"));
        assert!(!line.ends_with('"'));
    }

    #[test]
    fn test_combined_format() {
        let mut entry = sample_entry();
        entry.user_agent = Some("curl/8.0".to_string());
        let line = entry.format("combined");
        assert!(line.contains("\"GET /app.wasm HTTP/1.1\" 200 1024"));
        assert!(line.ends_with("\"-\" \"curl/8.0\""));
    }

    #[test]
    fn test_unknown_format_falls_back_to_common() {
        let entry = sample_entry();
        assert_eq!(entry.format("bogus"), entry.format("common"));
    }
}

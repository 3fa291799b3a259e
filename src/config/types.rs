// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub serve: ServeConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
///
/// The port stays a string so the `PORT` environment value is bound and
/// logged verbatim; parsing happens in `Config::socket_addr`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

/// Static serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServeConfig {
    /// Root directories in priority order; the first root containing a
    /// requested file wins
    pub roots: Vec<String>,
    /// File names tried, in order, for directory requests
    pub index_files: Vec<String>,
    /// Extension-to-Content-Type overrides, consulted before the built-in
    /// table
    pub mime_overrides: HashMap<String, String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (common or combined)
    pub access_log_format: String,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

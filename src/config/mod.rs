// Configuration module entry point
// Loads settings from defaults, an optional config file, and the environment

mod state;
mod types;

use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

// Re-export public types
pub use state::ServerState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServeConfig, ServerConfig};

/// Literal fallback when no port is configured and `PORT` is unset or empty
pub const DEFAULT_PORT: &str = "3000";

/// Default serving roots: the working directory first, the cargo wasm
/// debug output second
const DEFAULT_ROOTS: [&str; 2] = [".", "target/wasm32-unknown-unknown/debug"];

impl Config {
    /// Load configuration from the default file stem ("wasmserve")
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("wasmserve")
    }

    /// Load configuration from the specified file path (without extension)
    ///
    /// Precedence, lowest to highest: built-in defaults, config file
    /// (optional), `WASMSERVE_*` environment variables, the bare `PORT`
    /// environment variable.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", DEFAULT_PORT)?
            .set_default("serve.roots", DEFAULT_ROOTS.to_vec())?
            .set_default("serve.index_files", vec!["index.html"])?
            .set_default("serve.mime_overrides", default_mime_overrides())?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("WASMSERVE").separator("__"));

        // The conventional bare PORT variable wins over every other source
        // when set and non-empty. It is applied as an explicit override
        // because the environment source above cannot map an unprefixed
        // variable into the nested server table.
        if let Ok(port) = env::var("PORT") {
            if !port.trim().is_empty() {
                builder = builder.set_override("server.port", port)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Listen address for the serving socket
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.display_port())
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }

    /// The port as it is bound and logged
    ///
    /// An empty or whitespace value falls back to the default, so a blank
    /// `port` entry in the config file behaves like an absent one.
    pub fn display_port(&self) -> &str {
        let port = self.server.port.trim();
        if port.is_empty() {
            DEFAULT_PORT
        } else {
            port
        }
    }
}

/// The one override the built-in table is missing: wasm modules must be
/// served as `application/wasm` for streaming instantiation to work.
fn default_mime_overrides() -> HashMap<String, String> {
    let mut overrides = HashMap::new();
    overrides.insert("wasm".to_string(), "application/wasm".to_string());
    overrides
}

#[cfg(test)]
mod tests {
    use super::*;

    // A file stem no test directory contains, so only defaults and the
    // environment apply.
    const MISSING_FILE: &str = "wasmserve-test-nonexistent";

    // Environment variables are process-global, so every load test runs
    // sequentially inside this single test.
    #[test]
    fn test_load_defaults_and_port_override() {
        env::remove_var("PORT");
        let cfg = Config::load_from(MISSING_FILE).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.display_port(), "3000");
        assert_eq!(
            cfg.serve.roots,
            vec![".", "target/wasm32-unknown-unknown/debug"]
        );
        assert_eq!(cfg.serve.index_files, vec!["index.html"]);
        assert_eq!(
            cfg.serve.mime_overrides.get("wasm").map(String::as_str),
            Some("application/wasm")
        );
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);

        env::set_var("PORT", "8080");
        let cfg = Config::load_from(MISSING_FILE).unwrap();
        assert_eq!(cfg.display_port(), "8080");
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);

        // Empty PORT behaves like an unset one
        env::set_var("PORT", "");
        let cfg = Config::load_from(MISSING_FILE).unwrap();
        assert_eq!(cfg.display_port(), "3000");

        env::set_var("PORT", "not-a-port");
        let cfg = Config::load_from(MISSING_FILE).unwrap();
        assert!(cfg.socket_addr().is_err());

        env::remove_var("PORT");
    }

    #[test]
    fn test_blank_configured_port_falls_back() {
        let cfg = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: "   ".to_string(),
            },
            serve: ServeConfig {
                roots: vec![".".to_string()],
                index_files: vec![],
                mime_overrides: HashMap::new(),
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "common".to_string(),
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
            },
        };
        assert_eq!(cfg.display_port(), "3000");
        assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
    }
}

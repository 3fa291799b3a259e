// Server state module
// Immutable per-process state shared across request tasks

use std::path::PathBuf;

use crate::http::MimeTypes;

use super::types::Config;

/// State shared by every request task
///
/// Built once at startup and never mutated, so request handling needs no
/// locks (each task holds an `Arc` to it).
pub struct ServerState {
    pub config: Config,
    /// Serving roots in priority order
    pub roots: Vec<PathBuf>,
    /// Content-Type table with configured overrides applied
    pub mime: MimeTypes,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let roots = config.serve.roots.iter().map(PathBuf::from).collect();
        let mime = MimeTypes::new(&config.serve.mime_overrides);
        Self {
            config,
            roots,
            mime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, PerformanceConfig, ServeConfig, ServerConfig};
    use std::collections::HashMap;

    #[test]
    fn test_roots_preserve_order() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: "3000".to_string(),
            },
            serve: ServeConfig {
                roots: vec![
                    ".".to_string(),
                    "target/wasm32-unknown-unknown/debug".to_string(),
                ],
                index_files: vec!["index.html".to_string()],
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

        let state = ServerState::new(config);
        assert_eq!(state.roots.len(), 2);
        assert_eq!(state.roots[0], PathBuf::from("."));
        assert_eq!(
            state.roots[1],
            PathBuf::from("target/wasm32-unknown-unknown/debug")
        );
    }
}

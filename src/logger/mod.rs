//! Logger module
//!
//! Startup, error, and access logging. Info and access lines go to
//! stdout, errors and warnings to stderr.

mod format;

pub use format::{version_label, AccessLogEntry};

/// Log the startup line once the listener is bound
pub fn log_server_start(port: &str) {
    println!("Listening on port {port}.");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

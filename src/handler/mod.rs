//! Request handler module
//!
//! Method gate plus static file resolution across the configured roots.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

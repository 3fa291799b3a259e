//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, header
//! extraction, and dispatch to static file resolution.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::ServerState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Request context encapsulating what file resolution needs
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<ServerState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let response = match check_http_method(method) {
        Some(response) => response,
        None => {
            let ctx = RequestContext {
                path,
                is_head,
                if_none_match: header_string(&req, "if-none-match"),
                if_modified_since: header_string(&req, "if-modified-since"),
                range_header: header_string(&req, "range"),
            };
            static_files::serve(&ctx, &state).await
        }
    };

    if state.config.logging.access_log {
        let mut entry =
            AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path.to_string());
        entry.http_version = logger::version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length(&response);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Gate on HTTP method: GET/HEAD pass through, OPTIONS is answered
/// directly, everything else is 405
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Owned copy of a request header value, if present and valid UTF-8
fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Body size as reported by the response's own Content-Length
fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

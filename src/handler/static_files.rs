//! Static file serving module
//!
//! Resolves request paths against the configured roots in priority order
//! and builds file responses with cache validation and range support.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::ServerState;
use crate::handler::router::RequestContext;
use crate::http::range::RangeOutcome;
use crate::http::{self, cache, response};
use crate::logger;

/// A file resolved from disk, ready to be turned into a response
struct ResolvedFile {
    content: Vec<u8>,
    modified: Option<SystemTime>,
    path: PathBuf,
}

/// Serve a request path from the first root that contains it
pub async fn serve(ctx: &RequestContext<'_>, state: &ServerState) -> Response<Full<Bytes>> {
    for root in &state.roots {
        if let Some(file) = resolve_in_root(root, ctx.path, &state.config.serve.index_files).await {
            let content_type = state
                .mime
                .content_type(file.path.extension().and_then(|e| e.to_str()));
            return build_response(ctx, file, content_type);
        }
    }
    http::build_404_response()
}

/// Resolve a request path inside a single root
///
/// Returns `None` when the root does not contain a matching file; the
/// caller falls through to the next root (and ultimately to 404).
async fn resolve_in_root(root: &Path, path: &str, index_files: &[String]) -> Option<ResolvedFile> {
    // Remove the leading slash and neutralize traversal segments
    let relative = path.trim_start_matches('/').replace("..", "");

    // Roots are allowed to be absent: the wasm target directory only
    // exists after the first build. Resolution just falls through.
    let root_canonical = root.canonicalize().ok()?;

    let mut file_path = root.join(&relative);

    // Directory requests try the configured index files
    if file_path.is_dir() || relative.is_empty() || relative.ends_with('/') {
        file_path = find_index(&file_path, index_files)?;
    }

    // A missing file is the common 404 case, not worth logging
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    let modified = fs::metadata(&file_canonical)
        .await
        .ok()
        .and_then(|m| m.modified().ok());

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    Some(ResolvedFile {
        content,
        modified,
        path: file_canonical,
    })
}

/// First existing index file inside a directory
fn find_index(dir: &Path, index_files: &[String]) -> Option<PathBuf> {
    index_files
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Build the response for a resolved file: conditional checks first, then
/// range handling, then the full body
fn build_response(
    ctx: &RequestContext<'_>,
    file: ResolvedFile,
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(&file.content);
    let modified = file.modified.unwrap_or(SystemTime::UNIX_EPOCH);
    let last_modified = cache::format_http_date(modified);

    // If-None-Match takes precedence over If-Modified-Since (RFC 9110)
    let not_modified = if ctx.if_none_match.is_some() {
        cache::check_etag_match(ctx.if_none_match.as_deref(), &etag)
    } else {
        cache::check_modified_since(ctx.if_modified_since.as_deref(), modified)
    };
    if not_modified {
        return http::build_304_response(&etag);
    }

    let total_size = file.content.len();
    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeOutcome::Partial(range) => {
            let body = Bytes::from(file.content[range.start..=range.end].to_vec());
            response::build_partial_response(
                body,
                content_type,
                &etag,
                &last_modified,
                range,
                total_size,
                ctx.is_head,
            )
        }
        RangeOutcome::NotSatisfiable => http::build_416_response(total_size),
        RangeOutcome::Ignored => response::build_file_response(
            Bytes::from(file.content),
            content_type,
            &etag,
            &last_modified,
            ctx.is_head,
        ),
    }
}

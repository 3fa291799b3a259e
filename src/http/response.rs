//! HTTP response building module
//!
//! Builders for the status codes the file server can answer with. Header
//! assembly failures degrade to an empty response instead of panicking.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::http::range::ByteRange;

/// Methods this server answers; everything else is 405
const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Cache policy of the serving mechanism: always revalidate
const CACHE_CONTROL: &str = "public, max-age=0";

/// Build 200 OK response for a fully served file
pub fn build_file_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    last_modified: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Last-Modified", last_modified)
        .header("Cache-Control", CACHE_CONTROL)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 206 Partial Content response
pub fn build_partial_response(
    data: Bytes,
    content_type: &str,
    etag: &str,
    last_modified: &str,
    range: ByteRange,
    total_size: usize,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(206)
        .header("Content-Type", content_type)
        .header("Content-Length", range.len())
        .header(
            "Content-Range",
            format!("bytes {}-{}/{total_size}", range.start, range.end),
        )
        .header("Accept-Ranges", "bytes")
        .header("ETag", etag)
        .header("Last-Modified", last_modified)
        .header("Cache-Control", CACHE_CONTROL)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response(etag: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(304)
        .header("ETag", etag)
        .header("Cache-Control", CACHE_CONTROL)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: usize) -> Response<Full<Bytes>> {
    Response::builder()
        .status(416)
        .header("Content-Type", "text/plain")
        .header("Content-Range", format!("bytes */{file_size}"))
        .body(Full::new(Bytes::from("Range Not Satisfiable")))
        .unwrap_or_else(|e| {
            log_build_error("416", &e);
            Response::new(Full::new(Bytes::from("Range Not Satisfiable")))
        })
}

/// Build OPTIONS response (204 No Content)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", ALLOWED_METHODS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(resp: &'a Response<Full<Bytes>>, name: &str) -> Option<&'a str> {
        resp.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(
            Bytes::from_static(b"hello"),
            "text/plain; charset=utf-8",
            "\"abc\"",
            "Thu, 01 Jan 1970 00:00:00 GMT",
            false,
        );
        assert_eq!(resp.status(), 200);
        assert_eq!(header(&resp, "Content-Type"), Some("text/plain; charset=utf-8"));
        assert_eq!(header(&resp, "Content-Length"), Some("5"));
        assert_eq!(header(&resp, "ETag"), Some("\"abc\""));
        assert_eq!(header(&resp, "Accept-Ranges"), Some("bytes"));
        assert_eq!(header(&resp, "Cache-Control"), Some("public, max-age=0"));
    }

    #[test]
    fn test_partial_response_content_range() {
        let range = ByteRange { start: 2, end: 4 };
        let resp = build_partial_response(
            Bytes::from_static(b"llo"),
            "text/plain",
            "\"abc\"",
            "Thu, 01 Jan 1970 00:00:00 GMT",
            range,
            10,
            false,
        );
        assert_eq!(resp.status(), 206);
        assert_eq!(header(&resp, "Content-Range"), Some("bytes 2-4/10"));
        assert_eq!(header(&resp, "Content-Length"), Some("3"));
    }

    #[test]
    fn test_status_responses() {
        assert_eq!(build_304_response("\"abc\"").status(), 304);
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_416_response(100).status(), 416);
        assert_eq!(build_options_response().status(), 204);
        assert_eq!(
            header(&build_405_response(), "Allow"),
            Some("GET, HEAD, OPTIONS")
        );
        assert_eq!(
            header(&build_416_response(100), "Content-Range"),
            Some("bytes */100")
        );
    }
}

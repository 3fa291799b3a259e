//! HTTP `Range` header parsing
//!
//! Single-range `bytes=` parsing for resumable downloads (an RFC 7233
//! subset: one range per request, byte units only).

/// A byte range resolved against a known file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte position (inclusive)
    pub start: usize,
    /// Last byte position (inclusive)
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes the range selects
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Outcome of parsing a `Range` header against a file size
#[derive(Debug)]
pub enum RangeOutcome {
    /// Single satisfiable range, serve 206
    Partial(ByteRange),
    /// Syntactically valid but unsatisfiable, serve 416
    NotSatisfiable,
    /// Absent, malformed, or multi-range: serve the full file
    Ignored,
}

/// Parse a `Range` header value
///
/// Supported forms:
/// - `bytes=start-end`
/// - `bytes=start-` (open-ended)
/// - `bytes=-suffix` (last `suffix` bytes)
pub fn parse_range_header(header: Option<&str>, file_size: usize) -> RangeOutcome {
    let Some(value) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Ignored;
    };

    // Multi-range responses need a multipart body; those requests are
    // served whole instead.
    if value.contains(',') {
        return RangeOutcome::Ignored;
    }

    let Some((start, end)) = value.split_once('-') else {
        return RangeOutcome::Ignored;
    };
    let (start, end) = (start.trim(), end.trim());

    if start.is_empty() {
        return suffix_range(end, file_size);
    }
    bounded_range(start, end, file_size)
}

/// Resolve a suffix form such as `-500` (last 500 bytes)
fn suffix_range(suffix: &str, file_size: usize) -> RangeOutcome {
    let Ok(suffix) = suffix.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };
    if suffix == 0 || file_size == 0 {
        return RangeOutcome::NotSatisfiable;
    }
    // A suffix longer than the file selects the whole file.
    RangeOutcome::Partial(ByteRange {
        start: file_size.saturating_sub(suffix),
        end: file_size - 1,
    })
}

/// Resolve `start-` and `start-end` forms
fn bounded_range(start: &str, end: &str, file_size: usize) -> RangeOutcome {
    let Ok(start) = start.parse::<usize>() else {
        return RangeOutcome::Ignored;
    };
    if start >= file_size {
        return RangeOutcome::NotSatisfiable;
    }

    let end = if end.is_empty() {
        file_size - 1
    } else {
        let Ok(end) = end.parse::<usize>() else {
            return RangeOutcome::Ignored;
        };
        if end < start {
            return RangeOutcome::NotSatisfiable;
        }
        end.min(file_size - 1)
    };

    RangeOutcome::Partial(ByteRange { start, end })
}

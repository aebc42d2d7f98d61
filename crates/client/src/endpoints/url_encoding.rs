//! Percent-encoding for URL path segments.
//!
//! Resource names and IDs are user-supplied; without encoding, a name like
//! `prod/copy` would create a nested path and `job?x` would start a query
//! string.

use percent_encoding::{percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 reserved characters plus percent itself (to
/// prevent double-encoding) and slash (to prevent path traversal).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

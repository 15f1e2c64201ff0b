//! Percent-encoding for resource names placed in URL paths.
//!
//! Resource names are interpolated into `/{collection}/{name}`. Without
//! encoding, a name containing `/`, `?` or `#` would change the path or
//! start a query string.
//!
//! # Example
//!
//! ```
//! use azsearch_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("hotels/v2"), "hotels%2Fv2");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a URL path segment.
///
/// RFC 3986 section 3.3 plus `%` (no double decoding) and `/` (no nested paths).
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
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a resource name for use as a single path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

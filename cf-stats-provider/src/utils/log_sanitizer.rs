//! Log sanitization utilities
//!
//! Analytics responses and upstream error pages can be large; only a prefix
//! of them ever reaches debug/error logs or error values.

/// Maximum number of bytes kept from a body.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Bodies within `TRUNCATE_LIMIT` bytes are returned unchanged. Longer ones
/// are cut at the last char boundary at or before the limit and suffixed with
/// the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

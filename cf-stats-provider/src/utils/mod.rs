//! Utility modules.

/// Log sanitization utilities to keep large response bodies out of logs.
pub mod log_sanitizer;

//! Free-text sanitization for display fields.
//!
//! # Responsibility
//! - Neutralize markup, script-scheme prefixes and control characters in
//!   plain text before it is stored on a meeting record.
//!
//! # Invariants
//! - Output never contains `<` or `>`.
//! - Output never contains `javascript:` or `data:`.
//! - Output never exceeds `max_length` characters and has no boundary
//!   whitespace.
//! - Sanitization never fails; unusable input degrades to `""`.
//!
//! This is a filter for display text, not an HTML parser.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Default character cap for sanitized fields.
pub const DEFAULT_MAX_LENGTH: usize = 500;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static ANGLE_BRACKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[<>]").expect("valid angle bracket regex"));
static BLOCKED_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"javascript:|data:").expect("valid scheme regex"));
static INVISIBLE_CHAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x00-\x1F\u{200B}-\u{200D}\u{2060}\u{FEFF}]").expect("valid control char regex")
});

/// Sanitizes `input` and caps it at `max_length` characters.
pub fn sanitize(input: &str, max_length: usize) -> String {
    let visible = INVISIBLE_CHAR_RE.replace_all(input, "");
    let untagged = TAG_RE.replace_all(&visible, "");
    let bracketless = ANGLE_BRACKET_RE.replace_all(&untagged, "");
    let cleaned = strip_blocked_schemes(&bracketless);

    let truncated = cleaned.trim().chars().take(max_length).collect::<String>();
    truncated.trim_end().to_string()
}

/// Sanitizes with `DEFAULT_MAX_LENGTH`.
pub fn sanitize_default(input: &str) -> String {
    sanitize(input, DEFAULT_MAX_LENGTH)
}

/// Sanitizes an untyped JSON value; anything but a string yields `""`.
pub fn sanitize_value(value: &Value, max_length: usize) -> String {
    match value {
        Value::String(text) => sanitize(text, max_length),
        _ => String::new(),
    }
}

/// Removes blocked scheme prefixes until none remain.
///
/// A single pass can splice a new prefix together (`javajavascript:script:`).
fn strip_blocked_schemes(input: &str) -> String {
    let mut current = input.to_string();
    while BLOCKED_SCHEME_RE.is_match(&current) {
        current = BLOCKED_SCHEME_RE.replace_all(&current, "").into_owned();
    }
    current
}

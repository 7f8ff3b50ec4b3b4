//! Upload file name rules.

use std::{ffi::OsStr, path::Path};

use jiff::Timestamp;

/// Image extensions accepted for upload, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Whether `name` ends in one of [`ALLOWED_EXTENSIONS`], ignoring case.
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Keeps ASCII letters, digits, `_`, `.` and `-`. Runs of whitespace and path
/// separators become a single `_`, anything else is dropped, and leading dots
/// and underscores are stripped.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut separator_pending = false;

    for ch in name.chars() {
        if ch.is_whitespace() || ch == '/' || ch == '\\' {
            separator_pending = true;
        } else if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-') {
            if separator_pending && !sanitized.is_empty() {
                sanitized.push('_');
            }

            separator_pending = false;
            sanitized.push(ch);
        }
    }

    sanitized.trim_start_matches(['.', '_']).to_string()
}

/// `<YYYYMMDD_HHMMSS>_<sanitized>` using the UTC time of `at`.
#[must_use]
pub fn stored_filename(sanitized: &str, at: Timestamp) -> String {
    format!("{}_{sanitized}", at.strftime("%Y%m%d_%H%M%S"))
}

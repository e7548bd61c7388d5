use std::fmt;

use crate::helper::static_regex;

/// Returns a filename-safe version of `value`.
///
/// Surrounding whitespace is removed, interior spaces become `_`, and every
/// remaining character that is not a Unicode letter or number, `_`, `-`, or
/// `.` is replaced by `_`. Combining marks are replaced too, so decomposed
/// accents do not survive. Distinct inputs may map to the same output.
///
/// ```
/// # use checked_path::sanitize_filename;
/// assert_eq!(sanitize_filename("5678^()^"), "5678____");
/// assert_eq!(sanitize_filename(42), "42");
/// ```
pub fn sanitize_filename<T: fmt::Display>(value: T) -> String {
    let value = value.to_string();
    let spaced = value.trim_matches(is_space).replace(' ', "_");
    static_regex!(r"[^-_.\p{L}\p{N}]")
        .replace_all(&spaced, "_")
        .into_owned()
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

//! Path segment joining.

use std::path::MAIN_SEPARATOR;

/// Joins path segments with exactly one platform separator between each.
///
/// A leading separator on the first segment is kept (absolute paths stay
/// absolute); all other leading/trailing separators are stripped, and the
/// output never ends in a separator. Idempotent over path-like strings:
/// `combine([combine([a, b]), c]) == combine([a, b, c])`.
pub fn combine<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    let mut first = true;

    for segment in segments {
        let segment = segment.as_ref();
        let trimmed = segment.trim_matches(MAIN_SEPARATOR);

        if first {
            if segment.starts_with(MAIN_SEPARATOR) {
                out.push(MAIN_SEPARATOR);
            }
            out.push_str(trimmed);
            first = false;
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }
        if !out.is_empty() && !out.ends_with(MAIN_SEPARATOR) {
            out.push(MAIN_SEPARATOR);
        }
        out.push_str(trimmed);
    }

    out
}

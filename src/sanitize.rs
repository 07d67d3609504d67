//! Filesystem-safe filename sanitization.

/// Sanitizes arbitrary text into a safe filename.
///
/// - Transliterates non-ASCII characters to their closest ASCII equivalents
///   (accented Latin, Cyrillic, ...); characters with no mapping are dropped
/// - Replaces every run of characters outside `[A-Za-z0-9.]` with a single `-`
/// - Never produces consecutive hyphens or a leading/trailing hyphen
///
/// Total over strings: the result may be empty if nothing survives, but the
/// function itself never fails. Idempotent, so sanitizing twice is harmless.
pub fn sanitize(name: &str) -> String {
    let ascii = deunicode::deunicode_with_tofu(name, "");

    let mut out = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            // Runs collapse; a hyphen is emitted only once the next kept
            // character arrives, which also trims the edges for free.
            pending_hyphen = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_passes_through() {
        assert_eq!(sanitize("filename.jpg"), "filename.jpg");
    }

    #[test]
    fn spaces_become_single_hyphens() {
        assert_eq!(sanitize("file 1 name.jpg"), "file-1-name.jpg");
    }

    #[test]
    fn latin_accents_transliterate() {
        assert_eq!(sanitize("fil\u{ea}n\u{e0}me.jpg"), "filename.jpg");
    }

    #[test]
    fn cyrillic_transliterates() {
        assert_eq!(sanitize("филенаме.jpg"), "filename.jpg");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(sanitize("file- -1.jpg"), "file-1.jpg");
    }

    #[test]
    fn edge_hyphens_trimmed() {
        assert_eq!(sanitize("--file--"), "file");
        assert_eq!(sanitize("  file.txt  "), "file.txt");
    }

    #[test]
    fn unmappable_input_yields_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn idempotent() {
        for s in ["file 1 name.jpg", "fil\u{ea}n\u{e0}me.jpg", "file- -1.jpg", "a..b"] {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once);
        }
    }
}

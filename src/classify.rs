//! Heuristic filename detection.

/// Longest extension the classifier will accept.
const MAX_EXTENSION_LEN: usize = 10;

/// Returns true when `s` looks like a filename rather than a bare path or URL.
///
/// The scheme and host are stripped when `s` parses as an absolute URL; the
/// last path segment must then contain a dot with a non-empty stem before it
/// and an extension of 1-10 word characters after it.
pub fn is_filename(s: &str) -> bool {
    let path = match url::Url::parse(s) {
        Ok(parsed) if parsed.has_host() => parsed.path().to_string(),
        _ => s.split('?').next().unwrap_or(s).to_string(),
    };

    let Some(segment) = path.split('/').filter(|p| !p.is_empty()).next_back() else {
        return false;
    };
    let Some((stem, ext)) = segment.rsplit_once('.') else {
        return false;
    };

    !stem.is_empty()
        && !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_filenames() {
        assert!(is_filename("file.png"));
        assert!(is_filename("file.js"));
        assert!(!is_filename("page"));
    }

    #[test]
    fn paths() {
        assert!(is_filename("/to/file/file.png"));
        assert!(!is_filename("/to/file/dir"));
    }

    #[test]
    fn urls() {
        assert!(is_filename("http://example.com/file.png"));
        assert!(!is_filename("http://example.com/page"));
        assert!(is_filename("http://example.com/file.png?token=abc"));
    }

    #[test]
    fn degenerate_segments() {
        assert!(!is_filename(""));
        assert!(!is_filename(".hidden"));
        assert!(!is_filename("file."));
        assert!(!is_filename("archive.tar-gz-backup-copy"));
        assert!(!is_filename("name.this-is-far-too-long-for-an-extension"));
    }
}

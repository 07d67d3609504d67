//! Filename candidate extraction from URLs.

/// Extracts an ordered list of filename candidates from a URL.
///
/// Query-string values come first, in reverse declaration order (last
/// parameter first), followed by the last non-empty path segment. Empty query
/// values are skipped. The list is empty only when the URL carries neither a
/// usable path segment nor query values.
///
/// Unparseable input is handled leniently: the string is split on `?`, `&`,
/// `=` and `/` by hand and treated as a path-like token plus raw query values.
pub fn filename_candidates_from_url(url: &str) -> Vec<String> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let mut out: Vec<String> = parsed
                .query_pairs()
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
                .collect();
            out.reverse();

            if let Some(segment) = last_path_segment(parsed.path()) {
                out.push(segment.to_string());
            }
            out
        }
        Err(_) => candidates_lenient(url),
    }
}

/// Last non-empty `/`-separated segment of a path, if any.
fn last_path_segment(path: &str) -> Option<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .next_back()
}

/// Fallback for strings `url::Url` rejects (relative paths, bare words).
fn candidates_lenient(input: &str) -> Vec<String> {
    let (path, query) = match input.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (input, None),
    };

    let mut out: Vec<String> = Vec::new();
    if let Some(query) = query {
        out.extend(
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .map(|(_, value)| value.to_string())
                .filter(|value| !value.is_empty()),
        );
        out.reverse();
    }

    if let Some(segment) = last_path_segment(path) {
        out.push(segment.to_string());
    }
    out
}

//! Filename derivation: pick the best candidate a URL offers, reconcile its
//! extension with the MIME type, and sanitize the result.

use std::sync::OnceLock;

use crate::candidates::filename_candidates_from_url;
use crate::classify::is_filename;
use crate::config::FilenameConfig;
use crate::mime::MimeMap;
use crate::sanitize::sanitize;

/// Derives a safe local filename for a resource fetched from `url`.
///
/// `mime`, when given, is typically the Content-Type of the HTTP response; it
/// overrides the extension of the chosen candidate whenever the built-in map
/// knows it. Uses the built-in MIME table and defaults; see [`Deriver`] for
/// configured derivation.
///
/// # Examples
///
/// - `filename_from_url("http://example.com/logo.gif", Some("image/gif"))` → `"logo.gif"`
/// - `filename_from_url("http://example.com/logo.php", Some("image/png"))` → `"logo.png"`
/// - `filename_from_url("http://example.com/test", None)` → `"test.jpg"`
pub fn filename_from_url(url: &str, mime: Option<&str>) -> String {
    static DEFAULT: OnceLock<Deriver> = OnceLock::new();
    DEFAULT.get_or_init(Deriver::default).filename_from_url(url, mime)
}

/// Filename derivation with an explicit MIME map and fallback settings.
#[derive(Debug, Clone)]
pub struct Deriver {
    map: MimeMap,
    default_extension: String,
    fallback_basename: String,
}

impl Default for Deriver {
    fn default() -> Self {
        Self::from_config(&FilenameConfig::default())
    }
}

impl Deriver {
    /// Builds a deriver from configuration: built-in MIME table plus the
    /// config's override entries and fallback settings.
    pub fn from_config(config: &FilenameConfig) -> Self {
        Self {
            map: MimeMap::with_overrides(config),
            default_extension: config.default_extension.clone(),
            fallback_basename: config.fallback_basename.clone(),
        }
    }

    /// Derives a safe local filename for a resource fetched from `url`.
    ///
    /// Scans the URL's candidates in order and takes the first that looks like
    /// a filename, swapping its extension for the MIME-mapped one when the two
    /// disagree. When nothing looks like a filename, a name is synthesized
    /// from the first candidate (or the fallback base name) plus the mapped or
    /// default extension. The result is always sanitized.
    pub fn filename_from_url(&self, url: &str, mime: Option<&str>) -> String {
        let candidates = filename_candidates_from_url(url);
        let mapped_ext = mime.and_then(|m| self.map.extension_for(m));

        let raw = match candidates.iter().find(|c| is_filename(c)) {
            Some(chosen) => {
                tracing::debug!(url, candidate = %chosen, "candidate looks like a filename");
                match mapped_ext {
                    Some(ext) if !has_extension(chosen, ext) => {
                        tracing::debug!(candidate = %chosen, ext, "forcing extension from MIME type");
                        with_extension(chosen, ext)
                    }
                    _ => chosen.clone(),
                }
            }
            None => {
                let base = candidates
                    .first()
                    .map(String::as_str)
                    .unwrap_or(&self.fallback_basename);
                let ext = mapped_ext.unwrap_or(&self.default_extension);
                tracing::debug!(url, base, ext, "no candidate looks like a filename, synthesizing");
                format!("{base}.{ext}")
            }
        };

        sanitize(&raw)
    }
}

fn has_extension(name: &str, ext: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, e)| e.eq_ignore_ascii_case(ext))
}

/// Replaces the extension after the last dot, or appends one if there is none.
fn with_extension(name: &str, ext: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{stem}.{ext}"),
        _ => format!("{name}.{ext}"),
    }
}

//! MIME type to filename extension mapping.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::config::FilenameConfig;

/// Built-in mappings; config overrides are layered on top.
const BUILTIN: &[(&str, &str)] = &[
    ("image/gif", "gif"),
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/pjpeg", "jpg"),
    ("image/webp", "webp"),
    ("image/bmp", "bmp"),
];

/// Immutable lookup from MIME type to canonical filename extension.
///
/// Built once and passed explicitly (or borrowed from [`MimeMap::builtin`]);
/// there is no mutable global state.
#[derive(Debug, Clone)]
pub struct MimeMap {
    extensions: BTreeMap<String, String>,
}

impl Default for MimeMap {
    fn default() -> Self {
        let extensions = BUILTIN
            .iter()
            .map(|(mime, ext)| (mime.to_string(), ext.to_string()))
            .collect();
        Self { extensions }
    }
}

impl MimeMap {
    /// Process-wide read-only instance with the built-in table.
    pub fn builtin() -> &'static MimeMap {
        static BUILTIN_MAP: OnceLock<MimeMap> = OnceLock::new();
        BUILTIN_MAP.get_or_init(MimeMap::default)
    }

    /// Built-in table plus the override entries from `config`.
    pub fn with_overrides(config: &FilenameConfig) -> Self {
        let mut map = Self::default();
        for (mime, ext) in &config.extensions {
            map.extensions
                .insert(mime.trim().to_ascii_lowercase(), ext.clone());
        }
        map
    }

    /// Looks up the extension for a MIME type.
    ///
    /// Whitespace and any `;`-separated parameter (e.g. `;charset=utf-8`) are
    /// ignored, and matching is ASCII case-insensitive.
    pub fn extension_for(&self, mime: &str) -> Option<&str> {
        let essence = mime.split(';').next().unwrap_or(mime);
        let key = essence.trim().to_ascii_lowercase();
        self.extensions.get(&key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table() {
        let map = MimeMap::builtin();
        assert_eq!(map.extension_for("image/gif"), Some("gif"));
        assert_eq!(map.extension_for("image/png"), Some("png"));
        assert_eq!(map.extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(map.extension_for("image/jpg"), Some("jpg"));
        assert_eq!(map.extension_for("application/pdf"), None);
    }

    #[test]
    fn lookup_normalizes() {
        let map = MimeMap::default();
        assert_eq!(map.extension_for(" IMAGE/PNG "), Some("png"));
        assert_eq!(map.extension_for("image/jpeg; charset=utf-8"), Some("jpg"));
    }

    #[test]
    fn overrides_extend_and_replace() {
        let mut config = FilenameConfig::default();
        config
            .extensions
            .insert("application/pdf".to_string(), "pdf".to_string());
        config
            .extensions
            .insert("image/jpeg".to_string(), "jpeg".to_string());

        let map = MimeMap::with_overrides(&config);
        assert_eq!(map.extension_for("application/pdf"), Some("pdf"));
        assert_eq!(map.extension_for("image/jpeg"), Some("jpeg"));
        assert_eq!(map.extension_for("image/gif"), Some("gif"));
    }
}

//! Safe local filename derivation for fetched resources.
//!
//! Given a source URL and an optional MIME type (e.g. from a Content-Type
//! header), derives a sanitized, plausible filename to save the resource
//! under. All core functions are pure string transformations: no I/O, no
//! network, no shared mutable state.

pub mod candidates;
pub mod classify;
pub mod combine;
pub mod config;
pub mod derive;
pub mod mime;
pub mod sanitize;

pub use candidates::filename_candidates_from_url;
pub use classify::is_filename;
pub use combine::combine;
pub use config::{ConfigError, FilenameConfig};
pub use derive::{filename_from_url, Deriver};
pub use mime::MimeMap;
pub use sanitize::sanitize;

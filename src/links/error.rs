//! Error types for opening external links.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Refusing to open an empty URL")]
    EmptyUrl,

    /// Only web links are handed to the platform opener.
    #[error("Unsupported URL scheme in '{url}'")]
    UnsupportedScheme { url: String },

    #[error("Failed to launch '{opener}' for '{url}': {details}")]
    SpawnFailed {
        opener: &'static str,
        url: String,
        details: String,
    },
}

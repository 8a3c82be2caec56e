// this_file: backends/fontpath-core/src/error.rs

//! Error types for fontpath.
//!
//! Only hard failures live here: a font container that cannot be parsed or a
//! font file that cannot be found or read. Missing glyphs, kerning pairs and
//! metrics are never errors; face queries degrade to zero or empty results.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fontpath operations.
///
/// `FontParse`, `UnknownFormat` and `UnsupportedFormat` together make up the
/// parse-failure tier: the bytes were read but do not yield a usable font.
/// [`FontError::is_parse_failure`] tests for any of them.
#[derive(Error, Debug)]
pub enum FontError {
    /// The backend rejected the font data
    #[error("Failed to parse font '{name}': {reason}")]
    FontParse { name: String, reason: String },

    /// The container signature is not a known font format
    #[error("Unknown font container format")]
    UnknownFormat,

    /// The container is recognized but cannot be decoded
    #[error("Unsupported font format: {format}")]
    UnsupportedFormat { format: String },

    /// No font matched the requested name
    #[error("Font not found: {name}")]
    FontNotFound { name: String },

    /// Reading a font file failed
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FontError {
    /// Wrap an I/O failure that happened while loading the font at `path`.
    pub fn font_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the font data was rejected, as opposed to not found or unreadable.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::FontParse { .. } | Self::UnknownFormat | Self::UnsupportedFormat { .. }
        )
    }

    pub fn parse(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::FontParse {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

//! Unified error type for skyline-assets.

use thiserror::Error;

/// Errors that abort asset generation.
#[derive(Debug, Error)]
pub enum AssetError {
    /// An I/O error occurred while creating directories or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image encoder rejected the canvas.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Reasons a preferred font file could not be used.
///
/// These never abort a run; the font resolver falls back to the built-in face.
#[derive(Debug, Error)]
pub enum FontLoadError {
    /// The font file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that was tried.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file was read but is not a usable TrueType/OpenType font.
    #[error("cannot parse {path}: {source}")]
    Parse {
        /// Path that was tried.
        path: String,
        /// Parser error.
        source: ab_glyph::InvalidFont,
    },
}

//! The error type shared across the crate.

use thiserror::Error;

/// An error produced while validating builder inputs or reconstructing a
/// [`Pattern`](crate::Pattern) from its structured data form.
///
/// Every variant is fatal to the conversion it occurred in; nothing is
/// recovered internally.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The decoded image has zero width or height.
    #[error("image dimensions cannot be zero")]
    EmptyImage,

    /// The pixel buffer (or data grid) does not match the claimed dimensions.
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        /// Number of pixels or cells actually present.
        len: usize,
        /// Claimed width.
        width: u32,
        /// Claimed height.
        height: u32,
    },

    /// The maximum output dimension must be at least 1.
    #[error("max size must be at least 1, got {0}")]
    InvalidMaxSize(u32),

    /// A palette entry could not be parsed as a `#rrggbb` hex color.
    #[error("invalid hex color {0:?}")]
    BadColor(String),

    /// A grid cell referenced a palette index that does not exist.
    #[error("cell value {value} exceeds palette size {colors}")]
    BadCell {
        /// The offending cell value.
        value: u32,
        /// Number of colors in the palette.
        colors: usize,
    },

    /// The image decoding collaborator failed.
    #[cfg(feature = "image")]
    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),
}

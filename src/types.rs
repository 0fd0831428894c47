//! Contains the core types shared across the crate.

use crate::PatternError;
use palette::{Srgb, Srgba};
use std::fmt::Display;
#[cfg(feature = "image")]
use {image::RgbaImage, palette::cast::ComponentsAs};

/// The maximum dimension of the output pattern grid.
///
/// This is a simple new type wrapper around `u32` with the invariant that it
/// must be at least `1`. The larger side of the input image is scaled to
/// exactly this value; the smaller side shrinks proportionally.
///
/// # Examples
/// Use `try_into` to create [`MaxSize`]s from `u32`s; zero is rejected.
/// ```
/// # use pixette::{MaxSize, PatternError};
/// # fn main() -> Result<(), PatternError> {
/// let size = MaxSize::try_from(32)?;
/// let size: MaxSize = 32u32.try_into()?;
/// let size = MaxSize::DEFAULT;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MaxSize(u32);

impl MaxSize {
    /// The default maximum dimension of `24`.
    pub const DEFAULT: Self = Self(24);

    /// Gets the inner `u32` value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for MaxSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<MaxSize> for u32 {
    fn from(val: MaxSize) -> Self {
        val.get()
    }
}

impl TryFrom<u32> for MaxSize {
    type Error = PatternError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(PatternError::InvalidMaxSize(value))
        } else {
            Ok(Self(value))
        }
    }
}

impl Display for MaxSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A borrowed rectangular grid of RGBA pixels with the invariant that the
/// pixel slice length equals `width * height` and neither dimension is zero.
///
/// # Examples
/// From a raw pixel slice:
/// ```
/// # use pixette::{PatternError, PixelGrid};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PatternError> {
/// let pixels = vec![Srgba::new(0u8, 0, 0, 255); 6];
/// let grid = PixelGrid::new(&pixels, 3, 2)?;
/// # Ok(())
/// # }
/// ```
///
/// From an image (needs the `image` feature to be enabled):
/// ```no_run
/// # use pixette::PixelGrid;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgba8();
/// let grid = PixelGrid::try_from(&img)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGrid<'a> {
    /// The pixels in row-major order.
    pixels: &'a [Srgba<u8>],
    /// Width of the grid.
    width: u32,
    /// Height of the grid.
    height: u32,
}

impl<'a> PixelGrid<'a> {
    /// Creates a new [`PixelGrid`] over `pixels` in row-major order.
    ///
    /// # Errors
    /// Returns [`PatternError::EmptyImage`] if either dimension is zero and
    /// [`PatternError::DimensionMismatch`] if the slice length is not
    /// `width * height`.
    pub fn new(pixels: &'a [Srgba<u8>], width: u32, height: u32) -> Result<Self, PatternError> {
        if width == 0 || height == 0 {
            return Err(PatternError::EmptyImage);
        }
        if pixels.len() != width as usize * height as usize {
            return Err(PatternError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self { pixels, width, height })
    }

    /// Width of the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The pixels in row-major order.
    #[must_use]
    pub const fn pixels(&self) -> &'a [Srgba<u8>] {
        self.pixels
    }
}

#[cfg(feature = "image")]
impl<'a> TryFrom<&'a RgbaImage> for PixelGrid<'a> {
    type Error = PatternError;

    fn try_from(image: &'a RgbaImage) -> Result<Self, Self::Error> {
        let pixels = image.pixels().len();
        let buf = &image.as_raw()[..(pixels * 4)];
        Self::new(buf.components_as(), image.width(), image.height())
    }
}

/// The canonical downscaled, color-indexed representation of an image.
///
/// Built once by [`Pattern::build`] and read-only thereafter. The grid is
/// stored flat in row-major order; cell value `0` denotes a transparent/empty
/// cell and values `>= 1` are 1-based indices into [`Pattern::colors`].
///
/// Palette indices are contiguous starting at `1` and are assigned strictly in
/// the order distinct colors are first encountered while scanning the grid
/// row-major. Alpha is not part of the color key, so pixels differing only in
/// (opaque) alpha share a palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Width of the pattern grid.
    pub(crate) width: u32,
    /// Height of the pattern grid.
    pub(crate) height: u32,
    /// Flat row-major cell values of length `width * height`.
    pub(crate) cells: Vec<u32>,
    /// Palette colors in first-seen order; index `i` (1-based) is `colors[i - 1]`.
    pub(crate) colors: Vec<Srgb<u8>>,
}

impl Pattern {
    /// Width of the pattern grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the pattern grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The cell values in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// The palette colors in the order their indices were assigned.
    #[must_use]
    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    /// Looks up the color for a 1-based palette index.
    ///
    /// Returns `None` for `0` (transparent) and for out of range indices.
    #[must_use]
    pub fn color(&self, index: u32) -> Option<Srgb<u8>> {
        let i = index.checked_sub(1)?;
        self.colors.get(i as usize).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn max_size_rejects_zero() {
        assert!(matches!(
            MaxSize::try_from(0),
            Err(PatternError::InvalidMaxSize(0))
        ));
        assert_eq!(MaxSize::try_from(1).unwrap().get(), 1);
        assert_eq!(MaxSize::default().get(), 24);
    }

    #[test]
    fn pixel_grid_validates_dimensions() {
        let pixels = vec![Srgba::new(0u8, 0, 0, 255); 4];

        assert!(matches!(
            PixelGrid::new(&pixels, 0, 4),
            Err(PatternError::EmptyImage)
        ));
        assert!(matches!(
            PixelGrid::new(&pixels, 4, 0),
            Err(PatternError::EmptyImage)
        ));
        assert!(matches!(
            PixelGrid::new(&pixels, 3, 2),
            Err(PatternError::DimensionMismatch { len: 4, width: 3, height: 2 })
        ));

        let grid = PixelGrid::new(&pixels, 2, 2).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
    }

    #[cfg(feature = "image")]
    #[test]
    fn pixel_grid_from_image() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let grid = PixelGrid::try_from(&img).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixels().len(), 6);
        assert_eq!(grid.pixels()[0], Srgba::new(10, 20, 30, 255));
    }
}

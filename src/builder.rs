//! Pattern construction: nearest-neighbor downscaling fused with the
//! quantization scan.
//!
//! The resample and the indexing pass are logically separate but run as one
//! pass over destination coordinates, since neither needs the intermediate
//! resampled image.

use crate::{MaxSize, Pattern, PixelGrid, ALPHA_THRESHOLD};
use palette::Srgb;
use std::collections::HashMap;

impl Pattern {
    /// Builds a pattern from a decoded pixel grid.
    ///
    /// The image is scaled by `min(max_size / width, max_size / height)` so
    /// that its larger dimension maps to exactly `max_size` with the aspect
    /// ratio preserved (images smaller than `max_size` are upscaled by the
    /// same rule). Target dimensions truncate toward zero and are clamped to a
    /// minimum of `1`. Each output pixel copies the single nearest source
    /// pixel; no blending.
    ///
    /// Scanning the scaled grid row-major, pixels with alpha below
    /// [`ALPHA_THRESHOLD`] become cell `0` and register no color. All other
    /// pixels are keyed by their RGB channels alone, and each distinct color
    /// is assigned the next 1-based palette index on first sight.
    ///
    /// # Examples
    /// ```
    /// # use pixette::{MaxSize, Pattern, PixelGrid, PatternError};
    /// # use palette::Srgba;
    /// # fn main() -> Result<(), PatternError> {
    /// let pixels = [
    ///     Srgba::new(255u8, 0, 0, 255),
    ///     Srgba::new(0, 255, 0, 255),
    /// ];
    /// let grid = PixelGrid::new(&pixels, 2, 1)?;
    ///
    /// let pattern = Pattern::build(grid, MaxSize::try_from(2)?);
    /// assert_eq!(pattern.cells(), [1, 2]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn build(pixels: PixelGrid<'_>, max_size: MaxSize) -> Self {
        let (src_width, src_height) = (pixels.width(), pixels.height());
        let max = f64::from(max_size.get());
        let ratio = (max / f64::from(src_width)).min(max / f64::from(src_height));

        let width = scaled_dimension(src_width, ratio);
        let height = scaled_dimension(src_height, ratio);

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        let mut colors: Vec<Srgb<u8>> = Vec::new();
        let mut indices: HashMap<(u8, u8, u8), u32> = HashMap::new();

        let src = pixels.pixels();
        for y in 0..height {
            let sy = source_index(y, ratio, src_height) as usize;
            for x in 0..width {
                let sx = source_index(x, ratio, src_width) as usize;
                let pixel = src[sy * src_width as usize + sx];

                if pixel.alpha < ALPHA_THRESHOLD {
                    cells.push(0);
                    continue;
                }

                let key = pixel.color.into_components();
                let index = match indices.get(&key) {
                    Some(&index) => index,
                    None => {
                        colors.push(pixel.color);
                        #[allow(clippy::cast_possible_truncation)]
                        let index = colors.len() as u32;
                        indices.insert(key, index);
                        index
                    }
                };
                cells.push(index);
            }
        }

        Self { width, height, cells, colors }
    }
}

/// Scales a source dimension by `ratio`, truncating toward zero and clamping
/// to a minimum of `1`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_dimension(dim: u32, ratio: f64) -> u32 {
    ((f64::from(dim) * ratio) as u32).max(1)
}

/// The nearest source index for a destination index: `floor(dest / ratio)`,
/// clamped to `[0, source_dim - 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn source_index(dest: u32, ratio: f64, source_dim: u32) -> u32 {
    ((f64::from(dest) / ratio) as u32).min(source_dim - 1)
}

//! ASCII preview rendering for terminal display.

use crate::Pattern;

/// Shading ramp from lightest to heaviest; ramp position `0` is blank.
const RAMP: [char; 6] = [' ', '.', 'o', 'O', '@', '#'];

/// Renders a pattern as ASCII art for the terminal.
///
/// Empty cells become two spaces; other cells emit the ramp glyph at
/// `min(cell, 5)`, doubled to approximate a square aspect ratio in a typical
/// terminal font. Rows are newline-separated with no trailing newline.
///
/// Palette indices above `5` all collapse onto the heaviest glyph. This is
/// lossy for display only; the structured data and source literal exporters
/// retain full index fidelity.
#[must_use]
pub fn render_preview(pattern: &Pattern) -> String {
    let mut out =
        String::with_capacity(pattern.cells().len() * 2 + pattern.height() as usize);

    for (i, row) in pattern.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for &cell in row {
            let glyph = RAMP[(cell as usize).min(RAMP.len() - 1)];
            out.push(glyph);
            out.push(glyph);
        }
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{MaxSize, PixelGrid};
    use palette::Srgba;

    fn pattern_from(pixels: &[Srgba<u8>], width: u32, height: u32) -> Pattern {
        Pattern::build(
            PixelGrid::new(pixels, width, height).unwrap(),
            MaxSize::try_from(width.max(height)).unwrap(),
        )
    }

    #[test]
    fn empty_cells_render_as_spaces() {
        let pixels = [
            Srgba::new(255, 0, 0, 255),
            Srgba::new(0, 0, 0, 0),
            Srgba::new(0, 0, 0, 0),
            Srgba::new(255, 0, 0, 255),
        ];
        let pattern = pattern_from(&pixels, 2, 2);

        assert_eq!(render_preview(&pattern), "..  \n  ..");
    }

    #[test]
    fn rows_are_newline_separated_without_trailing_newline() {
        let pixels = vec![Srgba::new(1, 2, 3, 255); 6];
        let pattern = pattern_from(&pixels, 2, 3);

        let preview = render_preview(&pattern);
        assert_eq!(preview, "..\n..\n..");
        assert!(!preview.ends_with('\n'));
    }

    #[test]
    fn indices_above_five_collapse_onto_heaviest_glyph() {
        // 7 distinct colors in one row: indices 1..=7
        let pixels = (1..=7)
            .map(|r| Srgba::new(r, 0, 0, 255))
            .collect::<Vec<_>>();
        let pattern = pattern_from(&pixels, 7, 1);

        assert_eq!(pattern.colors().len(), 7);
        assert_eq!(render_preview(&pattern), "..ooOO@@######");
    }

    #[test]
    fn fully_transparent_pattern_is_blank() {
        let pixels = [Srgba::new(0, 0, 0, 0)];
        let pattern = pattern_from(&pixels, 1, 1);

        assert_eq!(render_preview(&pattern), "  ");
    }
}

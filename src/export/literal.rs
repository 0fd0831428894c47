//! TypeScript source literal generation.

use crate::Pattern;
use std::fmt::Write;

/// Renders a pattern as a named TypeScript array literal.
///
/// The output consists of a comment with the declared `name` and dimensions, a
/// comment listing the palette colors in index order, and an array of rows of
/// cell values bracketed under `name`. The closing bracket carries a trailing
/// comma so the declaration can be embedded directly in a larger object
/// literal.
///
/// `name` is emitted verbatim and should be an identifier-safe string.
///
/// # Examples
/// ```
/// # use pixette::{to_source_literal, MaxSize, Pattern, PixelGrid, PatternError};
/// # use palette::Srgba;
/// # fn main() -> Result<(), PatternError> {
/// let pixels = [Srgba::new(255u8, 0, 0, 255)];
/// let pattern = Pattern::build(PixelGrid::new(&pixels, 1, 1)?, MaxSize::DEFAULT);
///
/// let literal = to_source_literal(&pattern, "dot");
/// assert!(literal.starts_with("// dot (1x1)\n"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn to_source_literal(pattern: &Pattern, name: &str) -> String {
    let colors = pattern
        .colors()
        .iter()
        .map(|&color| format!("\"{}\"", super::hex(color)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    // writes to a String cannot fail
    let _ = writeln!(out, "// {name} ({}x{})", pattern.width(), pattern.height());
    let _ = writeln!(out, "// Colors: [{colors}]");
    let _ = writeln!(out, "{name}: [");
    for row in pattern.rows() {
        let cells = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(out, "  [{cells}],");
    }
    out.push_str("],\n");

    out
}

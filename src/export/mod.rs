//! Stateless projections of a built [`Pattern`](crate::Pattern).
//!
//! All exporters are pure functions over an already-built pattern and may be
//! invoked in any order or omitted independently.

mod data;
mod literal;
mod preview;

pub use data::PatternData;
pub use literal::to_source_literal;
pub use preview::render_preview;

use palette::Srgb;

/// Formats a color as a lowercase `#rrggbb` hex string.
pub(crate) fn hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

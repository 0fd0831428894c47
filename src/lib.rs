//! A library for converting raster images into small indexed pixel-art patterns.
//!
//! `pixette` downscales an image with nearest-neighbor sampling (hard edges, no
//! blending), quantizes the result into a de-duplicated color palette assigned in
//! first-seen order, and exposes the resulting [`Pattern`] through three stateless
//! projections: an ASCII terminal preview, a lossless structured data form
//! ([`PatternData`]), and a TypeScript source literal.
//!
//! # Features
//! - `image`: enables integration with the [`image`] crate for decoding.
//! - `cli`: builds the `pixette` command line tool (implies `image`).
//!
//! # Example
//! ```no_run
//! # use pixette::{MaxSize, Pattern, PixelGrid};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgba8();
//!
//! let pixels = PixelGrid::try_from(&img)?;
//! let pattern = Pattern::build(pixels, MaxSize::try_from(24)?);
//!
//! println!("{}", pixette::render_preview(&pattern));
//! # Ok(())
//! # }
//! ```
//!
//! Cell value `0` marks a transparent/empty cell; values `>= 1` are 1-based
//! indices into the palette. Pixels with alpha below [`ALPHA_THRESHOLD`] become
//! empty cells and do not contribute a palette entry.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod builder;
mod error;
mod types;

pub mod export;

pub use error::PatternError;
pub use export::{render_preview, to_source_literal, PatternData};
pub use types::*;

/// Pixels with alpha below this threshold become empty cells.
///
/// The boundary is inclusive on the opaque side: alpha `128` is opaque.
pub const ALPHA_THRESHOLD: u8 = 128;

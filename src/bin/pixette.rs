#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pixette::{render_preview, to_source_literal, MaxSize, Pattern, PatternData, PixelGrid};

/// Convert an image into a small indexed pixel-art pattern.
#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Path to the image to convert.
    image: PathBuf,

    /// Maximum output dimension; the larger image side is scaled to this.
    #[arg(short, long, default_value_t = MaxSize::DEFAULT, value_parser = parse_max_size)]
    max_size: MaxSize,

    /// Print an ASCII preview of the pattern.
    #[arg(long)]
    preview: bool,

    /// Emit the pattern as JSON instead of the human-readable summary.
    #[arg(long)]
    json: bool,

    /// Name for the generated TypeScript declaration; defaults to the image
    /// file stem with `-` replaced by `_`.
    #[arg(long)]
    name: Option<String>,
}

fn parse_max_size(s: &str) -> Result<MaxSize, String> {
    let value: u32 = s.parse().map_err(|e| format!("{e}"))?;
    value.try_into().map_err(|e| format!("{e}"))
}

/// Derives an identifier-safe declaration name from the image file stem.
fn declaration_name(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "pattern".to_owned(), |stem| {
            stem.to_string_lossy().replace('-', "_")
        })
}

fn main() -> anyhow::Result<()> {
    let Options { image, max_size, preview, json, name } = Options::parse();

    let decoded = image::open(&image)
        .with_context(|| format!("failed to read {}", image.display()))?
        .into_rgba8();

    let pixels = PixelGrid::try_from(&decoded)?;
    let pattern = Pattern::build(pixels, max_size);

    let data = PatternData::from(&pattern);
    if json {
        println!("{}", data.to_json_pretty()?);
        return Ok(());
    }

    let colors = data
        .color_list
        .iter()
        .map(|color| format!("\"{color}\""))
        .collect::<Vec<_>>()
        .join(", ");

    println!("Size: {}x{}", pattern.width(), pattern.height());
    println!("Colors: [{colors}]");

    if preview {
        println!("\nPreview:");
        println!("{}", render_preview(&pattern));
    }

    let name = name.unwrap_or_else(|| declaration_name(&image));
    println!("\nTypeScript:");
    print!("{}", to_source_literal(&pattern, &name));

    Ok(())
}

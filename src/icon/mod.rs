use std::path::Path;

use anyhow::{Context, Result};

use crate::config::IconConfig;
use crate::data::color::{parse_hex_rgba, to_hex};
use crate::icon::export::{IconPaths, IconSet};
use crate::icon::mask::rounded_rectangle_mask;
use crate::icon::replace::ColorReplacer;
use crate::icon::sample::dominant_color;
use crate::icon::square::find_largest_inscribed_square;

pub mod export;
pub mod mask;
pub mod replace;
pub mod sample;
pub mod square;

/// Runs the whole pipeline on an image already in memory.
pub fn generate_icons(source: &image::RgbaImage, config: &IconConfig) -> Result<IconSet> {
    let dominant = dominant_color(source)?;
    log::info!("Dominant color: {}", to_hex(&dominant));

    let target = parse_hex_rgba(&config.target_color)?;
    let recolored = ColorReplacer::new(target, dominant, config.tolerance).replace(source);

    let alpha = image::GrayImage::from_fn(recolored.width(), recolored.height(), |x, y| {
        image::Luma([recolored.get_pixel(x, y)[3]])
    });
    let bounds = find_largest_inscribed_square(&alpha)?;
    log::info!("Square bounds: {bounds}");

    let side = bounds.side();
    let mask = rounded_rectangle_mask(
        side,
        side as f32 * config.corner_radius_ratio,
        config.supersample_factor,
    )?;

    IconSet::compose(&recolored, bounds, &mask, config.output_size)
}

/// Loads `input`, generates both icons and writes them into `output_dir`.
/// Nothing is written unless every stage succeeds.
pub fn process_image(input: &Path, output_dir: &Path, config: &IconConfig) -> Result<IconPaths> {
    let source = image::open(input)
        .with_context(|| format!("Unable to load image: {}", input.display()))?
        .to_rgba8();

    log::info!(
        "Loaded {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let icons = generate_icons(&source, config)?;

    icons.save(
        output_dir,
        &config.square_file_name,
        &config.rounded_file_name,
    )
}

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::ImageEncoder;

use crate::data::bounds::SquareBounds;

#[derive(Debug)]
pub struct IconSet {
    pub square: image::RgbaImage,
    pub rounded: image::RgbaImage,
}

#[derive(Debug)]
pub struct IconPaths {
    pub square: PathBuf,
    pub rounded: PathBuf,
}

impl IconSet {
    /// Crops `image` to `bounds`, derives the rounded variant by multiplying
    /// its alpha with `mask`, and scales both to `output_size` square.
    pub fn compose(
        image: &image::RgbaImage,
        bounds: SquareBounds,
        mask: &image::GrayImage,
        output_size: u32,
    ) -> Result<Self> {
        let side = bounds.side();
        ensure!(
            mask.dimensions() == (side, side),
            "Mask is {}x{} but the cropped icon is {side}x{side}",
            mask.width(),
            mask.height()
        );

        let cropped = image::imageops::crop_imm(image, bounds.x1, bounds.y1, side, side).to_image();

        let mut masked = cropped.clone();
        for (pixel, coverage) in masked.pixels_mut().zip(mask.pixels()) {
            pixel[3] = multiply(pixel[3], coverage[0]);
        }

        Ok(Self {
            square: upscale(&cropped, output_size),
            rounded: upscale(&masked, output_size),
        })
    }

    /// Writes both icons into `output_dir`. Both are encoded before anything
    /// touches the disk, and a failed second write removes the first file.
    pub fn save(
        &self,
        output_dir: &Path,
        square_name: &str,
        rounded_name: &str,
    ) -> Result<IconPaths> {
        let square_png = encode_png(&self.square)?;
        let rounded_png = encode_png(&self.rounded)?;
        let (square_len, rounded_len) = (square_png.len(), rounded_png.len());

        let paths = IconPaths {
            square: output_dir.join(square_name),
            rounded: output_dir.join(rounded_name),
        };

        std::fs::write(&paths.square, square_png)
            .with_context(|| format!("Unable to write icon: {}", paths.square.display()))?;

        if let Err(error) = std::fs::write(&paths.rounded, rounded_png) {
            if let Err(cleanup_error) = std::fs::remove_file(&paths.square) {
                log::warn!(
                    "Unable to remove {} after failed write: {cleanup_error}",
                    paths.square.display()
                );
            }
            return Err(error)
                .with_context(|| format!("Unable to write icon: {}", paths.rounded.display()));
        }

        log::info!("Saved {} ({square_len} bytes)", paths.square.display());
        log::info!("Saved {} ({rounded_len} bytes)", paths.rounded.display());

        Ok(paths)
    }
}

fn upscale(image: &image::RgbaImage, size: u32) -> image::RgbaImage {
    image::imageops::resize(image, size, size, FilterType::Lanczos3)
}

/// `a * b / 255` with integer truncation.
fn multiply(a: u8, b: u8) -> u8 {
    (u16::from(a) * u16::from(b) / 255) as u8
}

fn encode_png(image: &image::RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

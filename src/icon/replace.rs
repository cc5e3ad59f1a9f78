use crate::data::color::rgb_distance;

const NEAR_FALLOFF_EXPONENT: f64 = 0.3;
const FAR_BLEND_SCALE: f64 = 0.5;
const EDGE_KEEP_WEIGHT: f64 = 0.7;
const EDGE_NEIGHBOR_WEIGHT: f64 = 0.3;

/// Pulls pixels close to `target` toward `replacement`, then softens the
/// seams the recoloring leaves behind.
pub struct ColorReplacer {
    pub target: image::Rgba<u8>,
    pub replacement: image::Rgba<u8>,
    pub tolerance: u32,
}

impl ColorReplacer {
    pub fn new(target: image::Rgba<u8>, replacement: image::Rgba<u8>, tolerance: u32) -> Self {
        Self {
            target,
            replacement,
            tolerance,
        }
    }

    pub fn replace(&self, image: &image::RgbaImage) -> image::RgbaImage {
        let recolored = self.recolor(image);
        self.smooth_edges(&recolored)
    }

    /// Weight given to the replacement color for a pixel at `distance` from the
    /// target, or `None` when the pixel is out of reach.
    pub fn blend_factor(&self, distance: u32) -> Option<f64> {
        let tolerance = self.tolerance as f64;
        let distance = distance as f64;

        if distance <= tolerance {
            Some((1.0 - distance / tolerance).powf(NEAR_FALLOFF_EXPONENT))
        } else if distance <= 2.0 * tolerance {
            Some(FAR_BLEND_SCALE * (1.0 - distance / (2.0 * tolerance)))
        } else {
            None
        }
    }

    fn recolor(&self, image: &image::RgbaImage) -> image::RgbaImage {
        let mut recolored = image.clone();
        let mut blended_count = 0usize;

        for pixel in recolored.pixels_mut().filter(|p| p[3] > 0) {
            if let Some(blend) = self.blend_factor(rgb_distance(pixel, &self.target)) {
                *pixel = mix(pixel, &self.replacement, blend);
                blended_count += 1;
            }
        }

        log::debug!("Blended {blended_count} pixels toward the replacement color");

        recolored
    }

    // Reads only from `image` so every pixel sees the same neighborhood.
    fn smooth_edges(&self, image: &image::RgbaImage) -> image::RgbaImage {
        let mut smoothed = image.clone();
        let (width, height) = image.dimensions();
        let edge_threshold = self.tolerance as f64 / 2.0;
        let mut smoothed_count = 0usize;

        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                let pixel = image.get_pixel(x, y);

                if pixel[3] == 0 || rgb_distance(pixel, &self.target) <= self.tolerance {
                    continue;
                }

                let neighbors = [
                    image.get_pixel(x, y - 1),
                    image.get_pixel(x, y + 1),
                    image.get_pixel(x - 1, y),
                    image.get_pixel(x + 1, y),
                ];

                let at_edge = neighbors
                    .iter()
                    .any(|neighbor| rgb_distance(neighbor, pixel) as f64 > edge_threshold);
                if !at_edge {
                    continue;
                }

                let mut channels = [0u8; 4];
                for (channel, value) in channels.iter_mut().enumerate() {
                    let mean = neighbors.iter().map(|n| n[channel] as f64).sum::<f64>() / 4.0;
                    *value = (EDGE_KEEP_WEIGHT * pixel[channel] as f64
                        + EDGE_NEIGHBOR_WEIGHT * mean) as u8;
                }

                smoothed.put_pixel(x, y, image::Rgba(channels));
                smoothed_count += 1;
            }
        }

        log::debug!("Smoothed {smoothed_count} edge pixels");

        smoothed
    }
}

fn mix(original: &image::Rgba<u8>, replacement: &image::Rgba<u8>, blend: f64) -> image::Rgba<u8> {
    let mut channels = [0u8; 4];

    for ((value, &o), &r) in channels
        .iter_mut()
        .zip(original.0.iter())
        .zip(replacement.0.iter())
    {
        *value = (o as f64 * (1.0 - blend) + r as f64 * blend) as u8;
    }

    image::Rgba(channels)
}

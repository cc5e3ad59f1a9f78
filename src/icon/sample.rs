use std::collections::HashMap;

use anyhow::Result;

use crate::error::Error;

/// Most frequent RGBA value among pixels with non-zero alpha.
///
/// This is the statistical mode, not a median. When several colors share the
/// highest count, the one reached first in row-major order is returned.
pub fn dominant_color(image: &image::RgbaImage) -> Result<image::Rgba<u8>> {
    // color -> (count, first seen index)
    let mut counts: HashMap<[u8; 4], (usize, usize)> = HashMap::new();

    for (index, pixel) in image.pixels().filter(|p| p[3] > 0).enumerate() {
        counts.entry(pixel.0).or_insert((0, index)).0 += 1;
    }

    log::debug!(
        "Sampled {} distinct visible colors from a {}x{} image",
        counts.len(),
        image.width(),
        image.height()
    );

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(color, _)| image::Rgba(color))
        .ok_or_else(|| Error::EmptySampleSet.into())
}

use anyhow::Result;

use crate::data::bounds::SquareBounds;
use crate::error::Error;

/// Largest square centered on the grid center (integer division) whose
/// pixels all have non-zero alpha.
pub fn find_largest_inscribed_square(alpha: &image::GrayImage) -> Result<SquareBounds> {
    let (width, height) = alpha.dimensions();
    let (center_x, center_y) = (width / 2, height / 2);
    let transparent = TransparencyTable::new(alpha);

    for size in (1..=width.min(height)).rev() {
        let half = size / 2;
        let (Some(x1), Some(y1)) = (center_x.checked_sub(half), center_y.checked_sub(half)) else {
            continue;
        };

        let bounds = SquareBounds::from_origin(x1, y1, size);
        if bounds.x2 > width || bounds.y2 > height {
            continue;
        }

        if transparent.count(&bounds) == 0 {
            log::debug!("Largest opaque centered square: {bounds} (side {size})");
            return Ok(bounds);
        }
    }

    Err(Error::NoValidSquareRegion { width, height }.into())
}

/// Summed-area table over "alpha == 0", so any rectangle is checked in O(1).
struct TransparencyTable {
    stride: usize,
    sums: Vec<u64>,
}

impl TransparencyTable {
    fn new(alpha: &image::GrayImage) -> Self {
        let (width, height) = alpha.dimensions();
        let stride = width as usize + 1;
        let mut sums = vec![0u64; stride * (height as usize + 1)];

        for y in 0..height as usize {
            let mut row_sum = 0u64;
            for x in 0..width as usize {
                row_sum += u64::from(alpha.get_pixel(x as u32, y as u32)[0] == 0);
                sums[(y + 1) * stride + x + 1] = sums[y * stride + x + 1] + row_sum;
            }
        }

        Self { stride, sums }
    }

    fn at(&self, x: u32, y: u32) -> u64 {
        self.sums[y as usize * self.stride + x as usize]
    }

    fn count(&self, bounds: &SquareBounds) -> u64 {
        (self.at(bounds.x2, bounds.y2) + self.at(bounds.x1, bounds.y1))
            - (self.at(bounds.x1, bounds.y2) + self.at(bounds.x2, bounds.y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(alpha: &image::GrayImage) -> Option<SquareBounds> {
        let (width, height) = alpha.dimensions();
        (1..=width.min(height)).rev().find_map(|size| {
            let x1 = (width / 2).checked_sub(size / 2)?;
            let y1 = (height / 2).checked_sub(size / 2)?;
            let bounds = SquareBounds::from_origin(x1, y1, size);
            if bounds.x2 > width || bounds.y2 > height {
                return None;
            }
            let opaque = (bounds.y1..bounds.y2)
                .all(|y| (bounds.x1..bounds.x2).all(|x| alpha.get_pixel(x, y)[0] > 0));
            opaque.then_some(bounds)
        })
    }

    #[test]
    fn opaque_square_image_uses_whole_image() {
        for side in [1, 2, 63, 64] {
            let alpha = image::GrayImage::from_pixel(side, side, image::Luma([255]));

            let bounds = find_largest_inscribed_square(&alpha).unwrap();

            assert_eq!(bounds, SquareBounds::from_origin(0, 0, side));
        }
    }

    #[test]
    fn transparent_border_limits_square() {
        let alpha = image::GrayImage::from_fn(64, 64, |x, y| {
            let inside = (12..52).contains(&x) && (12..52).contains(&y);
            image::Luma([if inside { 255 } else { 0 }])
        });

        let bounds = find_largest_inscribed_square(&alpha).unwrap();

        assert_eq!(bounds.side(), 40);
        assert_eq!(bounds, SquareBounds::from_origin(12, 12, 40));
    }

    #[test]
    fn wide_image_is_limited_by_height() {
        let alpha = image::GrayImage::from_pixel(100, 60, image::Luma([1]));

        let bounds = find_largest_inscribed_square(&alpha).unwrap();

        assert_eq!(bounds, SquareBounds::from_origin(20, 0, 60));
    }

    #[test]
    fn single_opaque_center_pixel_is_enough() {
        let alpha = image::GrayImage::from_fn(5, 5, |x, y| {
            image::Luma([if (x, y) == (2, 2) { 255 } else { 0 }])
        });

        let bounds = find_largest_inscribed_square(&alpha).unwrap();

        assert_eq!(bounds, SquareBounds::from_origin(2, 2, 1));
    }

    #[test]
    fn matches_naive_scan_on_a_disc() {
        let alpha = image::GrayImage::from_fn(57, 48, |x, y| {
            let dx = x as f32 - 30.0;
            let dy = y as f32 - 22.0;
            image::Luma([if dx * dx + dy * dy <= 400.0 { 200 } else { 0 }])
        });

        let bounds = find_largest_inscribed_square(&alpha).unwrap();

        assert_eq!(Some(bounds), naive(&alpha));
    }

    #[test]
    fn transparent_center_has_no_square() {
        for (width, height) in [(8, 8), (0, 0), (0, 5)] {
            let alpha = image::GrayImage::new(width, height);

            let error = find_largest_inscribed_square(&alpha).unwrap_err();

            assert!(matches!(
                error.downcast_ref::<Error>(),
                Some(Error::NoValidSquareRegion { .. })
            ));
        }
    }
}

use anyhow::Result;
use image::imageops::FilterType;

use crate::error::Error;

/// Anti-aliased rounded-rectangle alpha mask of `side` × `side` pixels.
///
/// The shape is rasterised at `supersample` times the target resolution,
/// blurred with a sigma of half the supersampling factor and then reduced to
/// the target size with Lanczos3. Fails when the supersampled grid would not
/// fit in a `u32` pixel count.
pub fn rounded_rectangle_mask(
    side: u32,
    radius: f32,
    supersample: u32,
) -> Result<image::GrayImage> {
    let large_side = side
        .checked_mul(supersample)
        .filter(|large| large.checked_mul(*large).is_some())
        .ok_or_else(|| Error::InvalidConfig {
            parameter: "supersample_factor".to_string(),
            value: format!("{supersample} (mask side {side})"),
        })?;
    let large_mask = rasterize_rounded_rectangle(large_side, radius * supersample as f32);

    let blurred = image::imageops::blur(&large_mask, supersample as f32 / 2.0);

    log::debug!("Built {side}x{side} mask from {large_side}x{large_side} supersampled shape");

    Ok(image::imageops::resize(&blurred, side, side, FilterType::Lanczos3))
}

/// Hard-edged rounded rectangle spanning the whole grid.
fn rasterize_rounded_rectangle(side: u32, radius: f32) -> image::GrayImage {
    let last = side.saturating_sub(1) as f32;
    let radius = radius.clamp(0.0, last / 2.0);
    let (low, high) = (radius, last - radius);

    image::GrayImage::from_fn(side, side, |x, y| {
        let (x, y) = (x as f32, y as f32);
        let dx = x - x.clamp(low, high);
        let dy = y - y.clamp(low, high);

        let inside = dx * dx + dy * dy <= radius * radius;
        image::Luma([if inside { 255 } else { 0 }])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_has_requested_size() {
        let mask = rounded_rectangle_mask(37, 37.0 * 0.225, 4).unwrap();

        assert_eq!(mask.dimensions(), (37, 37));
    }

    #[test]
    fn center_is_opaque_and_corners_are_clear() {
        let side = 64;
        let mask = rounded_rectangle_mask(side, side as f32 * 0.225, 4).unwrap();

        assert_eq!(mask.get_pixel(side / 2, side / 2)[0], 255);
        for (x, y) in [(0, 0), (side - 1, 0), (0, side - 1), (side - 1, side - 1)] {
            assert_eq!(mask.get_pixel(x, y)[0], 0, "corner ({x}, {y}) should be transparent");
        }
    }

    #[test]
    fn straight_edges_stay_visible() {
        let side = 64;
        let mask = rounded_rectangle_mask(side, side as f32 * 0.225, 4).unwrap();

        assert!(mask.get_pixel(side / 2, 0)[0] > 0);
        assert!(mask.get_pixel(0, side / 2)[0] > 0);
    }

    #[test]
    fn overflowing_supersample_is_an_error() {
        let error = rounded_rectangle_mask(64, 14.4, 200_000).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::InvalidConfig { parameter, .. }) if parameter == "supersample_factor"
        ));
    }

    #[test]
    fn rasterized_corner_follows_the_arc() {
        let shape = rasterize_rounded_rectangle(100, 20.0);

        assert_eq!(shape.get_pixel(50, 50)[0], 255);
        assert_eq!(shape.get_pixel(20, 0)[0], 255);
        assert_eq!(shape.get_pixel(0, 20)[0], 255);
        assert_eq!(shape.get_pixel(5, 5)[0], 0);
        assert_eq!(shape.get_pixel(99, 99)[0], 0);
    }

    #[test]
    fn oversized_radius_yields_a_disc() {
        let shape = rasterize_rounded_rectangle(41, 1000.0);

        assert_eq!(shape.get_pixel(20, 20)[0], 255);
        assert_eq!(shape.get_pixel(20, 0)[0], 255);
        assert_eq!(shape.get_pixel(0, 0)[0], 0);
    }
}

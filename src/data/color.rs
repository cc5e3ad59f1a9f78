use anyhow::Result;

use crate::error::Error;

/// Parses `RRGGBB` (optionally prefixed with `#`) into an opaque color.
pub fn parse_hex_rgba(hex: &str) -> Result<image::Rgba<u8>> {
    let digits = hex.trim_start_matches('#');

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor {
            value: hex.to_string(),
        }
        .into());
    }

    let channel = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16);

    Ok(image::Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}

/// Sum of absolute differences over the red, green and blue channels.
/// Alpha does not contribute.
pub fn rgb_distance(a: &image::Rgba<u8>, b: &image::Rgba<u8>) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .take(3)
        .map(|(&x, &y)| x.abs_diff(y) as u32)
        .sum()
}

pub fn to_hex(color: &image::Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_target_color() {
        assert_eq!(parse_hex_rgba("E7C930").unwrap(), image::Rgba([231, 201, 48, 255]));
        assert_eq!(parse_hex_rgba("#e7c930").unwrap(), image::Rgba([231, 201, 48, 255]));
    }

    #[test]
    fn rejects_malformed_hex() {
        for value in ["", "E7C93", "E7C9300", "GGGGGG", "#12345"] {
            let error = parse_hex_rgba(value).unwrap_err();
            assert!(
                matches!(error.downcast_ref::<Error>(), Some(Error::InvalidColor { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn distance_is_manhattan_over_rgb() {
        let a = image::Rgba([10, 200, 30, 0]);
        let b = image::Rgba([231, 201, 48, 255]);

        assert_eq!(rgb_distance(&a, &b), 221 + 1 + 18);
        assert_eq!(rgb_distance(&b, &a), rgb_distance(&a, &b));
        assert_eq!(rgb_distance(&b, &b), 0);
    }

    #[test]
    fn hex_includes_alpha() {
        assert_eq!(to_hex(&image::Rgba([231, 201, 48, 255])), "#E7C930FF");
    }
}

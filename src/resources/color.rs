//! Color helpers.
//!
//! Colors in the character model are authored as sRGB hex values; shading
//! happens in linear space and the sRGB surface converts back on store.

use glam::{Vec3, Vec4};

fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` in sRGB to linear RGB.
#[must_use]
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(
        srgb_channel_to_linear(r),
        srgb_channel_to_linear(g),
        srgb_channel_to_linear(b),
    )
}

/// Opaque linear RGBA from an sRGB hex value.
#[must_use]
pub fn hex_to_linear_rgba(hex: u32) -> Vec4 {
    hex_to_linear(hex).extend(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_are_fixed_points() {
        assert_eq!(hex_to_linear(0xFFFFFF), Vec3::ONE);
        assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    }

    #[test]
    fn mid_grey_is_darker_in_linear_space() {
        let c = hex_to_linear(0x808080);
        assert!((c.x - 0.2158).abs() < 1e-3, "got {}", c.x);
        assert_eq!(c.x, c.y);
        assert_eq!(c.y, c.z);
    }
}

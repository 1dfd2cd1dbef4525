use crate::{color::Rgb, math8::scale};

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Add two colors channel by channel, saturating at 255
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Scale every channel by `factor / 256`
#[inline]
pub const fn scale_color(color: Rgb, factor: u8) -> Rgb {
    Rgb {
        r: scale(color.r, factor),
        g: scale(color.g, factor),
        b: scale(color.b, factor),
    }
}

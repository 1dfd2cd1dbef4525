use super::Rgb;

/// Colour wheel with three linear 85-step ramps
///
/// Position 0 is pure green, 85 pure red, 170 pure blue. Every position has
/// exactly two channels lit, and their sum is always 255.
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel(position: u8) -> Rgb {
    if position < 85 {
        let up = position * 3;
        Rgb {
            r: up,
            g: 255 - up,
            b: 0,
        }
    } else if position < 170 {
        let up = (position - 85) * 3;
        Rgb {
            r: 255 - up,
            g: 0,
            b: up,
        }
    } else {
        let up = (position - 170) * 3;
        Rgb {
            r: 0,
            g: up,
            b: 255 - up,
        }
    }
}

use crate::color::{Rgb, scale_color};

/// Linear colour state of the LED chain
///
/// Channels are kept at 5-bit precision, which is all the gamma table can
/// resolve anyway. Writes to indices past the end are ignored.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    levels: [Rgb; N],
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every LED off
    pub const fn new() -> Self {
        Self {
            levels: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// Number of LEDs in the chain
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set the colour of one LED
    pub fn set_color(&mut self, index: usize, color: Rgb) {
        let Some(level) = self.levels.get_mut(index) else {
            return;
        };
        *level = Rgb {
            r: color.r >> 3,
            g: color.g >> 3,
            b: color.b >> 3,
        };
    }

    /// Set the colour of one LED, scaled by `factor / 256`
    pub fn set_color_scaled(&mut self, index: usize, color: Rgb, factor: u8) {
        self.set_color(index, scale_color(color, factor));
    }

    /// Read back the colour of one LED at storage precision
    pub fn get_color(&self, index: usize) -> Option<Rgb> {
        self.levels.get(index).map(|level| Rgb {
            r: level.r << 3,
            g: level.g << 3,
            b: level.b << 3,
        })
    }

    /// Raw 5-bit levels, in chain order
    pub fn levels(&self) -> &[Rgb] {
        &self.levels
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.levels.fill(Rgb { r: 0, g: 0, b: 0 });
    }
}

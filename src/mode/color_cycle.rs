use super::{FrameContext, Generator, Shade};
use crate::color::wheel;
use crate::params::DisplayParameters;

/// Colour wheel spread over the whole chain, rotating one step per tick
///
/// Runs at half brightness.
#[derive(Debug, Clone, Default)]
pub struct ColorCycleMode {
    frame: u8,
}

impl ColorCycleMode {
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    pub const fn frame(&self) -> u8 {
        self.frame
    }
}

impl Generator for ColorCycleMode {
    fn advance(&mut self, _params: &DisplayParameters) {
        self.frame = self.frame.wrapping_add(1);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn shade(&self, index: usize, frame: &FrameContext<'_>) -> Shade {
        let led_count = frame.led_count().max(1);
        let position = (index * 256 / led_count + usize::from(self.frame)) & 0xFF;
        Shade {
            color: wheel(position as u8),
            scale: frame.params.brightness >> 1,
        }
    }
}

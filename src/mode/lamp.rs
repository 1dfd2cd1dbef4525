use super::{FrameContext, Generator, Shade};

/// Plain lamp in the configured colour
#[derive(Debug, Clone, Copy, Default)]
pub struct LampMode;

impl Generator for LampMode {
    fn shade(&self, _index: usize, frame: &FrameContext<'_>) -> Shade {
        Shade {
            color: frame.params.lamp_color,
            scale: frame.params.brightness,
        }
    }
}

//! Frame composition
//!
//! Merges a generator's colours with the text mask. Text wins wherever its
//! mask is lit; everything goes through the brightness-scaled setter of the
//! [`PixelBuffer`].

use core::ops::Range;

use crate::math8::scale;
use crate::mode::{FrameContext, Generator};
use crate::pixel_buffer::PixelBuffer;
use crate::text::TextOverlay;

/// Range of LED indices covered by a text band starting at row `base_line`
///
/// The range can start below LED 0 while the text is raised from underneath.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn text_band(frame: &FrameContext<'_>, base_line: i32) -> Range<i32> {
    let start = base_line * i32::from(frame.layout.per_level);
    start..start + frame.layout.text_band_len() as i32
}

/// Compose one frame
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn compose<const N: usize, G: Generator>(
    buffer: &mut PixelBuffer<N>,
    generator: &G,
    text: &TextOverlay<N>,
    frame: &FrameContext<'_>,
) {
    let band = text_band(frame, text.base_line());
    let leds = frame.led_count().min(N);
    for index in 0..leds {
        let position = index as i32;
        let mask = if band.contains(&position) {
            text.mask_at((position - band.start) as usize)
        } else {
            0
        };

        if mask > 0 {
            buffer.set_color_scaled(
                index,
                frame.params.text.color,
                scale(frame.params.brightness, mask),
            );
        } else {
            let shade = generator.shade(index, frame);
            buffer.set_color_scaled(index, shade.color, shade.scale);
        }
    }
}

/// Dark frame, text included
pub fn compose_off<const N: usize>(buffer: &mut PixelBuffer<N>) {
    buffer.clear();
}

//! 8-bit fixed-point helpers
//!
//! Everything here saturates. The torch must never wrap a byte, a wrapped
//! energy value shows up as a black hole in the middle of the flame.

use embassy_time::Duration;

/// Multiply `value` by `factor`, shift right by `shift` and clamp to a byte.
///
/// `shift` of 8 approximates division by 256, 9 by 512.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mul_shr(value: u32, factor: u32, shift: u32) -> u8 {
    let product = (value.saturating_mul(factor)) >> shift;
    if product > 255 { 255 } else { product as u8 }
}

/// Scale a channel by `scale / 256`
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale(value: u8, scale: u8) -> u8 {
    mul_shr(value as u32, scale as u32, 8)
}

/// Subtract `amount`, never going below `min`
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn reduce(value: u8, amount: u8, min: u8) -> u8 {
    let r = value as i16 - amount as i16;
    if r < min as i16 { min } else { r as u8 }
}

/// Add `amount`, never going above `max`
///
/// `amount` is wide: radiation sums exceed a byte.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn increase(value: u8, amount: u32, max: u8) -> u8 {
    let r = (value as u32).saturating_add(amount);
    if r > max as u32 { max } else { r as u8 }
}

/// Drop the low three bits of a channel (5-bit storage precision)
#[inline]
pub const fn quantize(value: u8) -> u8 {
    (value >> 3) << 3
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Calculate progress (0-255) based on elapsed time and duration
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    if duration.as_millis() == 0 {
        return 255;
    }
    if elapsed.as_millis() >= duration.as_millis() {
        return 255;
    }

    ((elapsed.as_millis() * 255) / duration.as_millis()) as u8
}

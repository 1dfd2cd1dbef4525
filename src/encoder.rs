//! WS2812 bit stream encoder
//!
//! Every data bit becomes one byte on a 9 MHz SPI bus, so a bit cell is
//! 8 × 111 ns ≈ 0.9 µs. `0x7E` keeps the line high for 6 of those 8 slots
//! (logical one), `0x70` for 3 (logical zero). The chips latch after roughly
//! 50 µs of low line, which is why the whole frame goes out inside one
//! critical section.

use crate::SymbolTransport;
use crate::color::Rgb;
use crate::gamma::GammaTable;
use crate::pixel_buffer::PixelBuffer;

/// Symbol for a logical one (long high pulse)
pub const SYMBOL_ONE: u8 = 0x7E;

/// Symbol for a logical zero (short high pulse)
pub const SYMBOL_ZERO: u8 = 0x70;

/// Symbols per LED: three channels, eight bits each
pub const SYMBOLS_PER_PIXEL: usize = 24;

/// Symbols for a single LED, in transmission order
pub type PixelSymbols = [u8; SYMBOLS_PER_PIXEL];

/// Encode one LED
///
/// `level` holds 5-bit channel levels as stored in [`PixelBuffer`]. The chain
/// expects green first, then red, then blue.
pub fn encode_pixel(level: Rgb, gamma: &GammaTable) -> PixelSymbols {
    let mut symbols = [SYMBOL_ZERO; SYMBOLS_PER_PIXEL];
    let channels = [level.g, level.r, level.b];
    for (chunk, channel) in symbols.chunks_exact_mut(8).zip(channels) {
        let mut duty = gamma.get(channel);
        for symbol in chunk {
            *symbol = if duty & 0x80 != 0 {
                SYMBOL_ONE
            } else {
                SYMBOL_ZERO
            };
            duty <<= 1;
        }
    }
    symbols
}

/// Serializes a [`PixelBuffer`] onto a [`SymbolTransport`]
pub struct Ws2812Encoder<T: SymbolTransport> {
    transport: T,
    gamma: GammaTable,
}

impl<T: SymbolTransport> Ws2812Encoder<T> {
    /// Create an encoder with the default PWM curve
    pub fn new(transport: T) -> Self {
        Self::with_gamma(transport, GammaTable::pwm())
    }

    /// Create an encoder with a custom gamma table
    pub const fn with_gamma(transport: T, gamma: GammaTable) -> Self {
        Self { transport, gamma }
    }

    /// Transmit the whole buffer
    ///
    /// Runs with interrupts masked. The line must then stay idle for the
    /// latch gap before the next call.
    pub fn show<const N: usize>(&mut self, buffer: &PixelBuffer<N>) {
        let Self { transport, gamma } = self;
        critical_section::with(|_| {
            for level in buffer.levels() {
                transport.write_symbols(&encode_pixel(*level, gamma));
            }
        });
    }

    pub const fn gamma(&self) -> &GammaTable {
        &self.gamma
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}

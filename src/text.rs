//! Scrolling text overlay
//!
//! The message scrolls right to left through a seven row band of the display.
//! Every tick renders one sub-frame into a brightness mask, so a column
//! slides over `cycles_per_pixel` ticks into its left neighbour instead of
//! jumping a whole LED at once.

use heapless::Vec;

use crate::font::{PIXELS_PER_CHAR, glyph_column};
use crate::math8::{increase, scale};
use crate::message::Message;
use crate::params::{DisplayParameters, Layout, ROWS_PER_GLYPH};

/// Columns at the end of each turn that stay dark, so the end of the text
/// does not touch its start around the tube
const WRAP_GAP: usize = 2;

/// Brightness split between a column and its left neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossFade {
    /// Added to the column on the left
    pub left: u8,
    /// Set on the column itself
    pub right: u8,
}

/// Split `value` for sub-pixel position `fader` (0 = fully right)
///
/// `fade_base / 256` of the value stays on both columns all the time, only
/// the rest moves over.
pub const fn cross_fade(fader: u8, value: u8, fade_base: u8) -> CrossFade {
    let base = scale(value, fade_base);
    let var = value - base;
    let delta = scale(var, fader);
    CrossFade {
        left: base + delta,
        right: base + (var - delta),
    }
}

/// Text state and its rendered mask, for displays of up to `N` LEDs
#[derive(Debug, Clone)]
pub struct TextOverlay<const N: usize> {
    per_level: usize,
    message: Message,
    /// Message column shown in display column 0, negative while sliding in
    pixel_offset: i32,
    /// Sub-frame within the current column
    cycle: u8,
    /// Completed passes
    repeat: u8,
    /// Display row of the band's bottom glyph row for the rendered mask
    base_line: i32,
    /// Brightness per band position, band row 0 first
    mask: Vec<u8, N>,
}

impl<const N: usize> TextOverlay<N> {
    pub fn new(layout: Layout) -> Self {
        let per_level = usize::from(layout.per_level);
        let mut mask = Vec::new();
        let _ = mask.resize(layout.text_band_len().min(N), 0);
        Self {
            per_level,
            message: Message::new(),
            pixel_offset: start_offset(per_level),
            cycle: 0,
            repeat: 0,
            base_line: 0,
            mask,
        }
    }

    /// Replace whatever is showing with `message`, starting off-screen
    pub fn submit(&mut self, message: Message) {
        self.message = message;
        self.pixel_offset = start_offset(self.per_level);
        self.cycle = 0;
        self.repeat = 0;
    }

    /// Drop the current message
    pub fn clear(&mut self) {
        self.message.clear();
        self.mask.fill(0);
    }

    pub fn is_active(&self) -> bool {
        !self.message.is_empty()
    }

    pub const fn message(&self) -> &Message {
        &self.message
    }

    pub const fn pixel_offset(&self) -> i32 {
        self.pixel_offset
    }

    pub const fn cycle(&self) -> u8 {
        self.cycle
    }

    pub const fn repeat_count(&self) -> u8 {
        self.repeat
    }

    /// Bottom row of the band the current mask belongs to; may lie below
    /// the display when the text sinks
    pub const fn base_line(&self) -> i32 {
        self.base_line
    }

    /// Width of the whole message in LED columns
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn total_pixels(&self) -> i32 {
        (self.message.len() * PIXELS_PER_CHAR) as i32
    }

    /// Rendered brightness mask, `per_level × 7` entries
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Mask value at an offset into the text band; zero outside of it
    pub fn mask_at(&self, band_offset: usize) -> u8 {
        self.mask.get(band_offset).copied().unwrap_or(0)
    }

    /// Render the current sub-frame into the mask, then advance
    pub fn render(&mut self, params: &DisplayParameters) {
        self.mask.fill(0);
        if self.message.is_empty() {
            return;
        }

        let text = &params.text;
        self.base_line = i32::from(text.base_line)
            + self.pixel_offset * i32::from(text.raise_by) / self.total_pixels();
        let cycles = text.cycles_per_pixel.max(1);
        let dimming = u16::from(self.repeat) * u16::from(text.fade_per_repeat);
        #[allow(clippy::cast_possible_truncation)]
        let max_bright = u16::from(text.intensity).saturating_sub(dimming) as u8;
        #[allow(clippy::cast_possible_truncation)]
        let fader = (255 * u16::from(self.cycle.min(cycles - 1)) / u16::from(cycles)) as u8;
        let fade = cross_fade(fader, max_bright, params.fade_base);

        let active_cols = self.per_level.saturating_sub(WRAP_GAP);
        for x in 0..active_cols {
            let column = self.glyph_column_at(x);
            if column == 0 {
                continue;
            }
            for row in 0..usize::from(ROWS_PER_GLYPH) {
                if column & (0x40 >> row) == 0 {
                    continue;
                }
                let i = row * self.per_level + x;
                if let Some(value) = self.mask.get_mut(i) {
                    *value = fade.right;
                }
                if x > 0 {
                    if let Some(value) = self.mask.get_mut(i - 1) {
                        *value = increase(*value, u32::from(fade.left), max_bright);
                    }
                }
            }
        }

        self.advance(cycles, text.repeats);
    }

    /// Font column visible in display column `x`
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn glyph_column_at(&self, x: usize) -> u8 {
        let offset = self.pixel_offset + x as i32;
        if offset < 0 {
            return 0;
        }
        let offset = offset as usize;
        self.message
            .code_points()
            .get(offset / PIXELS_PER_CHAR)
            .map(|&code_point| glyph_column(code_point, offset % PIXELS_PER_CHAR))
            .unwrap_or(0)
    }

    fn advance(&mut self, cycles: u8, repeats: u8) {
        self.cycle = self.cycle.saturating_add(1);
        if self.cycle < cycles {
            return;
        }
        self.cycle = 0;
        self.pixel_offset += 1;
        if self.pixel_offset <= self.total_pixels() {
            return;
        }

        self.repeat = self.repeat.saturating_add(1);
        if repeats != 0 && self.repeat >= repeats {
            self.message.clear();
        } else {
            self.pixel_offset = start_offset(self.per_level);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn start_offset(per_level: usize) -> i32 {
    -(per_level as i32)
}

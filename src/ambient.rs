//! Ambient background colour
//!
//! An external feed (a network colour service, for example) can tint the
//! background of the torch. Changes fade in over a given duration.

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, scale_color};
use crate::math8::{blend8, progress8};

/// Request to change the ambient background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbientIntent {
    pub color: Rgb,
    pub intensity: u8,
    /// Time to reach the new level
    pub fade: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AmbientLevel {
    color: Rgb,
    intensity: u8,
}

impl AmbientLevel {
    fn blend(self, target: Self, amount: u8) -> Self {
        Self {
            color: Rgb {
                r: blend8(self.color.r, target.color.r, amount),
                g: blend8(self.color.g, target.color.g, amount),
                b: blend8(self.color.b, target.color.b, amount),
            },
            intensity: blend8(self.intensity, target.intensity, amount),
        }
    }
}

/// Ambient colour with a linear fade between levels
#[derive(Debug, Clone)]
pub struct AmbientBackground {
    source: AmbientLevel,
    target: AmbientLevel,
    start: Instant,
    duration: Duration,
}

impl Default for AmbientBackground {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientBackground {
    /// Start dark
    pub const fn new() -> Self {
        let dark = AmbientLevel {
            color: Rgb { r: 0, g: 0, b: 0 },
            intensity: 0,
        };
        Self {
            source: dark,
            target: dark,
            start: Instant::from_millis(0),
            duration: Duration::from_millis(0),
        }
    }

    /// Fade towards a new colour, starting from wherever the current fade is
    pub fn set(&mut self, intent: AmbientIntent, now: Instant) {
        self.source = self.level(now);
        self.target = AmbientLevel {
            color: intent.color,
            intensity: intent.intensity,
        };
        self.start = now;
        self.duration = intent.fade;
    }

    /// Check if a fade is still running
    pub fn is_fading(&self, now: Instant) -> bool {
        self.source != self.target && now.duration_since(self.start) < self.duration
    }

    /// Background contribution at `now`, intensity applied
    pub fn sample(&self, now: Instant) -> Rgb {
        let level = self.level(now);
        scale_color(level.color, level.intensity)
    }

    fn level(&self, now: Instant) -> AmbientLevel {
        if now < self.start {
            return self.source;
        }
        let progress = progress8(now.duration_since(self.start), self.duration);
        if progress == 255 {
            return self.target;
        }
        self.source.blend(self.target, progress)
    }
}

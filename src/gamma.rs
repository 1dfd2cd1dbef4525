//! Exponential brightness curves
//!
//! Both lookup tables of the device share one curve:
//! `out = round(out_max * (e^(level * k / level_max) - 1) / (e^k - 1))`.
//! They are regenerated from the formula at construction instead of being
//! shipped as literals.

/// Number of representable internal brightness levels (5-bit channels)
pub const LEVELS: usize = 32;

/// Curve exponent `k`; 1 is close to linear, 4 matches perceived brightness
pub const CURVE_EXPONENT: f64 = 4.0;

/// 32-entry lookup from a 5-bit level to an 8-bit output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammaTable {
    entries: [u8; LEVELS],
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::pwm()
    }
}

impl GammaTable {
    /// Generate a table for the given exponent and maximum output level
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn exponential(exponent: f64, out_max: u8) -> Self {
        let mut entries = [0u8; LEVELS];
        let level_max = (LEVELS - 1) as f64;
        let denominator = libm::exp(exponent) - 1.0;
        for (level, entry) in entries.iter_mut().enumerate() {
            let curve = (libm::exp(level as f64 * exponent / level_max) - 1.0) / denominator;
            let out = libm::round(f64::from(out_max) * curve);
            *entry = out.clamp(0.0, f64::from(out_max)) as u8;
        }
        Self { entries }
    }

    /// Brightness level to PWM duty cycle, as the LED chain expects it
    pub fn pwm() -> Self {
        Self::exponential(CURVE_EXPONENT, u8::MAX)
    }

    /// Cell energy to effective flame brightness
    pub fn energy_to_brightness() -> Self {
        Self::exponential(CURVE_EXPONENT, u8::MAX)
    }

    /// Look up a 5-bit level. Levels above 31 saturate.
    #[inline]
    pub fn get(&self, level: u8) -> u8 {
        self.entries[usize::from(level).min(LEVELS - 1)]
    }

    /// Look up a full 8-bit value by its top five bits
    #[inline]
    pub fn map8(&self, value: u8) -> u8 {
        self.get(value >> 3)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.entries
    }
}

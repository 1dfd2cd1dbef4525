//! Torch mode
//!
//! Renders the fire simulation. Energy maps onto colour through a bias and a
//! per-channel gain; very hot cells show as blue-white sparks.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{FrameContext, Generator, Shade};
use crate::color::Rgb;
use crate::energy::EnergyGrid;
use crate::gamma::GammaTable;
use crate::math8::increase;
use crate::params::{DisplayParameters, Layout};

/// Energies above this render as a spark
pub const SPARK_THRESHOLD: u8 = 250;

/// Spark highlight colour
pub const SPARK_COLOR: Rgb = Rgb {
    r: 170,
    g: 170,
    b: 255,
};

/// Fire simulation generator
#[derive(Debug, Clone)]
pub struct TorchMode<const N: usize> {
    grid: EnergyGrid<N>,
    brightness_curve: GammaTable,
    rng: SmallRng,
}

impl<const N: usize> TorchMode<N> {
    pub fn new(layout: Layout, seed: u64) -> Self {
        Self {
            grid: EnergyGrid::new(layout),
            brightness_curve: GammaTable::energy_to_brightness(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub const fn grid(&self) -> &EnergyGrid<N> {
        &self.grid
    }

    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Colour for a given energy level
    pub fn energy_color(&self, energy: u8, params: &DisplayParameters, background: Rgb) -> Rgb {
        if energy > SPARK_THRESHOLD {
            return SPARK_COLOR;
        }
        if energy == 0 {
            return background;
        }
        let torch = &params.torch;
        let eb = u32::from(self.brightness_curve.map8(energy));
        let channel = |bias: u8, gain: u16| increase(bias, (eb * u32::from(gain)) >> 8, u8::MAX);
        Rgb {
            r: channel(torch.bias.r, torch.energy_gain.r),
            g: channel(torch.bias.g, torch.energy_gain.g),
            b: channel(torch.bias.b, torch.energy_gain.b),
        }
    }
}

impl<const N: usize> Generator for TorchMode<N> {
    fn advance(&mut self, params: &DisplayParameters) {
        self.grid.tick(&params.torch, &mut self.rng);
    }

    fn shade(&self, index: usize, frame: &FrameContext<'_>) -> Shade {
        let per_level = self.grid.per_level();
        let energy = if per_level == 0 {
            0
        } else {
            self.grid
                .energy_at(index % per_level, index / per_level, frame.params.upside_down)
        };
        Shade {
            color: self.energy_color(energy, frame.params, frame.background),
            scale: frame.params.brightness,
        }
    }
}

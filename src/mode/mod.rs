//! Display modes
//!
//! Each mode is a generator that supplies a colour per LED. The
//! [`ModeController`] owns all generators and the display parameters, and
//! picks the active one once per tick.

mod color_cycle;
mod lamp;
mod torch;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use color_cycle::ColorCycleMode;
pub use lamp::LampMode;
pub use torch::{SPARK_COLOR, SPARK_THRESHOLD, TorchMode};

use crate::color::Rgb;
use crate::compositor::{compose, compose_off};
use crate::energy::EnergyGrid;
use crate::params::{DisplayParameters, Layout, ParamEffects, ParamUpdate};
use crate::pixel_buffer::PixelBuffer;
use crate::text::TextOverlay;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_TORCH: &str = "torch";
const MODE_NAME_COLOR_CYCLE: &str = "color_cycle";
const MODE_NAME_LAMP: &str = "lamp";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_TORCH: u8 = 1;
const MODE_ID_COLOR_CYCLE: u8 = 2;
const MODE_ID_LAMP: u8 = 3;

/// Known display modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    Off = MODE_ID_OFF,
    Torch = MODE_ID_TORCH,
    ColorCycle = MODE_ID_COLOR_CYCLE,
    Lamp = MODE_ID_LAMP,
}

impl DisplayMode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_TORCH => Self::Torch,
            MODE_ID_COLOR_CYCLE => Self::ColorCycle,
            MODE_ID_LAMP => Self::Lamp,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Torch => MODE_NAME_TORCH,
            Self::ColorCycle => MODE_NAME_COLOR_CYCLE,
            Self::Lamp => MODE_NAME_LAMP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_TORCH => Some(Self::Torch),
            MODE_NAME_COLOR_CYCLE => Some(Self::ColorCycle),
            MODE_NAME_LAMP => Some(Self::Lamp),
            _ => None,
        }
    }
}

/// Colour of one LED and the scale it is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub color: Rgb,
    pub scale: u8,
}

/// Per-frame inputs shared by all generators
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub params: &'a DisplayParameters,
    pub layout: Layout,
    /// Colour of LEDs that have nothing else to show
    pub background: Rgb,
}

impl FrameContext<'_> {
    /// Number of LEDs driven
    pub const fn led_count(&self) -> usize {
        self.layout.led_count()
    }
}

pub trait Generator {
    /// Advance by one tick
    fn advance(&mut self, _params: &DisplayParameters) {}

    /// Colour for the LED at `index`
    fn shade(&self, index: usize, frame: &FrameContext<'_>) -> Shade;
}

/// Owns the display parameters and every mode's generator
#[derive(Debug, Clone)]
pub struct ModeController<const N: usize> {
    params: DisplayParameters,
    active: DisplayMode,
    torch: TorchMode<N>,
    color_cycle: ColorCycleMode,
    lamp: LampMode,
}

impl<const N: usize> ModeController<N> {
    pub fn new(layout: Layout, params: DisplayParameters, seed: u64) -> Self {
        Self {
            active: params.mode,
            params,
            torch: TorchMode::new(layout, seed),
            color_cycle: ColorCycleMode::new(),
            lamp: LampMode,
        }
    }

    pub const fn params(&self) -> &DisplayParameters {
        &self.params
    }

    pub const fn active(&self) -> DisplayMode {
        self.active
    }

    pub const fn grid(&self) -> &EnergyGrid<N> {
        self.torch.grid()
    }

    /// Apply a parameter write, clearing the grid when the spark settings
    /// change
    pub fn apply(&mut self, update: ParamUpdate) -> ParamEffects {
        let effects = self.params.apply(update);
        if effects.reset_energy {
            self.reset_energy();
        }
        effects
    }

    /// Replace the whole parameter set
    pub fn replace_params(&mut self, params: DisplayParameters) {
        self.params = params;
    }

    pub fn reset_energy(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[ModeController] resetting energy grid");
        self.torch.reset();
    }

    /// Pick the generator for this tick and advance it
    pub fn select(&mut self) -> DisplayMode {
        if self.params.mode != self.active {
            #[cfg(feature = "esp32-log")]
            println!(
                "[ModeController] switching mode {} -> {}",
                self.active.as_str(),
                self.params.mode.as_str()
            );
            self.active = self.params.mode;
        }

        match self.active {
            DisplayMode::Off | DisplayMode::Lamp => {}
            DisplayMode::Torch => self.torch.advance(&self.params),
            DisplayMode::ColorCycle => self.color_cycle.advance(&self.params),
        }
        self.active
    }

    /// Compose the active generator and the text mask into `buffer`
    pub fn compose(
        &self,
        buffer: &mut PixelBuffer<N>,
        text: &TextOverlay<N>,
        frame: &FrameContext<'_>,
    ) {
        match self.active {
            DisplayMode::Off => compose_off(buffer),
            DisplayMode::Torch => compose(buffer, &self.torch, text, frame),
            DisplayMode::ColorCycle => compose(buffer, &self.color_cycle, text, frame),
            DisplayMode::Lamp => compose(buffer, &self.lamp, text, frame),
        }
    }
}

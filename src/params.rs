//! Display parameters
//!
//! All tunables of the device live in one [`DisplayParameters`] value that the
//! render loop threads through the simulation, the text overlay and the
//! compositor. It is only ever written through [`DisplayParameters::apply`].

use crate::color::Rgb;
use crate::mode::DisplayMode;

/// Height of a glyph in LED rows
pub const ROWS_PER_GLYPH: u16 = 7;

/// Physical arrangement of the LED chain
///
/// The strip winds helically around the tube: `per_level` LEDs make one turn,
/// `levels` turns stack on top of each other. LED 0 is bottom left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub levels: u16,
    pub per_level: u16,
}

impl Layout {
    /// Reference torch: a 4 m strip wound into 18 turns of 13 LEDs
    pub const TORCH: Self = Self::new(18, 13);

    pub const fn new(levels: u16, per_level: u16) -> Self {
        Self { levels, per_level }
    }

    /// Total number of LEDs
    pub const fn led_count(self) -> usize {
        self.levels as usize * self.per_level as usize
    }

    /// Number of LEDs covered by the text band
    pub const fn text_band_len(self) -> usize {
        self.per_level as usize * ROWS_PER_GLYPH as usize
    }
}

/// Energy gain per channel, 256 = 1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelGains {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

/// Fire simulation coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorchParams {
    /// Bottom row energy range
    pub flame_min: u8,
    pub flame_max: u8,
    /// Chance in percent that a second-row cell ignites per tick
    pub spark_probability: u8,
    pub spark_min: u8,
    pub spark_max: u8,
    /// Energy a spark hands upwards per tick
    pub spark_transfer: u8,
    /// Energy a spark keeps when it moves up, x/256
    pub spark_cap: u8,
    /// Radiation from the cell below, x/256
    pub up_radiation: u8,
    /// Radiation from left and right neighbours, x/512 each
    pub side_radiation: u8,
    /// Energy a passive cell keeps, x/256
    pub heat_cap: u8,
    /// Colour of cells without energy
    pub background: Rgb,
    /// Colour offset of cells with energy
    pub bias: Rgb,
    pub energy_gain: ChannelGains,
}

impl Default for TorchParams {
    fn default() -> Self {
        Self {
            flame_min: 100,
            flame_max: 220,
            spark_probability: 2,
            spark_min: 200,
            spark_max: 255,
            spark_transfer: 50,
            spark_cap: 200,
            up_radiation: 40,
            side_radiation: 30,
            heat_cap: 0,
            background: Rgb { r: 0, g: 0, b: 0 },
            bias: Rgb { r: 5, g: 0, b: 0 },
            energy_gain: ChannelGains {
                r: 256,
                g: 150,
                b: 0,
            },
        }
    }
}

/// Scrolling text settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextParams {
    pub color: Rgb,
    /// Brightness of the first pass
    pub intensity: u8,
    /// Dimming applied per completed pass
    pub fade_per_repeat: u8,
    /// Sub-frames rendered per text column
    pub cycles_per_pixel: u8,
    /// Passes before the message is dropped, 0 = forever
    pub repeats: u8,
    /// Lowest row of the text band
    pub base_line: u8,
    /// Rows the band climbs (or sinks, if negative) over one pass
    pub raise_by: i8,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            color: Rgb {
                r: 0,
                g: 255,
                b: 180,
            },
            intensity: 255,
            fade_per_repeat: 15,
            cycles_per_pixel: 5,
            repeats: 15,
            base_line: 8,
            raise_by: 0,
        }
    }
}

/// Everything the remote side can tune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParameters {
    pub mode: DisplayMode,
    /// Overall brightness
    pub brightness: u8,
    /// Share of a text column's brightness that never fades, x/256
    pub fade_base: u8,
    /// Wait between frames
    pub cycle_wait_ms: u16,
    /// Render the flame from top to bottom
    pub upside_down: bool,
    pub lamp_color: Rgb,
    pub text: TextParams,
    pub torch: TorchParams,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Torch,
            brightness: 255,
            fade_base: 140,
            cycle_wait_ms: 1,
            upside_down: false,
            lamp_color: Rgb {
                r: 220,
                g: 220,
                b: 200,
            },
            text: TextParams::default(),
            torch: TorchParams::default(),
        }
    }
}

/// What a parameter write requires from the render loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamEffects {
    /// The simulation grid must be cleared
    pub reset_energy: bool,
}

macro_rules! param_keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Keys understood by the parameter interface
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum ParamKey {
            $($variant),*
        }

        impl ParamKey {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            pub fn parse_from_str(s: &str) -> Option<Self> {
                match s {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

param_keys! {
    Wait => "wait",
    Mode => "mode",
    Brightness => "brightness",
    FadeBase => "fade_base",
    UpsideDown => "upside_down",
    LampRed => "lamp_red",
    LampGreen => "lamp_green",
    LampBlue => "lamp_blue",
    RedText => "red_text",
    GreenText => "green_text",
    BlueText => "blue_text",
    TextIntensity => "text_intensity",
    CyclesPerPixel => "cycles_per_px",
    TextRepeats => "text_repeats",
    FadePerRepeat => "fade_per_repeat",
    TextBaseLine => "text_base_line",
    RaiseTextBy => "raise_text_by",
    RedBackground => "red_bg",
    GreenBackground => "green_bg",
    BlueBackground => "blue_bg",
    RedBias => "red_bias",
    GreenBias => "green_bias",
    BlueBias => "blue_bias",
    RedEnergy => "red_energy",
    GreenEnergy => "green_energy",
    BlueEnergy => "blue_energy",
    SparkProbability => "spark_prob",
    SparkCap => "spark_cap",
    SparkTransfer => "spark_tfr",
    SideRadiation => "side_rad",
    UpRadiation => "up_rad",
    HeatCap => "heat_cap",
    FlameMin => "flame_min",
    FlameMax => "flame_max",
    SparkMin => "spark_min",
    SparkMax => "spark_max",
}

/// A single `key=value` write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamUpdate {
    pub key: ParamKey,
    pub value: i32,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn byte(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > u8::MAX as i32 {
        u8::MAX
    } else {
        value as u8
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn signed_byte(value: i32) -> i8 {
    if value < i8::MIN as i32 {
        i8::MIN
    } else if value > i8::MAX as i32 {
        i8::MAX
    } else {
        value as i8
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn word(value: i32) -> u16 {
    if value < 0 {
        0
    } else if value > u16::MAX as i32 {
        u16::MAX
    } else {
        value as u16
    }
}

impl DisplayParameters {
    /// Apply one update, clamping the value into the field's range
    ///
    /// An unknown mode number leaves the mode unchanged.
    pub fn apply(&mut self, update: ParamUpdate) -> ParamEffects {
        let value = update.value;
        let torch = &mut self.torch;
        let text = &mut self.text;
        match update.key {
            ParamKey::Wait => self.cycle_wait_ms = word(value),
            ParamKey::Mode => {
                if let Some(mode) = DisplayMode::from_raw(byte(value)) {
                    self.mode = mode;
                }
            }
            ParamKey::Brightness => self.brightness = byte(value),
            ParamKey::FadeBase => self.fade_base = byte(value),
            ParamKey::UpsideDown => self.upside_down = value != 0,
            ParamKey::LampRed => self.lamp_color.r = byte(value),
            ParamKey::LampGreen => self.lamp_color.g = byte(value),
            ParamKey::LampBlue => self.lamp_color.b = byte(value),
            ParamKey::RedText => text.color.r = byte(value),
            ParamKey::GreenText => text.color.g = byte(value),
            ParamKey::BlueText => text.color.b = byte(value),
            ParamKey::TextIntensity => text.intensity = byte(value),
            ParamKey::CyclesPerPixel => text.cycles_per_pixel = byte(value),
            ParamKey::TextRepeats => text.repeats = byte(value),
            ParamKey::FadePerRepeat => text.fade_per_repeat = byte(value),
            ParamKey::TextBaseLine => text.base_line = byte(value),
            ParamKey::RaiseTextBy => text.raise_by = signed_byte(value),
            ParamKey::RedBackground => torch.background.r = byte(value),
            ParamKey::GreenBackground => torch.background.g = byte(value),
            ParamKey::BlueBackground => torch.background.b = byte(value),
            ParamKey::RedBias => torch.bias.r = byte(value),
            ParamKey::GreenBias => torch.bias.g = byte(value),
            ParamKey::BlueBias => torch.bias.b = byte(value),
            ParamKey::RedEnergy => torch.energy_gain.r = word(value),
            ParamKey::GreenEnergy => torch.energy_gain.g = word(value),
            ParamKey::BlueEnergy => torch.energy_gain.b = word(value),
            ParamKey::SparkProbability => {
                torch.spark_probability = byte(value);
                return ParamEffects { reset_energy: true };
            }
            ParamKey::SparkCap => torch.spark_cap = byte(value),
            ParamKey::SparkTransfer => torch.spark_transfer = byte(value),
            ParamKey::SideRadiation => torch.side_radiation = byte(value),
            ParamKey::UpRadiation => torch.up_radiation = byte(value),
            ParamKey::HeatCap => torch.heat_cap = byte(value),
            ParamKey::FlameMin => torch.flame_min = byte(value),
            ParamKey::FlameMax => torch.flame_max = byte(value),
            ParamKey::SparkMin => torch.spark_min = byte(value),
            ParamKey::SparkMax => torch.spark_max = byte(value),
        }
        ParamEffects::default()
    }
}

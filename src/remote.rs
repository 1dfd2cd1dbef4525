//! Virtual digitalSTROM device
//!
//! Exposes the torch as a single-output device. The state is packed into one
//! 32-bit word: `mode << 24 | r << 16 | g << 8 | b` in lamp mode,
//! `mode << 24 | brightness` otherwise.

use crate::color::Rgb;
use crate::intent::{ControlIntent, ParamBatch};
use crate::mode::DisplayMode;
use crate::params::{DisplayParameters, ParamKey, ParamUpdate};

/// Version reported for `version`
pub const API_VERSION: u32 = 1;

/// Reported for `config`: `0xssiibboo`, one output and nothing else
pub const DEVICE_CONFIG: u32 = 0x0000_0001;

/// Mode plus whatever that mode is parameterized by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteState {
    /// Any mode but lamp, with the overall brightness
    ///
    /// `mode` is never [`DisplayMode::Lamp`]; such a value packs with the lamp
    /// mode byte and unpacks as a lamp state. Build it with [`RemoteState::level`].
    Level { mode: DisplayMode, brightness: u8 },
    /// Lamp mode with its colour
    Lamp { color: Rgb },
}

impl RemoteState {
    /// Brightness state for `mode`; `None` for lamp mode, which carries a
    /// colour instead
    pub const fn level(mode: DisplayMode, brightness: u8) -> Option<Self> {
        match mode {
            DisplayMode::Lamp => None,
            mode => Some(Self::Level { mode, brightness }),
        }
    }

    /// Current state of the display
    pub const fn capture(params: &DisplayParameters) -> Self {
        match Self::level(params.mode, params.brightness) {
            Some(state) => state,
            None => Self::Lamp {
                color: params.lamp_color,
            },
        }
    }

    pub const fn mode(self) -> DisplayMode {
        match self {
            Self::Level { mode, .. } => mode,
            Self::Lamp { .. } => DisplayMode::Lamp,
        }
    }

    pub const fn pack(self) -> u32 {
        let mode = (self.mode().as_raw() as u32) << 24;
        match self {
            Self::Level { brightness, .. } => mode | brightness as u32,
            Self::Lamp { color } => {
                mode | (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
            }
        }
    }

    /// Decode a packed word; `None` for an unknown mode byte
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unpack(word: u32) -> Option<Self> {
        let Some(mode) = DisplayMode::from_raw((word >> 24) as u8) else {
            return None;
        };
        match Self::level(mode, word as u8) {
            Some(state) => Some(state),
            None => Some(Self::Lamp {
                color: Rgb {
                    r: (word >> 16) as u8,
                    g: (word >> 8) as u8,
                    b: word as u8,
                },
            }),
        }
    }

    /// Write the state into the display parameters
    pub fn apply_to(self, params: &mut DisplayParameters) {
        match self {
            Self::Level { mode, brightness } => {
                params.mode = mode;
                params.brightness = brightness;
            }
            Self::Lamp { color } => {
                params.mode = DisplayMode::Lamp;
                params.lamp_color = color;
            }
        }
    }
}

/// Request understood by the virtual device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VdsdRequest {
    Version,
    Config,
    /// Read or write the brightness
    Output0(Option<u8>),
    /// Read or write the packed state word
    State0(Option<u32>),
}

impl VdsdRequest {
    /// Parse `name` or `name=value`; unknown names give `None`
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn parse(command: &str) -> Option<Self> {
        let (name, value) = match command.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (command, None),
        };
        match name {
            "version" => Some(Self::Version),
            "config" => Some(Self::Config),
            "output0" => Some(Self::Output0(
                value.map(|v| crate::command::parse_int(v).clamp(0, 255) as u8),
            )),
            "state0" => Some(Self::State0(value.map(parse_word))),
            _ => None,
        }
    }
}

/// Answer of the virtual device
#[derive(Debug, Clone, PartialEq)]
pub struct VdsdReply {
    /// Value returned to the caller, 0 for writes and unknown requests
    pub value: u32,
    /// Write to forward to the render loop
    pub intent: Option<ControlIntent>,
}

/// Handle one virtual device command against the current parameters
pub fn handle_vdsd(command: &str, params: &DisplayParameters) -> VdsdReply {
    let read = |value| VdsdReply {
        value,
        intent: None,
    };
    let write = |intent| VdsdReply {
        value: 0,
        intent: Some(intent),
    };

    match VdsdRequest::parse(command) {
        Some(VdsdRequest::Version) => read(API_VERSION),
        Some(VdsdRequest::Config) => read(DEVICE_CONFIG),
        Some(VdsdRequest::Output0(None)) => read(u32::from(params.brightness)),
        Some(VdsdRequest::Output0(Some(brightness))) => {
            let mut batch = ParamBatch::new();
            let _ = batch.push(ParamUpdate {
                key: ParamKey::Brightness,
                value: i32::from(brightness),
            });
            write(ControlIntent::Params(batch))
        }
        Some(VdsdRequest::State0(None)) => read(RemoteState::capture(params).pack()),
        Some(VdsdRequest::State0(Some(word))) => match RemoteState::unpack(word) {
            Some(state) => write(ControlIntent::RemoteState(state)),
            None => read(0),
        },
        None => read(0),
    }
}

/// Decimal word, or hex with a `0x` prefix
fn parse_word(value: &str) -> u32 {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).unwrap_or(0),
        None => value.parse().unwrap_or(0),
    }
}

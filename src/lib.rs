#![no_std]

#[cfg(feature = "ambient")]
pub mod ambient;
pub mod channel;
pub mod color;
pub mod command;
pub mod compositor;
pub mod encoder;
pub mod energy;
pub mod font;
pub mod frame_scheduler;
pub mod gamma;
pub mod intent;
pub mod math8;
pub mod message;
pub mod mode;
pub mod params;
pub mod pixel_buffer;
#[cfg(feature = "remote")]
pub mod remote;
pub mod renderer;
pub mod text;

#[cfg(feature = "ambient")]
pub use ambient::{AmbientBackground, AmbientIntent};
pub use channel::{IntentChannel, IntentReceiver, IntentSender, TryReceiveError, TrySendError};
pub use command::parse_params;
pub use encoder::Ws2812Encoder;
pub use energy::{CellMode, EnergyCell, EnergyGrid};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::GammaTable;
pub use intent::{ControlIntent, IntentEffects, IntentProcessor, ParamBatch};
pub use message::Message;
pub use mode::{DisplayMode, ModeController};
pub use params::{DisplayParameters, Layout, ParamKey, ParamUpdate};
pub use pixel_buffer::PixelBuffer;
#[cfg(feature = "remote")]
pub use remote::{RemoteState, handle_vdsd};
pub use renderer::{Renderer, RendererConfig};
pub use text::TextOverlay;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED bus trait
///
/// Implement this trait to support different hardware platforms. Every
/// byte is one protocol symbol, clocked out at the symbol rate (an SPI bus
/// at 9 MHz on the torch).
pub trait SymbolTransport {
    /// Write symbols to the bus
    fn write_symbols(&mut self, symbols: &[u8]);
}

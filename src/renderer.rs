use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

#[cfg(feature = "ambient")]
use crate::ambient::AmbientBackground;
use crate::channel::IntentReceiver;
#[cfg(feature = "ambient")]
use crate::color::add_colors;
use crate::energy::EnergyGrid;
use crate::intent::{IntentEffects, IntentProcessor};
use crate::message::Message;
use crate::mode::{DisplayMode, FrameContext, ModeController};
use crate::params::{DisplayParameters, Layout, ParamUpdate};
use crate::pixel_buffer::PixelBuffer;
use crate::text::TextOverlay;

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    pub layout: Layout,
    pub params: DisplayParameters,
    /// Seed of the flame and spark generator
    pub seed: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            layout: Layout::TORCH,
            params: DisplayParameters::default(),
            seed: 0x5EED,
        }
    }
}

/// Message torch renderer - the main orchestrator
pub struct Renderer<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    layout: Layout,

    // Internal state
    controller: ModeController<MAX_LEDS>,
    text: TextOverlay<MAX_LEDS>,
    #[cfg(feature = "ambient")]
    ambient: AmbientBackground,
    frame_buffer: PixelBuffer<MAX_LEDS>,
}

impl<'a, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    pub fn new(intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>, config: &RendererConfig) -> Self {
        Self {
            intent_processor: IntentProcessor::new(intents),
            layout: config.layout,
            controller: ModeController::new(config.layout, config.params, config.seed),
            text: TextOverlay::new(config.layout),
            #[cfg(feature = "ambient")]
            ambient: AmbientBackground::new(),
            frame_buffer: PixelBuffer::new(),
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this once per tick.
    pub fn render(&mut self, now: Instant) -> &PixelBuffer<MAX_LEDS> {
        self.process_intents(now);

        self.text.render(self.controller.params());
        self.controller.select();

        let params = self.controller.params();
        #[cfg(feature = "ambient")]
        let background = add_colors(params.torch.background, self.ambient.sample(now));
        #[cfg(not(feature = "ambient"))]
        let background = params.torch.background;

        let frame = FrameContext {
            params,
            layout: self.layout,
            background,
        };
        self.controller.compose(&mut self.frame_buffer, &self.text, &frame);

        &self.frame_buffer
    }

    /// Start scrolling a new message right away
    pub fn submit_message(&mut self, message: Message) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer] showing message, {} chars", message.len());
        self.text.submit(message);
    }

    /// Apply a parameter write outside the intent channel
    pub fn apply_params(&mut self, updates: &[ParamUpdate]) {
        for update in updates {
            self.controller.apply(*update);
        }
    }

    pub const fn params(&self) -> &DisplayParameters {
        self.controller.params()
    }

    pub const fn mode(&self) -> DisplayMode {
        self.controller.active()
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn text(&self) -> &TextOverlay<MAX_LEDS> {
        &self.text
    }

    pub const fn grid(&self) -> &EnergyGrid<MAX_LEDS> {
        self.controller.grid()
    }

    pub const fn frame(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.frame_buffer
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self, now: Instant) {
        let effects = self.intent_processor.process_pending(&mut self.controller);
        self.apply_effects(effects, now);
    }

    /// Apply side effects from intent processing
    #[cfg_attr(not(feature = "ambient"), allow(unused_variables))]
    fn apply_effects(&mut self, effects: IntentEffects, now: Instant) {
        if let Some(message) = effects.message {
            self.text.submit(message);
        }

        #[cfg(feature = "ambient")]
        if let Some(ambient) = effects.ambient {
            self.ambient.set(ambient, now);
        }
    }
}

//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::encoder::Ws2812Encoder;
use crate::{Renderer, SymbolTransport};

/// Shortest idle line between frames; the chain latches during this gap.
pub const LATCH_GAP: Duration = Duration::from_micros(50);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Inter-frame wait for a `wait` parameter in milliseconds
pub fn frame_duration(cycle_wait_ms: u16) -> Duration {
    let wait = Duration::from_millis(u64::from(cycle_wait_ms));
    if wait < LATCH_GAP { LATCH_GAP } else { wait }
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Calls the renderer and the WS2812 encoder
/// - Returns timing info so the caller can sleep appropriately
///
/// The frame duration follows the `wait` parameter and is re-read every tick.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, Ws2812Encoder::new(spi));
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<
    'a,
    T: SymbolTransport,
    const MAX_LEDS: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    encoder: Ws2812Encoder<T>,
    renderer: Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    next_frame: Instant,
}

impl<'a, T: SymbolTransport, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, T, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    pub const fn new(
        renderer: Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE>,
        encoder: Ws2812Encoder<T>,
    ) -> Self {
        Self {
            encoder,
            renderer,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Transmits it through the encoder
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let frame = self.renderer.render(now);
        self.encoder.show(frame);

        // Read after rendering so a `wait` change applies to this gap
        let frame_duration = frame_duration(self.renderer.params().cycle_wait_ms);

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.next_frame += frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_ticks(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub const fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, INTENT_CHANNEL_SIZE> {
        &mut self.renderer
    }

    pub const fn encoder(&self) -> &Ws2812Encoder<T> {
        &self.encoder
    }
}

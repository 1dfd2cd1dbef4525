//! Intent processing
//!
//! Turns what command handlers queued into parameter changes and side effects
//! for the renderer. Runs once per tick, before anything is rendered, so a
//! command never applies to half a frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

#[cfg(feature = "ambient")]
use crate::ambient::AmbientIntent;
use crate::channel::IntentReceiver;
use crate::message::Message;
use crate::mode::ModeController;
use crate::params::ParamUpdate;
#[cfg(feature = "remote")]
use crate::remote::RemoteState;

/// Most updates a single parameter command can carry
pub const MAX_PARAM_UPDATES: usize = 32;

/// Updates of one parameter command, applied together
pub type ParamBatch = Vec<ParamUpdate, MAX_PARAM_UPDATES>;

/// Something an external handler wants the render loop to do
#[derive(Debug, Clone, PartialEq)]
pub enum ControlIntent {
    /// Apply a parsed parameter command
    Params(ParamBatch),
    /// Write from the virtual device interface
    #[cfg(feature = "remote")]
    RemoteState(RemoteState),
    /// New ambient background level
    #[cfg(feature = "ambient")]
    Ambient(AmbientIntent),
}

/// Side effects from processing intents that the renderer should apply
#[derive(Debug, Clone, Default)]
pub struct IntentEffects {
    /// New message to show, replacing the current one
    pub message: Option<Message>,
    /// New ambient background to fade to
    #[cfg(feature = "ambient")]
    pub ambient: Option<AmbientIntent>,
}

/// Drains the intent channel into the mode controller
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents (non-blocking)
    ///
    /// Parameter writes go straight into `controller`; the rest is returned.
    pub fn process_pending<const N: usize>(
        &mut self,
        controller: &mut ModeController<N>,
    ) -> IntentEffects {
        #[cfg_attr(not(feature = "ambient"), allow(unused_mut))]
        let mut effects = IntentEffects {
            message: self.intents.take_message(),
            ..IntentEffects::default()
        };

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::Params(batch) => {
                    for update in batch {
                        controller.apply(update);
                    }
                }
                #[cfg(feature = "remote")]
                ControlIntent::RemoteState(state) => {
                    let mut params = *controller.params();
                    state.apply_to(&mut params);
                    controller.replace_params(params);
                }
                #[cfg(feature = "ambient")]
                ControlIntent::Ambient(ambient) => {
                    effects.ambient = Some(ambient);
                }
            }
        }

        #[cfg(feature = "esp32-log")]
        if let Some(message) = &effects.message {
            println!("[IntentProcessor] new message, {} chars", message.len());
        }

        effects
    }
}

//! Inbox between command handlers and the render loop
//!
//! Command handlers may run from interrupts or another executor. Everything
//! they hand over goes through an [`IntentChannel`], guarded by
//! `critical-section` and backed by fixed-size `heapless` storage.
//!
//! Control intents queue up in order. Messages do not: there is a single
//! message slot, and every submission replaces what is in it.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Deque;

use crate::intent::ControlIntent;
use crate::message::Message;

/// Error returned when the intent queue is full. Carries the rejected intent.
#[derive(Debug, Clone, PartialEq)]
pub struct TrySendError(pub ControlIntent);

/// Error returned when trying to receive from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

struct Inbox<const SIZE: usize> {
    intents: Deque<ControlIntent, SIZE>,
    message: Option<Message>,
}

/// Bounded, interrupt-safe inbox of the render loop
pub struct IntentChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Inbox<SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inbox {
                intents: Deque::new(),
                message: None,
            })),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue a control intent
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        let result = critical_section::with(|cs| {
            let mut inbox = self.inner.borrow(cs).borrow_mut();
            inbox.intents.push_back(intent).map_err(TrySendError)
        });
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[IntentChannel] queue full, intent rejected");
        }
        result
    }

    /// Put a message into the slot, replacing one not yet picked up
    pub fn submit_message(&self, message: Message) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().message = Some(message);
        });
    }

    /// Take the oldest queued intent
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut inbox = self.inner.borrow(cs).borrow_mut();
            inbox.intents.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Take the pending message, if any
    pub fn take_message(&self) -> Option<Message> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().message.take())
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of an [`IntentChannel`], for command handlers
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    /// Show a new message, dropping whatever is scrolling
    pub fn submit_message(&self, message: Message) {
        self.channel.submit_message(message);
    }
}

/// Receiving side of an [`IntentChannel`], owned by the render loop
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn take_message(&self) -> Option<Message> {
        self.channel.take_message()
    }
}

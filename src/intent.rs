//! Input queue between collaborators and the engine.
//!
//! UI, web and analyzer tasks may run in other execution contexts. They push
//! [`EngineIntent`]s into a bounded queue guarded by `critical-section`; the
//! engine drains it without blocking at the start of every tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::animation::AnimationId;
use crate::band_mapper::AudioInput;
use crate::brightness::BrightnessMode;
use crate::color::Rgb;

/// A requested change of engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineIntent {
    /// Select an animation; enables animations as the selection list does
    SelectAnimation(AnimationId),
    /// Select an animation by raw id as stored or sent over the wire
    SelectRawAnimation(u8),
    SetAnimationsEnabled(bool),
    SetBrightnessMode(BrightnessMode),
    /// Static brightness from the slider
    SetBrightness(u8),
    SetAudioReactive(bool),
    /// Solid color from the color wheel; stops animations
    SetColor(Rgb),
    SetWhiteMode(bool),
    /// Fresh analyzer snapshot
    Audio(AudioInput),
}

/// Error returned when the queue is full; carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub EngineIntent);

/// Bounded intent queue, safe to share between interrupt and thread contexts.
pub struct IntentChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<EngineIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue an intent.
    ///
    /// Audio snapshots go stale quickly, so a new one replaces the most recent
    /// queued snapshot when it sits at the back of the queue.
    pub fn try_send(&self, intent: EngineIntent) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if let EngineIntent::Audio(_) = intent {
                if let Some(last) = queue.back_mut() {
                    if matches!(last, EngineIntent::Audio(_)) {
                        *last = intent;
                        return Ok(());
                    }
                }
            }
            queue.push_back(intent).map_err(QueueFull)
        })
    }

    pub fn try_receive(&self) -> Option<EngineIntent> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half handed to collaborators
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: EngineIntent) -> Result<(), QueueFull> {
        self.channel.try_send(intent)
    }
}

/// Receiving half drained by the engine
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<EngineIntent> {
        self.channel.try_receive()
    }
}

impl<const SIZE: usize> Iterator for IntentReceiver<'_, SIZE> {
    type Item = EngineIntent;

    /// Yields queued intents until the queue is empty
    fn next(&mut self) -> Option<EngineIntent> {
        self.try_receive()
    }
}

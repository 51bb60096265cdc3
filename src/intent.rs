//! Runtime control of a running animation
//!
//! A bounded channel built on `critical-section` and `heapless::Deque`.
//! Other tasks or interrupts push intents, the frame scheduler drains them
//! between frames, so the frame path itself never waits on a lock.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::wave::Direction;

/// A requested change to the animation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationIntent {
    /// Reverse the wave travel direction
    FlipDirection,
    /// Make the wave travel in the given direction
    SetDirection(Direction),
    /// Change how fast the wave moves
    SetSpeedDivisor(f32),
    /// Place a gradient group at a position offset
    MoveGroup { group: usize, offset: isize },
}

/// Interrupt-safe intent queue holding up to `SIZE` intents
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<AnimationIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue an intent
    ///
    /// Hands the intent back if the queue is full.
    pub fn try_send(&self, intent: AnimationIntent) -> Result<(), AnimationIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().push_back(intent))
    }

    /// Take the oldest queued intent
    pub fn try_receive(&self) -> Option<AnimationIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: AnimationIntent) -> Result<(), AnimationIntent> {
        self.channel.try_send(intent)
    }
}

/// Receiving half of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<AnimationIntent> {
        self.channel.try_receive()
    }
}

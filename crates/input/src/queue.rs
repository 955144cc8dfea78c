//! Per-frame key buffer.

use arrayvec::ArrayVec;

use crate::types::Key;

/// Keys buffered per frame before further presses are dropped.
pub const KEY_QUEUE_CAPACITY: usize = 32;

/// Bounded FIFO of key presses collected during one frame.
///
/// Fixed capacity keeps the hot loop allocation-free. A quit key is never
/// dropped: when the queue is full it replaces the newest entry.
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    keys: ArrayVec<Key, KEY_QUEUE_CAPACITY>,
    dropped: u64,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a key. Returns `false` if it had to be dropped.
    pub fn push(&mut self, key: Key) -> bool {
        match self.keys.try_push(key) {
            Ok(()) => true,
            Err(_) if key.is_quit() => {
                self.keys.pop();
                self.keys.push(key);
                self.dropped += 1;
                true
            }
            Err(_) => {
                self.dropped += 1;
                false
            }
        }
    }

    /// Remove and return every buffered key, oldest first.
    pub fn drain(&mut self) -> arrayvec::Drain<'_, Key, KEY_QUEUE_CAPACITY> {
        self.keys.drain(..)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total keys lost to overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

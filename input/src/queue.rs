//! Fixed-capacity key event queue
//!
//! Decouples the platform poll from the dispatcher. The queue never blocks
//! and never grows: when the producer outruns the consumer the oldest
//! unread entry is overwritten.

use crate::keycode::KeyCode;

/// Capacity of the key event queue.
pub const KEY_QUEUE_SIZE: usize = 16;

/// A normalized key transition waiting to be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueuedKeyEvent {
    pub pressed: bool,
    pub key: KeyCode,
}

/// Circular queue with overwrite-on-full semantics.
///
/// Read and write cursors advance monotonically (wrapping); a slot is the
/// cursor modulo `N`. `N` must be a power of two so the modulo stays
/// consistent across cursor wraparound.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [T; N],
    read: usize,
    write: usize,
}

/// The queue between platform polling and event dispatch.
pub type KeyQueue = RingBuffer<QueuedKeyEvent, KEY_QUEUE_SIZE>;

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        const { assert!(N.is_power_of_two(), "ring buffer capacity must be a power of two") };
        Self {
            slots: [T::default(); N],
            read: 0,
            write: 0,
        }
    }

    /// Append an entry, dropping the oldest unread one if the queue is full.
    ///
    /// Returns true if an entry was overwritten.
    pub fn push(&mut self, item: T) -> bool {
        let overwrote = self.len() == N;
        if overwrote {
            self.read = self.read.wrapping_add(1);
        }
        self.slots[self.write % N] = item;
        self.write = self.write.wrapping_add(1);
        overwrote
    }

    /// Remove and return the oldest unread entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.read == self.write {
            return None;
        }
        let item = self.slots[self.read % N];
        self.read = self.read.wrapping_add(1);
        Some(item)
    }

    pub fn len(&self) -> usize {
        self.write.wrapping_sub(self.read)
    }

    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all unread entries.
    pub fn clear(&mut self) {
        self.read = self.write;
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuffer<QueuedKeyEvent, KEY_QUEUE_SIZE> {
    /// Queue a key transition. Overflow drops the oldest pending transition.
    pub fn push_key(&mut self, pressed: bool, key: KeyCode) {
        if self.push(QueuedKeyEvent { pressed, key }) {
            tracing::trace!("Key queue full, dropped oldest transition (queued {})", key);
        }
    }
}

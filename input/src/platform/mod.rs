//! Platform event sources
//!
//! A platform backend reports raw samples in the [`crate::raw`] code space,
//! one event at a time, until it has nothing left for this poll.

#[cfg(feature = "window")]
mod window;

#[cfg(feature = "window")]
pub use self::window::WinitEventSource;

use crate::raw::RawInputSample;

/// One notification from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    Input(RawInputSample),
    /// The user asked to close the game
    Quit,
}

/// Something that can be polled for pending platform events.
pub trait EventSource {
    /// Next pending event, or `None` once this poll is exhausted.
    fn poll_event(&mut self) -> Option<PlatformEvent>;
}

/// A source that never reports anything, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        None
    }
}

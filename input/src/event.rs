//! Engine-level input events and the sink they are posted to

use std::collections::VecDeque;

use crate::keycode::KeyCode;

/// A normalized input event handed to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Key pressed. `ch` is the shift-translated character (0 if none).
    KeyDown { key: KeyCode, ch: u8 },
    /// Key released. Consumers must match releases on `key`, not on a
    /// character.
    KeyUp { key: KeyCode },
    /// Composite controller state sampled once per poll.
    Joystick {
        /// Bit i set iff virtual button i is held
        buttons: u32,
        /// Horizontal movement
        x: i32,
        /// Vertical movement
        y: i32,
        /// Strafing
        strafe: i32,
    },
}

impl EngineEvent {
    /// The key code for key events.
    pub fn key(&self) -> Option<KeyCode> {
        match *self {
            EngineEvent::KeyDown { key, .. } | EngineEvent::KeyUp { key } => Some(key),
            EngineEvent::Joystick { .. } => None,
        }
    }

    /// The typed character. Always 0 for key-up and joystick events.
    pub fn character(&self) -> u8 {
        match *self {
            EngineEvent::KeyDown { ch, .. } => ch,
            _ => 0,
        }
    }
}

/// Receiver of posted engine events.
pub trait EventSink {
    fn post_event(&mut self, event: EngineEvent);
}

impl EventSink for Vec<EngineEvent> {
    fn post_event(&mut self, event: EngineEvent) {
        self.push(event);
    }
}

impl EventSink for VecDeque<EngineEvent> {
    fn post_event(&mut self, event: EngineEvent) {
        self.push_back(event);
    }
}

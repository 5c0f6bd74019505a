//! Nethercore Input - raw input normalization
//!
//! Turns platform input (keyboard keys, mouse buttons, gamepad buttons and
//! axes) into a bounded, ordered stream of engine input events.
//!
//! # Architecture
//!
//! - [`translate`] - raw platform codes to internal [`KeyCode`]s
//! - [`queue`] - fixed-capacity key queue that overwrites when full
//! - [`shift`] - shift tracking and typed-character translation
//! - [`joystick`] - virtual button remapping, dead zone and axis inversion
//! - [`InputSubsystem`] - polls the platform, drains the queue and posts
//!   [`EngineEvent`]s to an [`EventSink`]
//!
//! Platform backends live behind features: `window` (winit keyboard/mouse)
//! and `gamepad` (gilrs).

pub mod config;
pub mod error;
pub mod event;
pub mod joystick;
pub mod keycode;
pub mod platform;
pub mod queue;
pub mod raw;
pub mod shift;
pub mod subsystem;
pub mod translate;

pub use config::InputConfig;
pub use error::{ConfigError, InputError};
pub use event::{EngineEvent, EventSink};
pub use joystick::{Controller, DEAD_ZONE, NUM_VIRTUAL_BUTTONS, VirtualButtonMap};
pub use keycode::KeyCode;
pub use platform::{EventSource, NoEvents, PlatformEvent};
pub use queue::{KEY_QUEUE_SIZE, KeyQueue, QueuedKeyEvent, RingBuffer};
pub use raw::{Axis, PhysicalButton, RawInputSample};
pub use shift::ShiftState;
pub use subsystem::InputSubsystem;

#[cfg(feature = "gamepad")]
pub use joystick::GilrsController;
#[cfg(feature = "window")]
pub use platform::WinitEventSource;

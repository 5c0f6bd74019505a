//! Input subsystem: platform polling, key dispatch and joystick sampling
//!
//! Owns the key queue, the shift state and the controller handle. The game
//! loop calls [`InputSubsystem::dispatch`] and
//! [`InputSubsystem::update_joystick`] once per tick from a single thread.


use crate::config::InputConfig;
use crate::error::InputError;
use crate::event::{EngineEvent, EventSink};
use crate::joystick::{self, Controller};
use crate::keycode::KeyCode;
use crate::platform::{EventSource, PlatformEvent};
use crate::queue::{KeyQueue, QueuedKeyEvent};
use crate::raw::{Axis, RawInputSample};
use crate::shift::ShiftState;
use crate::translate::translate_sample;

pub struct InputSubsystem {
    /// Joystick enable flag, button map and axis bindings
    config: InputConfig,

    /// Key transitions waiting for the next dispatch
    queue: KeyQueue,

    /// Held shift keys
    shift: ShiftState,

    /// Opened controller (None if no controller or gamepad support disabled)
    controller: Option<Box<dyn Controller>>,
}

impl InputSubsystem {
    /// Create a keyboard-only subsystem with empty queue and shift state.
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            queue: KeyQueue::new(),
            shift: ShiftState::new(),
            controller: None,
        }
    }

    /// Create a subsystem and open the first available gamepad.
    ///
    /// Gamepad failures are logged and leave the subsystem keyboard-only.
    #[cfg(feature = "gamepad")]
    pub fn init(config: InputConfig) -> Self {
        let mut subsystem = Self::new(config);
        match joystick::GilrsController::open_first() {
            Ok(Some(controller)) => subsystem.attach_controller(Box::new(controller)),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize gamepad support: {}. Gamepads will not be available.",
                    e
                );
            }
        }
        subsystem
    }

    /// Create a subsystem (keyboard only when the gamepad feature is disabled)
    #[cfg(not(feature = "gamepad"))]
    pub fn init(config: InputConfig) -> Self {
        Self::new(config)
    }

    /// Use `controller` for joystick sampling and controller button edges.
    pub fn attach_controller(&mut self, controller: Box<dyn Controller>) {
        tracing::info!("Using controller: {}", controller.name());
        self.controller = Some(controller);
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller_name(&self) -> Option<&str> {
        self.controller.as_deref().map(|c| c.name())
    }

    /// Close the controller. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(controller) = self.controller.take() {
            tracing::info!("Closing controller: {}", controller.name());
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Replace the configuration (button map, axis bindings, joystick flag)
    pub fn update_config(&mut self, config: InputConfig) {
        self.config = config;
    }

    pub fn shift_state(&self) -> ShiftState {
        self.shift
    }

    /// Number of key transitions waiting for dispatch
    pub fn pending_keys(&self) -> usize {
        self.queue.len()
    }

    /// Queue an already-translated key transition.
    pub fn push_key(&mut self, pressed: bool, key: KeyCode) {
        self.queue.push_key(pressed, key);
    }

    /// Translate a raw sample and queue it if it produces a transition.
    pub fn queue_sample(&mut self, sample: RawInputSample) {
        if let Some((pressed, key)) = translate_sample(sample) {
            self.queue.push_key(pressed, key);
        }
    }

    /// Run one platform poll cycle: drain `source`, then the controller's
    /// button edges, into the key queue.
    ///
    /// Returns [`InputError::QuitRequested`] as soon as the platform asks to
    /// quit; the caller is expected to terminate.
    pub fn poll_platform<E>(&mut self, source: &mut E) -> Result<(), InputError>
    where
        E: EventSource + ?Sized,
    {
        while let Some(event) = source.poll_event() {
            match event {
                PlatformEvent::Quit => return Err(InputError::QuitRequested),
                PlatformEvent::Input(sample) => self.queue_sample(sample),
            }
        }

        if let Some(controller) = self.controller.as_deref_mut() {
            while let Some((button, pressed)) = controller.next_button_event() {
                let sample = RawInputSample::ControllerButton { button, pressed };
                if let Some((pressed, key)) = translate_sample(sample) {
                    self.queue.push_key(pressed, key);
                }
            }
        }
        Ok(())
    }

    /// Poll the platform once, then drain queued transitions to `sink`.
    ///
    /// Returns the number of events posted.
    pub fn dispatch<E, S>(&mut self, source: &mut E, sink: &mut S) -> Result<usize, InputError>
    where
        E: EventSource + ?Sized,
        S: EventSink + ?Sized,
    {
        self.poll_platform(source)?;
        Ok(self.drain(sink))
    }

    /// Drain queued transitions to `sink`.
    ///
    /// Draining stops right after the first key release, even one that was
    /// not posted; later transitions stay queued for the next call. Key 0 is
    /// never posted.
    pub fn drain<S>(&mut self, sink: &mut S) -> usize
    where
        S: EventSink + ?Sized,
    {
        let mut posted = 0;
        while let Some(QueuedKeyEvent { pressed, key }) = self.queue.pop() {
            self.shift.on_key_transition(pressed, key);

            if pressed {
                if !key.is_none() {
                    let ch = self.shift.typed_char(key);
                    sink.post_event(EngineEvent::KeyDown { key, ch });
                    posted += 1;
                }
            } else {
                if !key.is_none() {
                    sink.post_event(EngineEvent::KeyUp { key });
                    posted += 1;
                }
                break;
            }
        }
        posted
    }

    /// Bitmask of held virtual buttons, 0 without a controller.
    pub fn sample_buttons(&self) -> u32 {
        self.controller.as_deref().map_or(0, |controller| {
            joystick::sample_buttons(controller, &self.config.joystick_physical_buttons)
        })
    }

    /// Filtered axis reading, 0 without a controller or for a disabled axis.
    pub fn sample_axis(&self, axis: Option<Axis>, invert: bool) -> i32 {
        self.controller
            .as_deref()
            .map_or(0, |controller| joystick::sample_axis(controller, axis, invert))
    }

    /// Post one joystick state event.
    ///
    /// Nothing is posted when joystick use is disabled or no controller is
    /// attached. Returns whether an event was posted.
    pub fn update_joystick<S>(&mut self, sink: &mut S) -> bool
    where
        S: EventSink + ?Sized,
    {
        if !self.config.use_joystick || self.controller.is_none() {
            return false;
        }

        let config = &self.config;
        let event = EngineEvent::Joystick {
            buttons: self.sample_buttons(),
            x: self.sample_axis(config.x_axis(), config.joystick_x_invert),
            y: self.sample_axis(config.y_axis(), config.joystick_y_invert),
            strafe: self.sample_axis(config.strafe_axis(), config.joystick_strafe_invert),
        };
        sink.post_event(event);
        true
    }
}

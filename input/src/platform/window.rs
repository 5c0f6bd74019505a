//! winit window events as a platform event source

use std::collections::VecDeque;

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{EventSource, PlatformEvent};
use crate::raw::{RawInputSample, keysym, mouse};

/// Buffers input-relevant `WindowEvent`s until the next poll.
///
/// winit delivers events through `ApplicationHandler::window_event`; hand
/// each one to [`WinitEventSource::handle_window_event`] and the dispatcher
/// drains them on its next invocation.
#[derive(Debug, Default)]
pub struct WinitEventSource {
    pending: VecDeque<PlatformEvent>,
}

impl WinitEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window event. Returns true if it was input the pipeline uses.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let platform_event = match event {
            WindowEvent::CloseRequested => PlatformEvent::Quit,
            WindowEvent::KeyboardInput { event, .. } => {
                let code = match event.physical_key {
                    PhysicalKey::Code(key) => key_to_raw(key),
                    PhysicalKey::Unidentified(_) => keysym::UNKNOWN,
                };
                PlatformEvent::Input(RawInputSample::Key {
                    code,
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                PlatformEvent::Input(RawInputSample::MouseButton {
                    code: mouse_to_raw(*button),
                    pressed: *state == ElementState::Pressed,
                })
            }
            _ => return false,
        };
        self.pending.push_back(platform_event);
        true
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl EventSource for WinitEventSource {
    fn poll_event(&mut self) -> Option<PlatformEvent> {
        self.pending.pop_front()
    }
}

fn mouse_to_raw(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => mouse::LEFT,
        MouseButton::Middle => mouse::MIDDLE,
        MouseButton::Right => mouse::RIGHT,
        MouseButton::Back => mouse::X1,
        MouseButton::Forward => mouse::X2,
        MouseButton::Other(n) => u32::from(n),
    }
}

/// Map a physical key to its raw keyboard code.
///
/// Printable keys report the unshifted US-layout character.
fn key_to_raw(key: KeyCode) -> u32 {
    let ascii = match key {
        KeyCode::KeyA => b'a',
        KeyCode::KeyB => b'b',
        KeyCode::KeyC => b'c',
        KeyCode::KeyD => b'd',
        KeyCode::KeyE => b'e',
        KeyCode::KeyF => b'f',
        KeyCode::KeyG => b'g',
        KeyCode::KeyH => b'h',
        KeyCode::KeyI => b'i',
        KeyCode::KeyJ => b'j',
        KeyCode::KeyK => b'k',
        KeyCode::KeyL => b'l',
        KeyCode::KeyM => b'm',
        KeyCode::KeyN => b'n',
        KeyCode::KeyO => b'o',
        KeyCode::KeyP => b'p',
        KeyCode::KeyQ => b'q',
        KeyCode::KeyR => b'r',
        KeyCode::KeyS => b's',
        KeyCode::KeyT => b't',
        KeyCode::KeyU => b'u',
        KeyCode::KeyV => b'v',
        KeyCode::KeyW => b'w',
        KeyCode::KeyX => b'x',
        KeyCode::KeyY => b'y',
        KeyCode::KeyZ => b'z',
        KeyCode::Digit0 => b'0',
        KeyCode::Digit1 => b'1',
        KeyCode::Digit2 => b'2',
        KeyCode::Digit3 => b'3',
        KeyCode::Digit4 => b'4',
        KeyCode::Digit5 => b'5',
        KeyCode::Digit6 => b'6',
        KeyCode::Digit7 => b'7',
        KeyCode::Digit8 => b'8',
        KeyCode::Digit9 => b'9',
        KeyCode::Minus => b'-',
        KeyCode::Equal => b'=',
        KeyCode::BracketLeft => b'[',
        KeyCode::BracketRight => b']',
        KeyCode::Backslash => b'\\',
        KeyCode::Semicolon => b';',
        KeyCode::Quote => b'\'',
        KeyCode::Backquote => b'`',
        KeyCode::Comma => b',',
        KeyCode::Period => b'.',
        KeyCode::Slash => b'/',
        _ => return named_key_to_raw(key),
    };
    u32::from(ascii)
}

fn named_key_to_raw(key: KeyCode) -> u32 {
    match key {
        KeyCode::Enter | KeyCode::NumpadEnter => keysym::RETURN,
        KeyCode::Escape => keysym::ESCAPE,
        KeyCode::Backspace => keysym::BACKSPACE,
        KeyCode::Tab => keysym::TAB,
        KeyCode::Space => keysym::SPACE,
        KeyCode::Delete => keysym::DELETE,
        KeyCode::F1 => keysym::F1,
        KeyCode::F2 => keysym::F2,
        KeyCode::F3 => keysym::F3,
        KeyCode::F4 => keysym::F4,
        KeyCode::F5 => keysym::F5,
        KeyCode::F6 => keysym::F6,
        KeyCode::F7 => keysym::F7,
        KeyCode::F8 => keysym::F8,
        KeyCode::F9 => keysym::F9,
        KeyCode::F10 => keysym::F10,
        KeyCode::F11 => keysym::F11,
        KeyCode::F12 => keysym::F12,
        KeyCode::ArrowLeft => keysym::LEFT,
        KeyCode::ArrowRight => keysym::RIGHT,
        KeyCode::ArrowUp => keysym::UP,
        KeyCode::ArrowDown => keysym::DOWN,
        KeyCode::ControlLeft => keysym::LCTRL,
        KeyCode::ControlRight => keysym::RCTRL,
        KeyCode::ShiftLeft => keysym::LSHIFT,
        KeyCode::ShiftRight => keysym::RSHIFT,
        KeyCode::AltLeft => keysym::LALT,
        KeyCode::AltRight => keysym::RALT,
        _ => keysym::UNKNOWN,
    }
}

//! Raw platform codes to internal key codes

use crate::keycode::KeyCode;
use crate::raw::{PhysicalButton, RawInputSample, keysym, mouse};

/// Translate a raw keyboard code.
///
/// Movement keys are dual-bound: each arrow is also reachable through its
/// WASD letter. Anything without an explicit case is ASCII lowercase-folded
/// and truncated to 8 bits, so codes outside ASCII may land anywhere in the
/// key space (or on 0, which the dispatcher drops).
pub fn translate_key(code: u32) -> KeyCode {
    match code {
        keysym::RETURN => KeyCode::ENTER,
        keysym::F1 => KeyCode::F1,
        keysym::F2 => KeyCode::F2,
        keysym::F3 => KeyCode::F3,
        keysym::LALT | keysym::RALT => KeyCode::ALT,
        keysym::ESCAPE => KeyCode::ESCAPE,
        keysym::A | keysym::LEFT => KeyCode::LEFT_ARROW,
        keysym::D | keysym::RIGHT => KeyCode::RIGHT_ARROW,
        keysym::W | keysym::UP => KeyCode::UP_ARROW,
        keysym::S | keysym::DOWN => KeyCode::DOWN_ARROW,
        keysym::LCTRL | keysym::RCTRL => KeyCode::FIRE,
        keysym::SPACE => KeyCode::USE,
        keysym::LSHIFT | keysym::RSHIFT => KeyCode::SHIFT,
        other => fold(other),
    }
}

/// Translate a raw mouse button code.
pub fn translate_mouse_button(code: u32) -> KeyCode {
    match code {
        mouse::LEFT | mouse::RIGHT => KeyCode::FIRE,
        mouse::MIDDLE => KeyCode::USE,
        other => fold(other),
    }
}

/// Translate a controller button for the key path.
///
/// Returns [`KeyCode::NONE`] for buttons with no key binding; those edges are
/// not queued at all.
pub fn translate_controller_button(button: PhysicalButton) -> KeyCode {
    match button {
        PhysicalButton::A => KeyCode::ENTER,
        PhysicalButton::B => KeyCode::FIRE,
        PhysicalButton::X => KeyCode::SHIFT,
        PhysicalButton::Y => KeyCode::USE,
        PhysicalButton::Start => KeyCode::ESCAPE,
        PhysicalButton::Touchpad => KeyCode::F3,
        PhysicalButton::LeftShoulder => KeyCode::F1,
        PhysicalButton::RightShoulder => KeyCode::F2,
        PhysicalButton::DPadLeft => KeyCode::LEFT_ARROW,
        PhysicalButton::DPadRight => KeyCode::RIGHT_ARROW,
        PhysicalButton::DPadUp => KeyCode::UP_ARROW,
        PhysicalButton::DPadDown => KeyCode::DOWN_ARROW,
        _ => KeyCode::NONE,
    }
}

/// Translate a digital sample into a queued transition.
///
/// Keyboard and mouse edges always produce a transition (possibly with key
/// 0). Controller buttons without a binding and axis samples produce none.
pub fn translate_sample(sample: RawInputSample) -> Option<(bool, KeyCode)> {
    match sample {
        RawInputSample::Key { code, pressed } => Some((pressed, translate_key(code))),
        RawInputSample::MouseButton { code, pressed } => {
            Some((pressed, translate_mouse_button(code)))
        }
        RawInputSample::ControllerButton { button, pressed } => {
            let key = translate_controller_button(button);
            (!key.is_none()).then_some((pressed, key))
        }
        RawInputSample::ControllerAxis { .. } => None,
    }
}

fn fold(code: u32) -> KeyCode {
    let folded = match u8::try_from(code) {
        Ok(c) => u32::from(c.to_ascii_lowercase()),
        Err(_) => code,
    };
    KeyCode(folded as u8)
}

//! Gamepad discovery and state via gilrs

use gilrs::{Axis as PadAxis, Button, EventType, Gamepad, GamepadId, Gilrs, MappingSource};

use super::Controller;
use crate::error::InputError;
use crate::raw::{Axis, PhysicalButton};

/// The first usable gamepad, opened through gilrs.
///
/// Axis values are reported in the raw convention: sticks span the signed
/// 16-bit range with Y positive when pushed down, triggers span 0..=32767.
pub struct GilrsController {
    gilrs: Gilrs,
    id: GamepadId,
    name: String,
}

impl GilrsController {
    /// Initialize gilrs and open the first gamepad with a known mapping.
    ///
    /// Returns `Ok(None)` when no usable gamepad is attached. Pads without a
    /// mapping are logged and skipped.
    pub fn open_first() -> Result<Option<Self>, InputError> {
        let gilrs = Gilrs::new().map_err(|e| InputError::Gamepad(e.to_string()))?;

        let mut found = None;
        for (id, pad) in gilrs.gamepads() {
            if matches!(pad.mapping_source(), MappingSource::None) {
                tracing::warn!(
                    "Could not open gamepad {} ({}): no controller mapping",
                    id,
                    pad.name()
                );
                continue;
            }
            found = Some((id, pad.name().to_string()));
            break;
        }

        let Some((id, name)) = found else {
            tracing::info!("No gamepads found");
            return Ok(None);
        };

        tracing::info!("Found gamepad {}: {}", id, name);
        Ok(Some(Self { gilrs, id, name }))
    }

    fn pad(&self) -> Option<Gamepad<'_>> {
        self.gilrs.connected_gamepad(self.id)
    }
}

impl Controller for GilrsController {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_pressed(&self, button: PhysicalButton) -> bool {
        let Some(button) = to_gilrs_button(button) else {
            return false;
        };
        self.pad().is_some_and(|pad| pad.is_pressed(button))
    }

    fn axis_value(&self, axis: Axis) -> i16 {
        let Some(pad) = self.pad() else {
            return 0;
        };
        let trigger = |button: Button| pad.button_data(button).map_or(0.0, |data| data.value());

        let value = match axis {
            Axis::LeftX => pad.value(PadAxis::LeftStickX),
            Axis::LeftY => -pad.value(PadAxis::LeftStickY), // gilrs reports up as positive
            Axis::RightX => pad.value(PadAxis::RightStickX),
            Axis::RightY => -pad.value(PadAxis::RightStickY),
            Axis::TriggerLeft => trigger(Button::LeftTrigger2),
            Axis::TriggerRight => trigger(Button::RightTrigger2),
        };
        to_raw(value)
    }

    fn next_button_event(&mut self) -> Option<(PhysicalButton, bool)> {
        while let Some(event) = self.gilrs.next_event() {
            if event.id != self.id {
                continue;
            }
            match event.event {
                EventType::ButtonPressed(button, _) => {
                    if let Some(button) = from_gilrs_button(button) {
                        return Some((button, true));
                    }
                }
                EventType::ButtonReleased(button, _) => {
                    if let Some(button) = from_gilrs_button(button) {
                        return Some((button, false));
                    }
                }
                EventType::Disconnected => {
                    tracing::warn!("Gamepad {} disconnected", self.name);
                }
                EventType::Connected => {
                    tracing::info!("Gamepad {} reconnected", self.name);
                }
                _ => {}
            }
        }
        None
    }
}

fn to_raw(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}

// Face buttons follow Xbox naming: South=A, East=B, West=X, North=Y.
// gilrs calls the bumpers LeftTrigger/RightTrigger.
fn from_gilrs_button(button: Button) -> Option<PhysicalButton> {
    let button = match button {
        Button::South => PhysicalButton::A,
        Button::East => PhysicalButton::B,
        Button::West => PhysicalButton::X,
        Button::North => PhysicalButton::Y,
        Button::Select => PhysicalButton::Back,
        Button::Mode => PhysicalButton::Guide,
        Button::Start => PhysicalButton::Start,
        Button::LeftThumb => PhysicalButton::LeftStick,
        Button::RightThumb => PhysicalButton::RightStick,
        Button::LeftTrigger => PhysicalButton::LeftShoulder,
        Button::RightTrigger => PhysicalButton::RightShoulder,
        Button::DPadUp => PhysicalButton::DPadUp,
        Button::DPadDown => PhysicalButton::DPadDown,
        Button::DPadLeft => PhysicalButton::DPadLeft,
        Button::DPadRight => PhysicalButton::DPadRight,
        _ => return None,
    };
    Some(button)
}

fn to_gilrs_button(button: PhysicalButton) -> Option<Button> {
    let button = match button {
        PhysicalButton::A => Button::South,
        PhysicalButton::B => Button::East,
        PhysicalButton::X => Button::West,
        PhysicalButton::Y => Button::North,
        PhysicalButton::Back => Button::Select,
        PhysicalButton::Guide => Button::Mode,
        PhysicalButton::Start => Button::Start,
        PhysicalButton::LeftStick => Button::LeftThumb,
        PhysicalButton::RightStick => Button::RightThumb,
        PhysicalButton::LeftShoulder => Button::LeftTrigger,
        PhysicalButton::RightShoulder => Button::RightTrigger,
        PhysicalButton::DPadUp => Button::DPadUp,
        PhysicalButton::DPadDown => Button::DPadDown,
        PhysicalButton::DPadLeft => Button::DPadLeft,
        PhysicalButton::DPadRight => Button::DPadRight,
        PhysicalButton::Misc1
        | PhysicalButton::Paddle1
        | PhysicalButton::Paddle2
        | PhysicalButton::Paddle3
        | PhysicalButton::Paddle4
        | PhysicalButton::Touchpad => return None,
    };
    Some(button)
}

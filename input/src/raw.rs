//! Raw platform input samples
//!
//! Backends report input in a single platform code space: printable keys
//! carry their lowercase ASCII value, non-printable keys carry a scancode
//! tagged with bit 30. Mouse buttons and controller buttons/axes use the
//! numbering of the common game controller database layout.

use serde::{Deserialize, Serialize};

/// A single platform input occurrence before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInputSample {
    /// Keyboard key edge, `code` in the [`keysym`] space
    Key { code: u32, pressed: bool },
    /// Mouse button edge, `code` in the [`mouse`] space
    MouseButton { code: u32, pressed: bool },
    /// Controller button edge
    ControllerButton { button: PhysicalButton, pressed: bool },
    /// Controller analog reading
    ControllerAxis { axis: Axis, magnitude: i16 },
}

/// Raw keyboard codes.
pub mod keysym {
    const fn scancode(code: u32) -> u32 {
        code | (1 << 30)
    }

    pub const UNKNOWN: u32 = 0;
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const RETURN: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = b' ' as u32;
    pub const DELETE: u32 = 127;

    pub const A: u32 = b'a' as u32;
    pub const D: u32 = b'd' as u32;
    pub const S: u32 = b's' as u32;
    pub const W: u32 = b'w' as u32;

    pub const F1: u32 = scancode(58);
    pub const F2: u32 = scancode(59);
    pub const F3: u32 = scancode(60);
    pub const F4: u32 = scancode(61);
    pub const F5: u32 = scancode(62);
    pub const F6: u32 = scancode(63);
    pub const F7: u32 = scancode(64);
    pub const F8: u32 = scancode(65);
    pub const F9: u32 = scancode(66);
    pub const F10: u32 = scancode(67);
    pub const F11: u32 = scancode(68);
    pub const F12: u32 = scancode(69);

    pub const RIGHT: u32 = scancode(79);
    pub const LEFT: u32 = scancode(80);
    pub const DOWN: u32 = scancode(81);
    pub const UP: u32 = scancode(82);

    pub const LCTRL: u32 = scancode(224);
    pub const LSHIFT: u32 = scancode(225);
    pub const LALT: u32 = scancode(226);
    pub const RCTRL: u32 = scancode(228);
    pub const RSHIFT: u32 = scancode(229);
    pub const RALT: u32 = scancode(230);
}

/// Raw mouse button codes.
pub mod mouse {
    pub const LEFT: u32 = 1;
    pub const MIDDLE: u32 = 2;
    pub const RIGHT: u32 = 3;
    pub const X1: u32 = 4;
    pub const X2: u32 = 5;
}

/// Physical controller buttons.
///
/// Serialized as the numeric button id so config files stay compatible with
/// the controller database numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PhysicalButton {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    Back = 4,
    Guide = 5,
    Start = 6,
    LeftStick = 7,
    RightStick = 8,
    LeftShoulder = 9,
    RightShoulder = 10,
    DPadUp = 11,
    DPadDown = 12,
    DPadLeft = 13,
    DPadRight = 14,
    Misc1 = 15,
    Paddle1 = 16,
    Paddle2 = 17,
    Paddle3 = 18,
    Paddle4 = 19,
    Touchpad = 20,
}

impl PhysicalButton {
    pub const ALL: [PhysicalButton; 21] = [
        Self::A,
        Self::B,
        Self::X,
        Self::Y,
        Self::Back,
        Self::Guide,
        Self::Start,
        Self::LeftStick,
        Self::RightStick,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::DPadUp,
        Self::DPadDown,
        Self::DPadLeft,
        Self::DPadRight,
        Self::Misc1,
        Self::Paddle1,
        Self::Paddle2,
        Self::Paddle3,
        Self::Paddle4,
        Self::Touchpad,
    ];

    /// Look up a button by its numeric id.
    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn id(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for PhysicalButton {
    type Error = String;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| format!("unknown controller button id {id}"))
    }
}

impl From<PhysicalButton> for i32 {
    fn from(button: PhysicalButton) -> Self {
        button.id()
    }
}

/// Controller analog axes.
///
/// Raw readings are signed 16-bit; stick Y axes are positive when pushed
/// down, triggers range 0..=32767.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftX = 0,
    LeftY = 1,
    RightX = 2,
    RightY = 3,
    TriggerLeft = 4,
    TriggerRight = 5,
}

impl Axis {
    /// Id used in config files to mean "axis disabled".
    pub const DISABLED: i32 = -1;

    /// Resolve a configured axis id. Negative or unknown ids are disabled.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::LeftX),
            1 => Some(Self::LeftY),
            2 => Some(Self::RightX),
            3 => Some(Self::RightY),
            4 => Some(Self::TriggerLeft),
            5 => Some(Self::TriggerRight),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_button_ids_roundtrip() {
        for button in PhysicalButton::ALL {
            assert_eq!(PhysicalButton::from_id(button.id()), Some(button));
        }
        assert_eq!(PhysicalButton::from_id(-1), None);
        assert_eq!(PhysicalButton::from_id(21), None);
    }

    #[test]
    fn test_axis_disabled_sentinel() {
        assert_eq!(Axis::from_id(Axis::DISABLED), None);
        assert_eq!(Axis::from_id(-7), None);
        assert_eq!(Axis::from_id(2), Some(Axis::RightX));
    }

    #[test]
    fn test_scancode_keys_sit_outside_ascii() {
        for code in [keysym::F1, keysym::LEFT, keysym::LSHIFT, keysym::RALT] {
            assert!(code > 0xff);
        }
    }
}

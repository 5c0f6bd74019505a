//! Internal engine key codes
//!
//! The engine works in a closed 8-bit key space: codes 0-127 are the ASCII
//! characters a keyboard can produce, the named constants above 127 are
//! movement/action keys that have no printable form.

use std::fmt;

/// An internal 8-bit key code.
///
/// `KeyCode::NONE` (0) means "no key / unmapped" and is never forwarded to
/// event consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const NONE: KeyCode = KeyCode(0);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);

    pub const FIRE: KeyCode = KeyCode(0xa3);
    pub const USE: KeyCode = KeyCode(0xa2);

    pub const LEFT_ARROW: KeyCode = KeyCode(0xac);
    pub const UP_ARROW: KeyCode = KeyCode(0xad);
    pub const RIGHT_ARROW: KeyCode = KeyCode(0xae);
    pub const DOWN_ARROW: KeyCode = KeyCode(0xaf);

    /// Both physical shift keys collapse to this code
    pub const SHIFT: KeyCode = KeyCode(0x80 + 0x36);
    /// Both physical alt keys collapse to this code
    pub const ALT: KeyCode = KeyCode(0x80 + 0x38);

    pub const F1: KeyCode = KeyCode(0x80 + 0x3b);
    pub const F2: KeyCode = KeyCode(0x80 + 0x3c);
    pub const F3: KeyCode = KeyCode(0x80 + 0x3d);

    /// Returns true for the reserved "no key" code.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns true if this code lies in the ASCII range.
    pub fn is_ascii(self) -> bool {
        self.0 < 0x80
    }
}

impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        KeyCode(value)
    }
}

impl From<KeyCode> for u8 {
    fn from(key: KeyCode) -> Self {
        key.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NONE => "None",
            Self::ENTER => "Enter",
            Self::ESCAPE => "Escape",
            Self::FIRE => "Fire",
            Self::USE => "Use",
            Self::LEFT_ARROW => "LeftArrow",
            Self::UP_ARROW => "UpArrow",
            Self::RIGHT_ARROW => "RightArrow",
            Self::DOWN_ARROW => "DownArrow",
            Self::SHIFT => "Shift",
            Self::ALT => "Alt",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            KeyCode(c) if c.is_ascii_graphic() => return write!(f, "'{}'", c as char),
            KeyCode(c) => return write!(f, "0x{c:02x}"),
        };
        f.write_str(name)
    }
}

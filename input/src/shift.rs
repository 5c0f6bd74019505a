//! Shift tracking and typed-character translation

use crate::keycode::KeyCode;

/// US-layout shift transform for the ASCII range.
///
/// Control characters pass through, letters upper-case, and the punctuation
/// row maps to its shifted glyph. Two entries are not the US glyphs:
/// shift-backslash gives `!` and shift-backquote gives `'`.
pub const SHIFT_XFORM: [u8; 128] = build_shift_xform();

const fn build_shift_xform() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = i as u8;
        i += 1;
    }

    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = c.to_ascii_uppercase();
        c += 1;
    }

    let punctuation: [(u8, u8); 20] = [
        (b'\'', b'"'),
        (b',', b'<'),
        (b'-', b'_'),
        (b'.', b'>'),
        (b'/', b'?'),
        (b'0', b')'),
        (b'1', b'!'),
        (b'2', b'@'),
        (b'3', b'#'),
        (b'4', b'$'),
        (b'5', b'%'),
        (b'6', b'^'),
        (b'7', b'&'),
        (b'8', b'*'),
        (b'9', b'('),
        (b';', b':'),
        (b'=', b'+'),
        (b'\\', b'!'),
        (b'^', b'"'),
        (b'`', b'\''),
    ];
    let mut p = 0;
    while p < punctuation.len() {
        let (from, to) = punctuation[p];
        table[from as usize] = to;
        p += 1;
    }

    table
}

/// Counts held shift keys.
///
/// A counter rather than a flag: with two physical shifts held, releasing
/// one keeps shifting active. Unpaired releases can drive it negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftState {
    count: i32,
}

impl ShiftState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a key transition. Only [`KeyCode::SHIFT`] affects the count.
    pub fn on_key_transition(&mut self, pressed: bool, key: KeyCode) {
        if key == KeyCode::SHIFT {
            self.count += if pressed { 1 } else { -1 };
        }
    }

    pub fn is_shifted(&self) -> bool {
        self.count > 0
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// The character typed by `key` under the current shift state.
    ///
    /// Unshifted keys type themselves. Shifted keys outside the ASCII table
    /// type nothing (0).
    pub fn typed_char(&self, key: KeyCode) -> u8 {
        if !self.is_shifted() {
            return key.0;
        }
        SHIFT_XFORM.get(usize::from(key.0)).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unshifted_passthrough() {
        let shift = ShiftState::new();
        assert_eq!(shift.typed_char(KeyCode(b'a')), b'a');
        assert_eq!(shift.typed_char(KeyCode::FIRE), KeyCode::FIRE.0);
    }

    #[test]
    fn test_balanced_pairs_toggle() {
        let mut shift = ShiftState::new();
        // press, press, release, release, press, release
        let seq = [true, true, false, false, true, false];
        let mut running = 0;
        for pressed in seq {
            shift.on_key_transition(pressed, KeyCode::SHIFT);
            running += if pressed { 1 } else { -1 };
            let expected = if running > 0 { b'A' } else { b'a' };
            assert_eq!(shift.typed_char(KeyCode(b'a')), expected);
        }
        assert_eq!(shift.count(), 0);
    }

    #[test]
    fn test_other_keys_leave_count() {
        let mut shift = ShiftState::new();
        shift.on_key_transition(true, KeyCode(b'q'));
        shift.on_key_transition(true, KeyCode::FIRE);
        assert_eq!(shift.count(), 0);
    }

    #[test]
    fn test_unpaired_release_goes_negative() {
        let mut shift = ShiftState::new();
        shift.on_key_transition(false, KeyCode::SHIFT);
        assert_eq!(shift.count(), -1);
        shift.on_key_transition(true, KeyCode::SHIFT);
        assert!(!shift.is_shifted());
        assert_eq!(shift.typed_char(KeyCode(b'z')), b'z');
    }

    #[test]
    fn test_shifted_out_of_range_is_zero() {
        let mut shift = ShiftState::new();
        shift.on_key_transition(true, KeyCode::SHIFT);
        assert_eq!(shift.typed_char(KeyCode::UP_ARROW), 0);
        assert_eq!(shift.typed_char(KeyCode(0x80)), 0);
        assert_eq!(shift.typed_char(KeyCode(0xff)), 0);
        assert_eq!(shift.typed_char(KeyCode(0x7f)), 0x7f);
    }

    #[test]
    fn test_shift_table() {
        for c in 0u8..32 {
            assert_eq!(SHIFT_XFORM[usize::from(c)], c);
        }
        for c in b'a'..=b'z' {
            assert_eq!(SHIFT_XFORM[usize::from(c)], c.to_ascii_uppercase());
        }
        for c in b'A'..=b'Z' {
            assert_eq!(SHIFT_XFORM[usize::from(c)], c);
        }
        assert_eq!(&SHIFT_XFORM[usize::from(b'0')..=usize::from(b'9')], b")!@#$%^&*(");
        assert_eq!(SHIFT_XFORM[usize::from(b' ')], b' ');
        assert_eq!(SHIFT_XFORM[usize::from(b'-')], b'_');
        assert_eq!(SHIFT_XFORM[usize::from(b'=')], b'+');
        assert_eq!(SHIFT_XFORM[usize::from(b';')], b':');
        assert_eq!(SHIFT_XFORM[usize::from(b'\'')], b'"');
        assert_eq!(SHIFT_XFORM[usize::from(b'/')], b'?');
        assert_eq!(SHIFT_XFORM[usize::from(b'[')], b'[');
        assert_eq!(SHIFT_XFORM[usize::from(b'\\')], b'!');
        assert_eq!(SHIFT_XFORM[usize::from(b'`')], b'\'');
        assert_eq!(SHIFT_XFORM[usize::from(b'{')], b'{');
        assert_eq!(SHIFT_XFORM[127], 127);
    }

    #[test]
    fn test_shift_table_entries_are_printable_or_control() {
        for (i, &c) in SHIFT_XFORM.iter().enumerate() {
            if i < 32 || i == 127 {
                assert_eq!(usize::from(c), i);
            } else {
                assert!(c.is_ascii_graphic() || c == b' ', "entry {i} -> {c}");
            }
        }
    }
}

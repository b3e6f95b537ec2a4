//! Logical keys produced by the terminal keyboard

/// Escape byte, the first byte of every control sequence
pub const ESC: u8 = 0x1B;

// Single-byte wire values
const KEY_TAB: u8 = b'\t';
const KEY_ENTER: u8 = b'\r';
const KEY_BACKSPACE: u8 = 0x7F;
const KEY_CTRL_H: u8 = 0x08;

/// A decoded key press
///
/// "No key available" is never a `Key`; decoders and pollers return
/// `Option<Key>` and use `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Cursor left (`ESC [ D`)
    Left,
    /// Cursor right (`ESC [ C`)
    Right,
    /// Cursor up (`ESC [ A`)
    Up,
    /// Cursor down (`ESC [ B`)
    Down,
    /// Rubout (`0x7F`, or `0x08` from terminals configured for ^H)
    Backspace,
    /// Delete character under the cursor (`ESC [ 3 ~`)
    Delete,
    /// Insert (`ESC [ 2 ~`)
    Insert,
    /// Home (`ESC [ 1 ~` or `ESC [ H`)
    Home,
    /// End (`ESC [ 4 ~` or `ESC [ F`)
    End,
    /// Page up (`ESC [ 5 ~`)
    PageUp,
    /// Page down (`ESC [ 6 ~`)
    PageDown,
    /// Horizontal tab (`\t`)
    Tab,
    /// Back tab (`ESC [ Z`)
    ShiftTab,
    /// A lone escape byte
    Escape,
    /// Carriage return (`\r`)
    Enter,
    /// A printable ASCII byte (`0x20..=0x7E`)
    Printable(u8),
}

impl Key {
    /// Decode a byte that is a complete key on its own
    ///
    /// Returns `None` for ESC (which may start a sequence) and for bytes
    /// that carry no key meaning.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_TAB => Some(Key::Tab),
            KEY_ENTER => Some(Key::Enter),
            KEY_BACKSPACE | KEY_CTRL_H => Some(Key::Backspace),
            0x20..=0x7E => Some(Key::Printable(byte)),
            _ => None,
        }
    }

    /// Map the final byte of a parameterless CSI or SS3 sequence
    pub(crate) fn from_cursor_final(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => None,
        }
    }

    /// Map the numeric parameter of a `ESC [ n ~` editing key
    pub(crate) fn from_tilde_param(param: &[u8]) -> Option<Self> {
        match param {
            b"1" | b"7" => Some(Key::Home),
            b"2" => Some(Key::Insert),
            b"3" => Some(Key::Delete),
            b"4" | b"8" => Some(Key::End),
            b"5" => Some(Key::PageUp),
            b"6" => Some(Key::PageDown),
            _ => None,
        }
    }

    /// Returns true if the key moves focus or ends a form
    pub fn is_navigation(&self) -> bool {
        matches!(self, Key::Tab | Key::ShiftTab | Key::Escape | Key::Enter)
    }

    /// Returns the byte of a printable key
    pub fn printable(&self) -> Option<u8> {
        match self {
            Key::Printable(byte) => Some(*byte),
            _ => None,
        }
    }
}

//! Escape sequences sent to the terminal
//!
//! Every renderer operation maps onto exactly one of these. The
//! [`core::fmt::Display`] implementation writes the wire bytes, so a
//! sequence can go straight into any `fmt::Write` sink, or be encoded into
//! a fixed buffer with [`Sequence::encode`].

use core::fmt::{self, Write};

use heapless::{String, Vec};

/// Longest encoded sequence (`ESC [ 65535 ; 65535 H` is 14 bytes)
pub const MAX_SEQUENCE_LEN: usize = 16;

/// Character attributes (SGR)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    Bold,
    Dim,
    Underline,
    Blink,
    Reverse,
}

impl Attribute {
    /// SGR parameter that turns the attribute on
    pub fn on_code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
        }
    }

    /// SGR parameter that turns only this attribute off
    ///
    /// Bold and dim share "normal intensity".
    pub fn off_code(self) -> u8 {
        match self {
            Attribute::Bold | Attribute::Dim => 22,
            Attribute::Underline => 24,
            Attribute::Blink => 25,
            Attribute::Reverse => 27,
        }
    }
}

/// An escape sequence understood by VT100-class terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sequence {
    /// Absolute cursor position, 1-indexed
    MoveTo { row: u16, col: u16 },
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    SaveCursor,
    RestoreCursor,
    ClearScreen,
    Home,
    AttributeOn(Attribute),
    AttributeOff(Attribute),
    /// Master reset of all attributes
    AttributesOff,
    /// Raw SGR color code (30-37/39 foreground, 40-47/49 background)
    Color(u8),
    /// Select the DEC special graphics set for line drawing
    AltCharsetOn,
    /// Back to US ASCII
    AltCharsetOff,
    /// Move down one line, scrolling at the bottom margin
    Index,
    /// Move up one line, scrolling at the top margin
    ReverseIndex,
    NextLine,
    SaveScreen,
    RestoreScreen,
    Columns132,
    Columns80,
    CursorVisible(bool),
    KeyboardLocked(bool),
    LocalEcho(bool),
    ReverseScreen(bool),
    SmoothScroll(bool),
    Autowrap(bool),
    DoubleHeightTop,
    DoubleHeightBottom,
    SingleWidthLine,
    DoubleWidthLine,
    EraseToLineEnd,
    EraseToLineStart,
    EraseLine,
    EraseBelow,
    EraseAbove,
    /// Set the scrolling region to rows `top..=bottom`
    ScrollRegion { top: u16, bottom: u16 },
}

/// `h` to set a mode, `l` to reset it
fn mode_suffix(set: bool) -> char {
    if set {
        'h'
    } else {
        'l'
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Sequence::MoveTo { row, col } => write!(f, "\x1b[{row};{col}H"),
            Sequence::CursorUp(n) => write!(f, "\x1b[{n}A"),
            Sequence::CursorDown(n) => write!(f, "\x1b[{n}B"),
            Sequence::CursorForward(n) => write!(f, "\x1b[{n}C"),
            Sequence::CursorBack(n) => write!(f, "\x1b[{n}D"),
            Sequence::SaveCursor => f.write_str("\x1b7"),
            Sequence::RestoreCursor => f.write_str("\x1b8"),
            Sequence::ClearScreen => f.write_str("\x1b[2J"),
            Sequence::Home => f.write_str("\x1b[H"),
            Sequence::AttributeOn(attr) => write!(f, "\x1b[{}m", attr.on_code()),
            Sequence::AttributeOff(attr) => write!(f, "\x1b[{}m", attr.off_code()),
            Sequence::AttributesOff => f.write_str("\x1b[m"),
            Sequence::Color(code) => write!(f, "\x1b[{code}m"),
            Sequence::AltCharsetOn => f.write_str("\x1b(0"),
            Sequence::AltCharsetOff => f.write_str("\x1b(B"),
            Sequence::Index => f.write_str("\x1bD"),
            Sequence::ReverseIndex => f.write_str("\x1bM"),
            Sequence::NextLine => f.write_str("\x1bE"),
            Sequence::SaveScreen => f.write_str("\x1b[?47h"),
            Sequence::RestoreScreen => f.write_str("\x1b[?47l"),
            Sequence::Columns132 => f.write_str("\x1b[?3h"),
            Sequence::Columns80 => f.write_str("\x1b[?3l"),
            Sequence::CursorVisible(on) => write!(f, "\x1b[?25{}", mode_suffix(on)),
            Sequence::KeyboardLocked(on) => write!(f, "\x1b[2{}", mode_suffix(on)),
            Sequence::LocalEcho(on) => write!(f, "\x1b[12{}", mode_suffix(on)),
            Sequence::ReverseScreen(on) => write!(f, "\x1b[?5{}", mode_suffix(on)),
            Sequence::SmoothScroll(on) => write!(f, "\x1b[?4{}", mode_suffix(on)),
            Sequence::Autowrap(on) => write!(f, "\x1b[?7{}", mode_suffix(on)),
            Sequence::DoubleHeightTop => f.write_str("\x1b#3"),
            Sequence::DoubleHeightBottom => f.write_str("\x1b#4"),
            Sequence::SingleWidthLine => f.write_str("\x1b#5"),
            Sequence::DoubleWidthLine => f.write_str("\x1b#6"),
            Sequence::EraseToLineEnd => f.write_str("\x1b[K"),
            Sequence::EraseToLineStart => f.write_str("\x1b[1K"),
            Sequence::EraseLine => f.write_str("\x1b[2K"),
            Sequence::EraseBelow => f.write_str("\x1b[J"),
            Sequence::EraseAbove => f.write_str("\x1b[1J"),
            Sequence::ScrollRegion { top, bottom } => write!(f, "\x1b[{top};{bottom}r"),
        }
    }
}

impl Sequence {
    /// Encode this sequence into its wire bytes
    pub fn encode(&self) -> Vec<u8, MAX_SEQUENCE_LEN> {
        let mut buf: String<MAX_SEQUENCE_LEN> = String::new();
        // Cannot overflow: the longest variant is sized into MAX_SEQUENCE_LEN.
        let _ = write!(buf, "{self}");
        buf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(seq: Sequence) -> Vec<u8, MAX_SEQUENCE_LEN> {
        seq.encode()
    }

    #[test]
    fn test_move_to() {
        let seq = bytes(Sequence::MoveTo { row: 5, col: 18 });
        assert_eq!(seq.as_slice(), b"\x1b[5;18H");
    }

    #[test]
    fn test_move_to_largest_fits() {
        let seq = bytes(Sequence::MoveTo {
            row: u16::MAX,
            col: u16::MAX,
        });
        assert_eq!(seq.as_slice(), b"\x1b[65535;65535H");
    }

    #[test]
    fn test_screen_control() {
        assert_eq!(bytes(Sequence::ClearScreen).as_slice(), b"\x1b[2J");
        assert_eq!(bytes(Sequence::Home).as_slice(), b"\x1b[H");
        assert_eq!(bytes(Sequence::SaveCursor).as_slice(), b"\x1b7");
        assert_eq!(bytes(Sequence::RestoreCursor).as_slice(), b"\x1b8");
    }

    #[test]
    fn test_relative_moves() {
        assert_eq!(bytes(Sequence::CursorUp(1)).as_slice(), b"\x1b[1A");
        assert_eq!(bytes(Sequence::CursorDown(2)).as_slice(), b"\x1b[2B");
        assert_eq!(bytes(Sequence::CursorForward(10)).as_slice(), b"\x1b[10C");
        assert_eq!(bytes(Sequence::CursorBack(3)).as_slice(), b"\x1b[3D");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(bytes(Sequence::AttributeOn(Attribute::Bold)).as_slice(), b"\x1b[1m");
        assert_eq!(bytes(Sequence::AttributeOn(Attribute::Dim)).as_slice(), b"\x1b[2m");
        assert_eq!(
            bytes(Sequence::AttributeOn(Attribute::Underline)).as_slice(),
            b"\x1b[4m"
        );
        assert_eq!(bytes(Sequence::AttributeOn(Attribute::Blink)).as_slice(), b"\x1b[5m");
        assert_eq!(
            bytes(Sequence::AttributeOn(Attribute::Reverse)).as_slice(),
            b"\x1b[7m"
        );
        assert_eq!(
            bytes(Sequence::AttributeOff(Attribute::Underline)).as_slice(),
            b"\x1b[24m"
        );
        assert_eq!(bytes(Sequence::AttributesOff).as_slice(), b"\x1b[m");
    }

    #[test]
    fn test_alt_charset() {
        assert_eq!(bytes(Sequence::AltCharsetOn).as_slice(), b"\x1b(0");
        assert_eq!(bytes(Sequence::AltCharsetOff).as_slice(), b"\x1b(B");
    }

    #[test]
    fn test_modes() {
        assert_eq!(bytes(Sequence::CursorVisible(false)).as_slice(), b"\x1b[?25l");
        assert_eq!(bytes(Sequence::Columns80).as_slice(), b"\x1b[?3l");
        assert_eq!(bytes(Sequence::Autowrap(true)).as_slice(), b"\x1b[?7h");
        assert_eq!(
            bytes(Sequence::ScrollRegion { top: 2, bottom: 23 }).as_slice(),
            b"\x1b[2;23r"
        );
    }
}

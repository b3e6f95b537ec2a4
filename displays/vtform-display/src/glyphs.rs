//! DEC special graphics glyphs
//!
//! With the alternate character set selected, these ASCII bytes render as
//! line-drawing characters.

/// `┌`
pub const CORNER_TOP_LEFT: u8 = b'l';
/// `┐`
pub const CORNER_TOP_RIGHT: u8 = b'k';
/// `└`
pub const CORNER_BOTTOM_LEFT: u8 = b'm';
/// `┘`
pub const CORNER_BOTTOM_RIGHT: u8 = b'j';
/// `─`
pub const HORIZONTAL: u8 = b'q';
/// `│`
pub const VERTICAL: u8 = b'x';
/// `┤`, closes a line on its left side
pub const TEE_RIGHT: u8 = b'u';
/// `├`, opens a line to its right side
pub const TEE_LEFT: u8 = b't';
/// `◆`
pub const DIAMOND: u8 = b'`';

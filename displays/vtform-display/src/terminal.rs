//! Escape sequence emitter
//!
//! [`Terminal`] owns the output half of the serial link and turns each
//! operation into one fixed VT100 sequence. It keeps no screen model: the
//! remote terminal is the only copy of what is displayed.

use vtform_hal::SerialTx;
use vtform_protocol::{Attribute, Sequence};

/// Screen coordinates, 1-indexed as the terminal counts them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    /// Create a position from a row and column
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Top-left corner of the screen
    pub const fn home() -> Self {
        Self { row: 1, col: 1 }
    }

    /// The position `cols` cells to the right on the same row
    pub const fn offset_col(self, cols: u16) -> Self {
        Self {
            row: self.row,
            col: self.col.saturating_add(cols),
        }
    }

    /// The position `rows` lines further down in the same column
    pub const fn offset_row(self, rows: u16) -> Self {
        Self {
            row: self.row.saturating_add(rows),
            col: self.col,
        }
    }
}

/// VT100 renderer over a serial sink
pub struct Terminal<T> {
    tx: T,
    dropped_writes: u32,
}

impl<T> Terminal<T> {
    /// Create a renderer writing to `tx`
    pub const fn new(tx: T) -> Self {
        Self {
            tx,
            dropped_writes: 0,
        }
    }

    /// Borrow the underlying sink
    pub fn tx(&self) -> &T {
        &self.tx
    }

    /// Mutably borrow the underlying sink
    pub fn tx_mut(&mut self) -> &mut T {
        &mut self.tx
    }

    /// Release the underlying sink
    pub fn into_inner(self) -> T {
        self.tx
    }

    /// Number of writes the sink refused since creation
    pub fn dropped_writes(&self) -> u32 {
        self.dropped_writes
    }
}

impl<T: SerialTx> Terminal<T> {
    /// Write raw bytes
    pub fn out(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        if self.tx.write_blocking(data).is_err() {
            self.dropped_writes = self.dropped_writes.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("terminal write dropped ({} so far)", self.dropped_writes);
        }
    }

    /// Write raw text
    pub fn out_str(&mut self, text: &str) {
        self.out(text.as_bytes());
    }

    /// Emit one escape sequence
    pub fn send(&mut self, seq: Sequence) {
        let bytes = seq.encode();
        self.out(&bytes);
    }

    /// Flush the sink
    pub fn flush(&mut self) {
        if self.tx.flush().is_err() {
            self.dropped_writes = self.dropped_writes.saturating_add(1);
        }
    }

    // Cursor

    /// Absolute cursor move
    pub fn move_to(&mut self, at: Position) {
        self.send(Sequence::MoveTo {
            row: at.row,
            col: at.col,
        });
    }

    pub fn cursor_up(&mut self, n: u16) {
        self.send(Sequence::CursorUp(n));
    }

    pub fn cursor_down(&mut self, n: u16) {
        self.send(Sequence::CursorDown(n));
    }

    pub fn cursor_forward(&mut self, n: u16) {
        self.send(Sequence::CursorForward(n));
    }

    pub fn cursor_back(&mut self, n: u16) {
        self.send(Sequence::CursorBack(n));
    }

    pub fn save_cursor(&mut self) {
        self.send(Sequence::SaveCursor);
    }

    pub fn restore_cursor(&mut self) {
        self.send(Sequence::RestoreCursor);
    }

    pub fn cursor_visible(&mut self, visible: bool) {
        self.send(Sequence::CursorVisible(visible));
    }

    // Screen

    /// Erase the whole screen (the cursor does not move)
    pub fn clear_screen(&mut self) {
        self.send(Sequence::ClearScreen);
    }

    /// Cursor to the top-left corner
    pub fn home(&mut self) {
        self.send(Sequence::Home);
    }

    // Attributes

    pub fn attr_on(&mut self, attr: Attribute) {
        self.send(Sequence::AttributeOn(attr));
    }

    pub fn attr_off(&mut self, attr: Attribute) {
        self.send(Sequence::AttributeOff(attr));
    }

    /// Reset every attribute
    pub fn attrs_off(&mut self) {
        self.send(Sequence::AttributesOff);
    }

    /// Raw SGR color code, e.g. 31 for red foreground
    pub fn color(&mut self, code: u8) {
        self.send(Sequence::Color(code));
    }

    // Character sets

    pub fn alt_charset_on(&mut self) {
        self.send(Sequence::AltCharsetOn);
    }

    pub fn alt_charset_off(&mut self) {
        self.send(Sequence::AltCharsetOff);
    }

    // Text

    /// Write text, optionally positioned and optionally with one attribute
    ///
    /// With an attribute the text is bracketed by attribute-on and a full
    /// attribute reset.
    pub fn write_at(&mut self, at: Option<Position>, text: &str, attr: Option<Attribute>) {
        if let Some(at) = at {
            self.move_to(at);
        }
        if let Some(attr) = attr {
            self.attr_on(attr);
        }
        self.out_str(text);
        if attr.is_some() {
            self.attrs_off();
        }
    }

    /// Write text at a position with the current attributes
    pub fn text_at(&mut self, at: Position, text: &str) {
        self.write_at(Some(at), text, None);
    }

    /// Show a one-line message at the top-left corner without losing the
    /// cursor
    pub fn status(&mut self, text: &str) {
        self.save_cursor();
        self.home();
        self.out_str(text);
        // Covers the tail of a longer previous message.
        self.out_str("     ");
        self.restore_cursor();
    }
}

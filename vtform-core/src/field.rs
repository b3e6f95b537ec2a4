//! Editable fields
//!
//! An [`EditableField`] is a fixed-size underlined region of the screen
//! holding either free text or a single on/off flag. Every change to what
//! the field shows is pushed to the terminal straight away; the field keeps
//! no record of what is currently on screen.
//!
//! # Text fields
//!
//! ```text
//! origin
//!   v
//!   HELLO_____
//!        ^ cursor_position = 5
//!   |<------>| max_length = 10
//! ```
//!
//! Left and Right move the cursor within the content, Backspace and Delete
//! remove around it, and printable keys accepted by the field's
//! [`TextPolicy`] are inserted at it.
//!
//! # Boolean fields
//!
//! One cell wide. Space toggles, `X x Y y 1` set, `0 n N` clear.

use heapless::Vec;
use vtform_display::{Attribute, Position, Terminal};
use vtform_hal::SerialTx;
use vtform_protocol::Key;

use crate::policy::TextPolicy;

/// Widest field, one full 132-column line
pub const MAX_FIELD_LEN: usize = 132;

/// Shown by a boolean field that is set
pub const SET_GLYPH: u8 = b'X';

/// Shown by a boolean field that is clear
pub const CLEAR_GLYPH: u8 = b' ';

/// Field construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// `max_length` was zero
    ZeroCapacity,
    /// `max_length` exceeded [`MAX_FIELD_LEN`]
    CapacityTooLarge,
}

/// What a field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldMode {
    Text(TextPolicy),
    Boolean { state: bool },
}

/// A single input field on the terminal
#[derive(Debug, Clone)]
pub struct EditableField {
    origin: Position,
    max_length: usize,
    /// Printable ASCII only
    content: Vec<u8, MAX_FIELD_LEN>,
    cursor: usize,
    mode: FieldMode,
}

impl EditableField {
    /// Create an empty text field
    pub fn text(origin: Position, max_length: usize, policy: TextPolicy) -> Result<Self, FieldError> {
        if max_length == 0 {
            return Err(FieldError::ZeroCapacity);
        }
        if max_length > MAX_FIELD_LEN {
            return Err(FieldError::CapacityTooLarge);
        }
        Ok(Self {
            origin,
            max_length,
            content: Vec::new(),
            cursor: 0,
            mode: FieldMode::Text(policy),
        })
    }

    /// Create a one-cell boolean field
    pub fn boolean(origin: Position, state: bool) -> Self {
        let mut field = Self {
            origin,
            max_length: 1,
            content: Vec::new(),
            cursor: 0,
            mode: FieldMode::Boolean { state },
        };
        field.set_state(state);
        field
    }

    // Accessors

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn mode(&self) -> FieldMode {
        self.mode
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self.mode, FieldMode::Boolean { .. })
    }

    /// Current content
    ///
    /// For a boolean field this is the glyph it displays.
    pub fn content(&self) -> &str {
        core::str::from_utf8(&self.content).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Move the edit cursor, clamped to the content
    ///
    /// Boolean fields keep their cursor on the single cell.
    pub fn set_cursor_position(&mut self, position: usize) {
        if !self.is_boolean() {
            self.cursor = position.min(self.content.len());
        }
    }

    /// Boolean state, or `None` for a text field
    pub fn state(&self) -> Option<bool> {
        match self.mode {
            FieldMode::Boolean { state } => Some(state),
            FieldMode::Text(_) => None,
        }
    }

    /// Set a boolean field; ignored by text fields
    pub fn set_state(&mut self, state: bool) {
        if let FieldMode::Boolean { .. } = self.mode {
            self.mode = FieldMode::Boolean { state };
            self.content.clear();
            // Capacity is MAX_FIELD_LEN, one byte always fits
            let _ = self.content.push(if state { SET_GLYPH } else { CLEAR_GLYPH });
            self.cursor = 0;
        }
    }

    /// Flip a boolean field; ignored by text fields
    pub fn toggle(&mut self) {
        if let Some(state) = self.state() {
            self.set_state(!state);
        }
    }

    /// Replace the content of a text field
    ///
    /// Non-printable characters are dropped, the rest is cut to
    /// `max_length`, and case folding applies as if typed. The cursor ends
    /// up after the last character. Nothing is drawn.
    pub fn set_content(&mut self, text: &str) {
        let FieldMode::Text(policy) = self.mode else {
            return;
        };
        self.content.clear();
        for b in text.bytes().filter(|b| (0x20..=0x7E).contains(b)).take(self.max_length) {
            let _ = self.content.push(b);
        }
        if policy.folds_case() {
            self.content.make_ascii_uppercase();
        }
        self.cursor = self.content.len();
    }

    /// Empty a text field, or clear a boolean one
    pub fn clear(&mut self) {
        match self.mode {
            FieldMode::Text(_) => {
                self.content.clear();
                self.cursor = 0;
            }
            FieldMode::Boolean { .. } => self.set_state(false),
        }
    }

    // Policy

    pub fn set_allow_lowercase(&mut self, allow: bool) {
        self.update_policy(|p| p.allow_lowercase = allow);
    }

    pub fn set_allow_spaces(&mut self, allow: bool) {
        self.update_policy(|p| p.allow_spaces = allow);
    }

    pub fn set_url_mode(&mut self, enabled: bool) {
        self.update_policy(|p| p.url_mode = enabled);
    }

    fn update_policy(&mut self, f: impl FnOnce(&mut TextPolicy)) {
        if let FieldMode::Text(ref mut policy) = self.mode {
            f(policy);
            if policy.folds_case() {
                self.content.make_ascii_uppercase();
            }
        }
    }

    // Drawing

    /// Redraw the field and place the terminal cursor in it
    ///
    /// Text fields put the cursor after the content; boolean fields put it
    /// on their cell.
    pub fn focus<T: SerialTx>(&mut self, term: &mut Terminal<T>) {
        self.cursor = if self.is_boolean() { 0 } else { self.content.len() };
        self.redraw(term);
    }

    /// Show a dim hint in an empty text field
    pub fn placeholder<T: SerialTx>(&self, text: &str, term: &mut Terminal<T>) {
        if self.is_boolean() || !self.content.is_empty() {
            return;
        }
        let end = text
            .char_indices()
            .nth(self.max_length)
            .map_or(text.len(), |(i, _)| i);
        term.write_at(Some(self.origin), &text[..end], Some(Attribute::Dim));
        term.move_to(self.origin);
    }

    fn redraw<T: SerialTx>(&self, term: &mut Terminal<T>) {
        term.attr_on(Attribute::Underline);
        term.move_to(self.origin);
        term.repeat(b' ', self.max_length);
        term.move_to(self.origin);
        term.out(&self.content);
        term.attrs_off();
        term.move_to(self.origin.offset_col(self.cursor as u16));
    }

    // Input

    /// Apply one key and redraw if anything changed
    pub fn handle_key<T: SerialTx>(&mut self, key: Key, term: &mut Terminal<T>) {
        match self.mode {
            FieldMode::Text(policy) => {
                if self.edit(key, policy) {
                    self.redraw(term);
                }
            }
            FieldMode::Boolean { state } => {
                let next = match key {
                    Key::Printable(b' ') => !state,
                    Key::Printable(b'X' | b'x' | b'Y' | b'y' | b'1') => true,
                    Key::Printable(b'0' | b'n' | b'N') => false,
                    _ => return,
                };
                self.set_state(next);
                self.focus(term);
            }
        }
    }

    /// Returns true if the content or cursor changed
    fn edit(&mut self, key: Key, policy: TextPolicy) -> bool {
        match key {
            Key::Left if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            Key::Right if self.cursor < self.content.len() => {
                self.cursor += 1;
                true
            }
            Key::Backspace if self.cursor > 0 => {
                self.content.remove(self.cursor - 1);
                self.cursor -= 1;
                true
            }
            Key::Delete if self.cursor < self.content.len() => {
                self.content.remove(self.cursor);
                true
            }
            Key::Printable(b) => self.insert(b, policy),
            _ => false,
        }
    }

    fn insert(&mut self, byte: u8, policy: TextPolicy) -> bool {
        if !policy.accepts(byte) || self.content.len() >= self.max_length {
            return false;
        }
        if self.content.insert(self.cursor, byte).is_err() {
            return false;
        }
        if policy.folds_case() {
            self.content.make_ascii_uppercase();
        }
        self.cursor += 1;
        true
    }
}

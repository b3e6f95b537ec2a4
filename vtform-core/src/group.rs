//! Field groups and the form loop
//!
//! A [`FieldGroup`] owns the fields of one form and decides which of them
//! receives keys. Tab and Shift-Tab cycle focus, Enter confirms the form
//! and Escape cancels it; everything else goes to the focused field.
//!
//! The loop is a plain busy-poll: [`FieldGroup::poll`] reads whatever is
//! queued on the line, decodes it and dispatches each key in order.
//! [`FieldGroup::run`] repeats that until the form is closed.

use heapless::Vec;
use vtform_display::Terminal;
use vtform_hal::{SerialRx, SerialTx};
use vtform_protocol::{Key, KeyDecoder};

use crate::config::FormConfig;
use crate::field::{EditableField, FieldError};

/// Maximum fields per group
pub const MAX_FIELDS: usize = 16;

/// Bytes read from the line per poll
const POLL_CHUNK: usize = 32;

/// Keys a single poll can yield; every key takes at least one byte
const MAX_KEYS_PER_POLL: usize = POLL_CHUNK;

/// How a form was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Enter
    Confirmed,
    /// Escape
    Cancelled,
}

/// Group construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupError {
    /// No fields given
    Empty,
    /// More than [`MAX_FIELDS`] fields given
    TooManyFields,
    /// A field description was invalid
    Field(FieldError),
}

impl From<FieldError> for GroupError {
    fn from(e: FieldError) -> Self {
        GroupError::Field(e)
    }
}

/// The fields of one form plus focus and input state
pub struct FieldGroup {
    fields: Vec<EditableField, MAX_FIELDS>,
    focus: usize,
    decoder: KeyDecoder,
}

impl FieldGroup {
    /// Create a group, focused on its first field
    pub fn new<I>(fields: I) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = EditableField>,
    {
        let mut group = Vec::new();
        for field in fields {
            group.push(field).map_err(|_| GroupError::TooManyFields)?;
        }
        if group.is_empty() {
            return Err(GroupError::Empty);
        }
        Ok(Self {
            fields: group,
            focus: 0,
            decoder: KeyDecoder::new(),
        })
    }

    /// Build every field of a form description
    pub fn from_config(config: &FormConfig) -> Result<Self, GroupError> {
        let mut fields: Vec<EditableField, MAX_FIELDS> = Vec::new();
        for field in &config.fields {
            let field = EditableField::from_config(field)?;
            fields.push(field).map_err(|_| GroupError::TooManyFields)?;
        }
        Self::new(fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused(&self) -> &EditableField {
        &self.fields[self.focus]
    }

    pub fn field(&self, index: usize) -> Option<&EditableField> {
        self.fields.get(index)
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut EditableField> {
        self.fields.get_mut(index)
    }

    pub fn fields(&self) -> &[EditableField] {
        &self.fields
    }

    /// Paint every field, then leave the cursor in the focused one
    pub fn draw_all<T: SerialTx>(&mut self, term: &mut Terminal<T>) {
        for field in self.fields.iter_mut() {
            field.focus(term);
        }
        self.fields[self.focus].focus(term);
    }

    /// Move focus to the next field, wrapping at the end
    pub fn focus_next<T: SerialTx>(&mut self, term: &mut Terminal<T>) {
        self.set_focus((self.focus + 1) % self.fields.len(), term);
    }

    /// Move focus to the previous field, wrapping at the start
    pub fn focus_previous<T: SerialTx>(&mut self, term: &mut Terminal<T>) {
        let len = self.fields.len();
        self.set_focus((self.focus + len - 1) % len, term);
    }

    fn set_focus<T: SerialTx>(&mut self, index: usize, term: &mut Terminal<T>) {
        self.focus = index;
        #[cfg(feature = "defmt")]
        defmt::debug!("focus -> field {}", index);
        self.fields[index].focus(term);
    }

    /// Handle one key
    ///
    /// Returns the outcome if the key closed the form.
    pub fn dispatch<T: SerialTx>(&mut self, key: Key, term: &mut Terminal<T>) -> Option<Outcome> {
        match key {
            Key::Enter => return Some(Outcome::Confirmed),
            Key::Escape => return Some(Outcome::Cancelled),
            Key::Tab => self.focus_next(term),
            Key::ShiftTab => self.focus_previous(term),
            key => self.fields[self.focus].handle_key(key, term),
        }
        None
    }

    /// Read and handle whatever input is queued
    ///
    /// Returns `Ok(None)` while the form is still open. Once a key closes
    /// it, the rest of the chunk is discarded, the screen is cleared and
    /// the decoder is reset for the next form.
    pub fn poll<R, T>(&mut self, rx: &mut R, term: &mut Terminal<T>) -> Result<Option<Outcome>, R::Error>
    where
        R: SerialRx,
        T: SerialTx,
    {
        let mut buf = [0u8; POLL_CHUNK];
        let n = rx.read_available(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }

        let mut keys: Vec<Key, MAX_KEYS_PER_POLL> = Vec::new();
        for key in self.decoder.decode(&buf[..n]) {
            let _ = keys.push(key);
        }

        for key in keys {
            if let Some(outcome) = self.dispatch(key, term) {
                #[cfg(feature = "defmt")]
                defmt::info!("form closed: {}", outcome);
                self.decoder.reset();
                term.clear_screen();
                term.home();
                return Ok(Some(outcome));
            }
        }
        Ok(None)
    }

    /// Poll until the form is confirmed or cancelled
    ///
    /// Only a read error from `rx` ends the loop early.
    pub fn run<R, T>(&mut self, rx: &mut R, term: &mut Terminal<T>) -> Result<Outcome, R::Error>
    where
        R: SerialRx,
        T: SerialTx,
    {
        loop {
            if let Some(outcome) = self.poll(rx, term)? {
                return Ok(outcome);
            }
        }
    }
}

//! Form description types
//!
//! A form can be written down as data and turned into a
//! [`FieldGroup`](crate::group::FieldGroup) with
//! [`FieldGroup::from_config`](crate::group::FieldGroup::from_config).

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::MAX_FIELD_LEN;
use crate::group::MAX_FIELDS;
use crate::policy::TextPolicy;

/// Kind of field and its kind-specific settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldKind {
    /// Free text, `max_length` cells wide
    Text { max_length: u16, policy: TextPolicy },
    /// Single on/off cell
    Boolean { state: bool },
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Screen row, 1-indexed
    pub row: u16,
    /// Screen column, 1-indexed
    pub col: u16,
    pub kind: FieldKind,
    /// Starting content for text fields
    pub initial: String<MAX_FIELD_LEN>,
}

impl FieldConfig {
    /// Text field with no starting content
    pub fn text(row: u16, col: u16, max_length: u16, policy: TextPolicy) -> Self {
        Self {
            row,
            col,
            kind: FieldKind::Text { max_length, policy },
            initial: String::new(),
        }
    }

    /// Boolean field
    pub fn boolean(row: u16, col: u16, state: bool) -> Self {
        Self {
            row,
            col,
            kind: FieldKind::Boolean { state },
            initial: String::new(),
        }
    }

    /// Set the starting content, cut to what fits
    pub fn with_initial(mut self, text: &str) -> Self {
        self.initial.clear();
        for c in text.chars() {
            if self.initial.push(c).is_err() {
                break;
            }
        }
        self
    }
}

/// A whole form, fields in focus order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormConfig {
    pub fields: Vec<FieldConfig, MAX_FIELDS>,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; returns it back if the form is full
    pub fn push(&mut self, field: FieldConfig) -> Result<(), FieldConfig> {
        self.fields.push(field)
    }

    /// Builder form of [`push`](Self::push)
    ///
    /// A form holds at most [`MAX_FIELDS`](crate::group::MAX_FIELDS)
    /// fields. Past that, `with` silently ignores the field, so the form
    /// that reaches [`FieldGroup::from_config`](crate::FieldGroup::from_config)
    /// is already truncated. Use `push` when the field count is not fixed
    /// and overflow has to be reported.
    pub fn with(mut self, field: FieldConfig) -> Self {
        let _ = self.fields.push(field);
        self
    }
}

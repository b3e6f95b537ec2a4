//! Board-agnostic form logic for VT100 terminals
//!
//! This crate contains everything about a form that does not depend on the
//! serial hardware:
//!
//! - Editable fields (free text or boolean) and their edit state
//! - Character acceptance policy for text fields
//! - Field groups: focus cycling and the polling run loop
//! - Configuration types for describing forms as data
//!
//! Input arrives through a [`vtform_hal::SerialRx`], is decoded by
//! [`vtform_protocol::KeyDecoder`], and every change is redrawn through a
//! [`vtform_display::Terminal`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod field;
pub mod group;
pub mod policy;

#[cfg(test)]
mod testing;

pub use field::{EditableField, FieldError, FieldMode, MAX_FIELD_LEN};
pub use group::{FieldGroup, GroupError, Outcome, MAX_FIELDS};
pub use policy::TextPolicy;

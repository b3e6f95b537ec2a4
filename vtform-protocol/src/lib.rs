//! VT100/ANSI Terminal Protocol
//!
//! This crate covers both directions of the serial link between the form
//! engine and a VT100-compatible terminal:
//!
//! - Terminal → engine: raw key bytes, decoded into [`Key`] values by the
//!   incremental [`KeyDecoder`].
//! - Engine → terminal: escape sequences, modelled by [`Sequence`] and
//!   encoded into bounded byte buffers.
//!
//! # Wire Overview
//!
//! ```text
//! ┌─────┬─────┬──────────────┬───────┐
//! │ ESC │  [  │ PARAMS (0-8) │ FINAL │   CSI sequence, e.g. ESC [ 3 ~
//! │ 1B  │ 1B  │ 0x30–0x3F    │ 1B    │
//! └─────┴─────┴──────────────┴───────┘
//! ```
//!
//! Everything else on the input side is a single byte: a control key
//! (`\t`, `\r`, `\x7f`), a printable ASCII byte, or noise that is dropped.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod decoder;
pub mod keys;
pub mod sequence;

pub use decoder::{Keys, KeyDecoder, MAX_CSI_PARAMS};
pub use keys::{Key, ESC};
pub use sequence::{Attribute, Sequence, MAX_SEQUENCE_LEN};

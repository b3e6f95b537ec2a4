//! VT100 terminal renderer for vtform
//!
//! This crate provides:
//! - [`Terminal`], a stateless emitter of escape sequences over any
//!   [`vtform_hal::SerialTx`] sink
//! - Box and line drawing with the DEC special graphics character set
//! - [`Position`], 1-indexed screen coordinates
//!
//! # Delivery
//!
//! Every operation is fire-and-forget. Nothing is returned, nothing waits
//! for the terminal, and there is no flow control. If the sink reports an
//! error the write is counted in [`Terminal::dropped_writes`] and otherwise
//! ignored; what happens to the bytes is up to the sink.

#![no_std]
#![deny(unsafe_code)]

pub mod draw;
pub mod glyphs;
pub mod terminal;

// Re-export key types
pub use terminal::{Position, Terminal};
pub use vtform_protocol::{Attribute, Sequence};

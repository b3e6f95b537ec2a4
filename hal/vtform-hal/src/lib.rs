//! vtform Hardware Abstraction Layer
//!
//! This crate defines the byte stream traits the terminal form engine talks
//! to. A form only ever needs two capabilities from the outside world: a
//! place to write escape sequences to, and a place to poll input bytes from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Forms (vtform-core, vtform-firmware)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vtform-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  IoSerial<T>  │       │  test mocks   │
//! │ (embedded-io) │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::SerialTx`] - Byte sink (terminal output)
//! - [`serial::SerialRx`] - Non-blocking byte source (terminal input)

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod serial;

pub use io::IoSerial;
pub use serial::{Serial, SerialConfig, SerialRx, SerialTx};

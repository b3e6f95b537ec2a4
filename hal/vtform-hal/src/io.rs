//! Adapter from `embedded-io` streams
//!
//! Chip HALs (embassy-rp's buffered UART, USB CDC classes, etc.) already
//! expose their byte streams through the `embedded-io` traits. [`IoSerial`]
//! wraps such a stream so it can drive a terminal session directly.

use embedded_io::{ErrorType, Read, ReadReady, Write};

use crate::serial::{SerialRx, SerialTx};

/// Serial line backed by an `embedded-io` stream
pub struct IoSerial<T> {
    inner: T,
}

impl<T> IoSerial<T> {
    /// Wrap an `embedded-io` stream
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped stream
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped stream
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the stream
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> SerialTx for IoSerial<T> {
    type Error = <T as ErrorType>::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

impl<T: Read + ReadReady> SerialRx for IoSerial<T> {
    type Error = <T as ErrorType>::Error;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        // `read` would park until a byte arrives; only call it when the
        // stream already holds data.
        if buf.is_empty() || !self.inner.read_ready()? {
            return Ok(0);
        }
        self.inner.read(buf)
    }
}

//! Serial doubles shared by the unit tests

use heapless::Vec;
use vtform_hal::{SerialRx, SerialTx};

/// Records every byte written
pub struct MockTx {
    pub sent: Vec<u8, 4096>,
}

impl MockTx {
    pub fn new() -> Self {
        Self { sent: Vec::new() }
    }

    pub fn take(&mut self) -> Vec<u8, 4096> {
        core::mem::take(&mut self.sent)
    }
}

impl SerialTx for MockTx {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        self.sent.extend_from_slice(data)
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Discards everything, for long property runs
pub struct NullTx;

impl SerialTx for NullTx {
    type Error = core::convert::Infallible;

    fn write_blocking(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Returned once a script has been fully read
#[derive(Debug, PartialEq, Eq)]
pub struct Exhausted;

/// Plays back one chunk per read, with optional empty reads in between
pub struct ScriptedRx {
    chunks: &'static [&'static [u8]],
    next: usize,
}

impl ScriptedRx {
    pub fn new(chunks: &'static [&'static [u8]]) -> Self {
        Self { chunks, next: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.chunks.len() - self.next
    }
}

impl SerialRx for ScriptedRx {
    type Error = Exhausted;

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Exhausted> {
        let chunk = self.chunks.get(self.next).ok_or(Exhausted)?;
        self.next += 1;
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        Ok(n)
    }
}

/// Returns true if `needle` occurs anywhere in `haystack`
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

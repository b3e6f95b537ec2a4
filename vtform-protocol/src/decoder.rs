//! Incremental decoding of terminal key bytes
//!
//! Terminals send most keys as a single byte, but cursor and editing keys
//! arrive as multi-byte escape sequences. A serial read can return any
//! slice of that stream, so the decoder keeps its position inside a
//! sequence between calls:
//!
//! - `ESC [` (CSI) and `ESC O` (SS3) sequences split across reads are
//!   completed by the next read.
//! - The Escape key is an `ESC` that ends a read. A terminal that splits a
//!   sequence right after its `ESC` therefore yields a spurious Escape; the
//!   decoder cannot tell the two apart without a timer.
//! - An `ESC` followed in the same read by anything that does not start a
//!   sequence is a Meta/Alt prefix; the pair is dropped.
//! - Bytes and sequences that form no key are dropped without error.

use heapless::Vec;

use crate::keys::{Key, ESC};

/// Maximum CSI parameter bytes buffered before a sequence is discarded
pub const MAX_CSI_PARAMS: usize = 8;

/// State machine for decoding key bytes
#[derive(Debug, Clone)]
pub struct KeyDecoder {
    state: DecodeState,
    params: Vec<u8, MAX_CSI_PARAMS>,
    /// Current CSI sequence is malformed or too long; swallow until its final byte
    discarding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Between keys
    Idle,
    /// Got ESC, waiting to see whether a sequence follows
    SawEscape,
    /// Got `ESC [`, collecting parameters until a final byte
    SawEscapeBracket,
    /// Got `ESC O`, waiting for the SS3 final byte
    SawEscapeO,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    /// Create a new decoder
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Idle,
            params: Vec::new(),
            discarding: false,
        }
    }

    /// Drop any partially received sequence
    pub fn reset(&mut self) {
        self.state = DecodeState::Idle;
        self.params.clear();
        self.discarding = false;
    }

    /// Returns true if no sequence is in progress
    pub fn is_idle(&self) -> bool {
        self.state == DecodeState::Idle
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns the key this byte completes, if any. A pending `ESC` is only
    /// turned into [`Key::Escape`] by [`finish_chunk`](Self::finish_chunk).
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            DecodeState::Idle => self.feed_idle(byte),
            DecodeState::SawEscape => {
                match byte {
                    b'[' => {
                        self.params.clear();
                        self.discarding = false;
                        self.state = DecodeState::SawEscapeBracket;
                    }
                    b'O' => self.state = DecodeState::SawEscapeO,
                    // A second ESC restarts; the first one had company.
                    ESC => {}
                    _ => {
                        #[cfg(feature = "defmt")]
                        defmt::trace!("dropped ESC-prefixed byte {=u8:#x}", byte);
                        self.state = DecodeState::Idle;
                    }
                }
                None
            }
            DecodeState::SawEscapeBracket => self.feed_csi(byte),
            DecodeState::SawEscapeO => {
                self.state = DecodeState::Idle;
                match Key::from_cursor_final(byte) {
                    Some(key) => Some(key),
                    // Control bytes cannot end SS3; handle them normally
                    None if byte < 0x20 => self.feed_idle(byte),
                    None => {
                        #[cfg(feature = "defmt")]
                        defmt::trace!("dropped SS3 sequence ending in {=u8:#x}", byte);
                        None
                    }
                }
            }
        }
    }

    /// Apply the end-of-read rule
    ///
    /// A pending lone ESC becomes the Escape key. Partial CSI/SS3 sequences
    /// are kept for the next read.
    pub fn finish_chunk(&mut self) -> Option<Key> {
        if self.state == DecodeState::SawEscape {
            self.state = DecodeState::Idle;
            Some(Key::Escape)
        } else {
            None
        }
    }

    /// Decode one chunk of bytes as returned by a single read
    ///
    /// The returned iterator yields keys in arrival order and applies
    /// [`KeyDecoder::finish_chunk`] once the chunk is exhausted. An empty
    /// chunk yields nothing unless an ESC is pending.
    pub fn decode<'a>(&'a mut self, chunk: &'a [u8]) -> Keys<'a> {
        Keys {
            decoder: self,
            bytes: chunk.iter(),
            finished: false,
        }
    }

    fn feed_idle(&mut self, byte: u8) -> Option<Key> {
        if byte == ESC {
            self.state = DecodeState::SawEscape;
            None
        } else {
            Key::from_byte(byte)
        }
    }

    fn feed_csi(&mut self, byte: u8) -> Option<Key> {
        match byte {
            // Parameter bytes
            0x30..=0x3F => {
                if self.params.push(byte).is_err() {
                    self.discarding = true;
                }
                None
            }
            // Intermediate bytes: no key we recognise uses them
            0x20..=0x2F => {
                self.discarding = true;
                None
            }
            // Final byte
            0x40..=0x7E => {
                let key = if self.discarding {
                    None
                } else {
                    self.resolve_csi(byte)
                };
                #[cfg(feature = "defmt")]
                if key.is_none() {
                    defmt::trace!("dropped CSI sequence ending in {=u8:#x}", byte);
                }
                self.reset();
                key
            }
            // Anything else cannot continue a sequence
            _ => {
                self.reset();
                self.feed_idle(byte)
            }
        }
    }

    fn resolve_csi(&self, final_byte: u8) -> Option<Key> {
        match final_byte {
            b'Z' => Some(Key::ShiftTab),
            b'~' => {
                // Modifier parameters (`3;5~`) follow the key number.
                let number = self.params.split(|&b| b == b';').next().unwrap_or(&[]);
                Key::from_tilde_param(number)
            }
            _ => Key::from_cursor_final(final_byte),
        }
    }
}

/// Iterator over the keys of one chunk, see [`KeyDecoder::decode`]
pub struct Keys<'a> {
    decoder: &'a mut KeyDecoder,
    bytes: core::slice::Iter<'a, u8>,
    finished: bool,
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        for &byte in self.bytes.by_ref() {
            if let Some(key) = self.decoder.feed(byte) {
                return Some(key);
            }
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        self.decoder.finish_chunk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(decoder: &mut KeyDecoder, chunk: &[u8]) -> Vec<Key, 32> {
        decoder.decode(chunk).collect()
    }

    #[test]
    fn test_empty_chunk_yields_nothing() {
        let mut decoder = KeyDecoder::new();
        assert!(decode_all(&mut decoder, &[]).is_empty());
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_cursor_keys() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[D\x1b[C\x1b[A\x1b[B");
        assert_eq!(keys.as_slice(), &[Key::Left, Key::Right, Key::Up, Key::Down]);
    }

    #[test]
    fn test_ss3_cursor_keys() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1bOD\x1bOC");
        assert_eq!(keys.as_slice(), &[Key::Left, Key::Right]);
    }

    #[test]
    fn test_editing_keys() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[3~\x1b[2~\x1b[1~\x1b[4~\x1b[5~\x1b[6~");
        assert_eq!(
            keys.as_slice(),
            &[
                Key::Delete,
                Key::Insert,
                Key::Home,
                Key::End,
                Key::PageUp,
                Key::PageDown
            ]
        );
    }

    #[test]
    fn test_shift_tab_and_controls() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\t\x1b[Z\r\x7f");
        assert_eq!(
            keys.as_slice(),
            &[Key::Tab, Key::ShiftTab, Key::Enter, Key::Backspace]
        );
    }

    #[test]
    fn test_lone_escape_chunk() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b");
        assert_eq!(keys.as_slice(), &[Key::Escape]);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_meta_prefixed_byte_is_dropped() {
        // Alt-x and Alt-Backspace arrive as ESC plus the key in one read
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1bxa\x1b\x7f");
        assert_eq!(keys.as_slice(), &[Key::Printable(b'a')]);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_double_escape() {
        // Only the ESC that ends the read counts as a key
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b\x1b");
        assert_eq!(keys.as_slice(), &[Key::Escape]);
    }

    #[test]
    fn test_escape_then_sequence_in_one_read() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b\x1b[D");
        assert_eq!(keys.as_slice(), &[Key::Left]);
    }

    #[test]
    fn test_mixed_chunk() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"ab\x1b[Dc");
        assert_eq!(
            keys.as_slice(),
            &[
                Key::Printable(b'a'),
                Key::Printable(b'b'),
                Key::Left,
                Key::Printable(b'c')
            ]
        );
    }

    #[test]
    fn test_csi_split_across_chunks() {
        let mut decoder = KeyDecoder::new();
        assert!(decode_all(&mut decoder, b"\x1b[").is_empty());
        assert!(!decoder.is_idle());
        assert_eq!(decode_all(&mut decoder, b"D").as_slice(), &[Key::Left]);

        assert!(decode_all(&mut decoder, b"\x1b[3").is_empty());
        assert_eq!(decode_all(&mut decoder, b"~").as_slice(), &[Key::Delete]);
    }

    #[test]
    fn test_split_after_escape_is_known_limitation() {
        // The ESC is flushed as a key at the chunk boundary, so the rest of
        // the sequence arrives as ordinary bytes.
        let mut decoder = KeyDecoder::new();
        assert_eq!(decode_all(&mut decoder, b"\x1b").as_slice(), &[Key::Escape]);
        assert_eq!(
            decode_all(&mut decoder, b"[D").as_slice(),
            &[Key::Printable(b'['), Key::Printable(b'D')]
        );
    }

    #[test]
    fn test_unknown_csi_is_dropped() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[99~\x1b[Ma");
        assert_eq!(keys.as_slice(), &[Key::Printable(b'a')]);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_modified_keys_map_to_base_key() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[1;5D\x1b[3;2~");
        assert_eq!(keys.as_slice(), &[Key::Left, Key::Delete]);
    }

    #[test]
    fn test_overlong_csi_is_discarded() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[1;2;3;4;5;6;7D!");
        assert_eq!(keys.as_slice(), &[Key::Printable(b'!')]);
    }

    #[test]
    fn test_control_byte_aborts_csi() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1b[3\rx");
        assert_eq!(keys.as_slice(), &[Key::Enter, Key::Printable(b'x')]);
    }

    #[test]
    fn test_unknown_ss3_is_dropped() {
        // Keypad PF1-PF4 and application keypad digits
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1bOP\x1bOQ\x1bOR\x1bOS\x1bOqk");
        assert_eq!(keys.as_slice(), &[Key::Printable(b'k')]);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_control_byte_aborts_ss3() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, b"\x1bO\t");
        assert_eq!(keys.as_slice(), &[Key::Tab]);
    }

    #[test]
    fn test_ss3_split_across_chunks() {
        let mut decoder = KeyDecoder::new();
        assert!(decode_all(&mut decoder, b"\x1bO").is_empty());
        assert!(decode_all(&mut decoder, b"P").is_empty());
        assert!(decode_all(&mut decoder, b"\x1bO").is_empty());
        assert_eq!(decode_all(&mut decoder, b"C").as_slice(), &[Key::Right]);
    }

    #[test]
    fn test_garbage_is_dropped() {
        let mut decoder = KeyDecoder::new();
        let keys = decode_all(&mut decoder, &[0x00, 0x80, 0xFF, b'\n', b'Z']);
        assert_eq!(keys.as_slice(), &[Key::Printable(b'Z')]);
    }

    #[test]
    fn test_reset_drops_partial_sequence() {
        let mut decoder = KeyDecoder::new();
        assert!(decode_all(&mut decoder, b"\x1b[3").is_empty());
        decoder.reset();
        assert_eq!(decode_all(&mut decoder, b"~").as_slice(), &[Key::Printable(b'~')]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn printable_bytes_decode_to_themselves(bytes in proptest::collection::vec(0x20u8..=0x7E, 0..32)) {
                let mut decoder = KeyDecoder::new();
                let keys: Vec<Key, 32> = decoder.decode(&bytes).collect();
                prop_assert_eq!(keys.len(), bytes.len());
                for (key, byte) in keys.iter().zip(bytes.iter()) {
                    prop_assert_eq!(*key, Key::Printable(*byte));
                }
            }

            #[test]
            fn chunking_does_not_matter_after_bracket(split in 2usize..4) {
                // Any split at or after the `[` decodes the same as the whole.
                let seq = b"\x1b[3~";
                let mut decoder = KeyDecoder::new();
                let mut keys: Vec<Key, 4> = decoder.decode(&seq[..split]).collect();
                keys.extend(decoder.decode(&seq[split..]));
                prop_assert_eq!(keys.as_slice(), &[Key::Delete]);
            }

            #[test]
            fn arbitrary_bytes_never_panic(
                bytes in proptest::collection::vec(any::<u8>(), 0..64),
                split in 0usize..64,
            ) {
                let split = split.min(bytes.len());
                let mut decoder = KeyDecoder::new();
                let mut count = decoder.decode(&bytes[..split]).count();
                count += decoder.decode(&bytes[split..]).count();
                // Every key consumes at least one byte of its own
                prop_assert!(count <= bytes.len());
            }

            #[test]
            fn escape_only_when_read_ends_in_esc(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
                let mut decoder = KeyDecoder::new();
                let keys: Vec<Key, 32> = decoder.decode(&bytes).collect();
                let escapes = keys.iter().filter(|&&key| key == Key::Escape).count();
                prop_assert!(escapes <= 1);
                if escapes == 1 {
                    prop_assert_eq!(keys.last(), Some(&Key::Escape));
                    prop_assert_eq!(bytes.last(), Some(&ESC));
                }
            }
        }
    }
}

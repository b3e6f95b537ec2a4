//! Character acceptance for text fields

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Punctuation accepted only in URL mode
///
/// `.` is in the set but is accepted in every mode.
pub const URL_PUNCTUATION: &[u8] = b"!@#$%^&*()_+-=`~[]\\\"{}|;:',<.>/?";

/// Which printable bytes a text field takes, and whether it folds case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextPolicy {
    /// Keep lowercase letters as typed instead of upcasing the field
    pub allow_lowercase: bool,
    /// Accept the space bar
    pub allow_spaces: bool,
    /// Accept URL punctuation; also disables case folding
    pub url_mode: bool,
}

impl TextPolicy {
    /// Uppercase-only letters, digits and `.`
    pub const fn strict() -> Self {
        Self {
            allow_lowercase: false,
            allow_spaces: false,
            url_mode: false,
        }
    }

    /// Mixed case with spaces
    pub const fn free_text() -> Self {
        Self {
            allow_lowercase: true,
            allow_spaces: true,
            url_mode: false,
        }
    }

    /// Letters, digits and URL punctuation, case preserved
    pub const fn url() -> Self {
        Self {
            allow_lowercase: false,
            allow_spaces: false,
            url_mode: true,
        }
    }

    /// Returns true if a typed byte may be inserted
    pub fn accepts(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric()
            || byte == b'.'
            || (byte == b' ' && self.allow_spaces)
            || (self.url_mode && is_url_punctuation(byte))
    }

    /// Returns true if the whole content is kept uppercase
    pub fn folds_case(&self) -> bool {
        !self.allow_lowercase && !self.url_mode
    }
}

/// Returns true for bytes in [`URL_PUNCTUATION`]
pub fn is_url_punctuation(byte: u8) -> bool {
    URL_PUNCTUATION.contains(&byte)
}

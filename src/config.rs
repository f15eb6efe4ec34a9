//! Run configuration

use serde::Deserialize;

/// Tunables for an extraction run
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractConfig {
    /// Maximum number of characters of comment text kept in a row's note
    pub note_chars: usize,
}

impl ExtractConfig {
    pub const DEFAULT_NOTE_CHARS: usize = 240;

    /// Output file used when the caller does not name one
    pub const DEFAULT_OUTPUT: &'static str = "emailoctopus_import.csv";

    #[must_use]
    pub const fn with_note_chars(mut self, note_chars: usize) -> Self {
        self.note_chars = note_chars;
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            note_chars: Self::DEFAULT_NOTE_CHARS,
        }
    }
}

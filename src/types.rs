//! Core types for extracted contacts

use serde::Serialize;
use std::fmt;

/// One raw comment record
///
/// Records carry no fixed schema; several capture shapes coexist in a
/// single export, so they stay untyped JSON objects.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Column headers of the output table, in order
pub const OUTPUT_HEADERS: [&str; 5] = ["Email Address", "First Name", "Last Name", "Source", "Note"];

/// Best-effort author identity derived from a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// First name, or the first token of the display name
    pub first: String,

    /// Last name, or the remaining tokens of the display name
    pub last: String,

    /// Link to the author's profile
    pub profile_url: String,
}

impl Identity {
    /// Split a display name into first and last parts
    ///
    /// The first whitespace-delimited token is the first name and the
    /// remaining tokens, joined by single spaces, are the last name.
    #[must_use]
    pub fn from_display_name(name: &str, profile_url: impl Into<String>) -> Self {
        let mut parts = name.split_whitespace();
        let first = parts.next().unwrap_or_default().to_string();
        let last = parts.collect::<Vec<_>>().join(" ");

        Self {
            first,
            last,
            profile_url: profile_url.into(),
        }
    }

    /// Check if nothing at all could be derived
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty() && self.profile_url.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first.is_empty(), self.last.is_empty()) {
            (false, false) => write!(f, "{} {}", self.first, self.last),
            (false, true) => write!(f, "{}", self.first),
            (true, false) => write!(f, "{}", self.last),
            (true, true) => write!(f, "(unknown)"),
        }
    }
}

/// One row of the import table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutputRow {
    #[serde(rename = "Email Address")]
    pub email: String,

    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    /// Link back to the comment or its author
    #[serde(rename = "Source")]
    pub source: String,

    /// Excerpt of the original comment text
    #[serde(rename = "Note")]
    pub note: String,
}

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records examined, malformed ones included
    pub records: usize,

    /// Records dropped because they are not objects
    pub malformed: usize,

    /// Records with no resolvable comment text
    pub without_text: usize,

    /// Address candidates matched in comment text
    pub candidates: usize,

    /// Candidates already known from the ledger or earlier in the run
    pub duplicates: usize,
}

/// Result of one pipeline run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Rows in discovery order
    pub rows: Vec<OutputRow>,

    pub stats: RunStats,
}

impl Extraction {
    /// Number of unique addresses emitted
    #[must_use]
    pub const fn count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! Address deduplication across runs
//!
//! The seen set starts from a ledger of previously exported contacts and
//! grows as rows are emitted. Membership is case-insensitive: everything
//! is stored lower-cased.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Ledger column headers that may hold the address, in priority order
pub const LEDGER_EMAIL_HEADERS: [&str; 4] = ["Email address", "Email Address", "email", "Email"];

/// Addresses already known for the current run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    addresses: HashSet<String>,
}

impl SeenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a set from a contact ledger on disk
    ///
    /// A missing or unreadable ledger means no prior contacts.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No ledger at {}, starting empty", path.display());
            return Self::new();
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                let seen = Self::from_ledger(&content);
                debug!("Loaded {} known addresses from {}", seen.len(), path.display());
                seen
            }
            Err(e) => {
                warn!("Ignoring unreadable ledger {}: {e}", path.display());
                Self::new()
            }
        }
    }

    /// Seed a set from ledger text with a header row
    ///
    /// Per row, the first recognized header holding a non-empty value
    /// supplies the address. Rows that fail to parse are skipped.
    #[must_use]
    pub fn from_ledger(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let columns: Vec<usize> = match reader.headers() {
            Ok(headers) => LEDGER_EMAIL_HEADERS
                .iter()
                .filter_map(|name| headers.iter().position(|h| h == *name))
                .collect(),
            Err(e) => {
                warn!("Ignoring ledger with unreadable header: {e}");
                return Self::new();
            }
        };

        let mut seen = Self::new();
        for (line, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!("Skipping ledger row {}: {e}", line + 2);
                    continue;
                }
            };

            if let Some(address) = columns
                .iter()
                .filter_map(|&column| row.get(column))
                .find(|value| !value.is_empty())
            {
                seen.record(address);
            }
        }
        seen
    }

    /// Check whether an address has not been seen yet
    #[must_use]
    pub fn is_new(&self, address: &str) -> bool {
        !self.addresses.contains(&address.to_lowercase())
    }

    /// Mark an address as seen
    pub fn record(&mut self, address: &str) {
        self.addresses.insert(address.to_lowercase());
    }

    /// Mark an address as seen, returning whether it was new
    pub fn insert(&mut self, address: &str) -> bool {
        self.addresses.insert(address.to_lowercase())
    }

    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        !self.is_new(address)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SeenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = Self::new();
        for address in iter {
            seen.record(address.as_ref());
        }
        seen
    }
}

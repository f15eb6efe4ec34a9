// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Comment Contact Extraction
//!
//! Pulls email addresses out of exported social-media comments and turns
//! them into an import-ready contact table.
//!
//! # Features
//!
//! - Tolerant field resolution across current and legacy record shapes
//! - Recovery of obfuscated addresses (`jane (at) example (dot) com`)
//! - Strict TLD boundaries so addresses do not swallow following prose
//! - Deduplication against a previously exported contact ledger
//!
//! # Example
//!
//! ```rust
//! use comment_contacts::{ExtractionPipeline, SeenSet, parse_records};
//!
//! let records = parse_records(
//!     r#"{"commentary": "reach me: jane (at) example (dot) com", "actor": {"name": "Jane Q Public"}}"#,
//! )
//! .unwrap();
//!
//! let mut seen = SeenSet::new();
//! let extraction = ExtractionPipeline::default().run(&records, &mut seen);
//!
//! assert_eq!(extraction.rows[0].email, "jane@example.com");
//! assert_eq!(extraction.rows[0].last_name, "Q Public");
//! ```

mod config;
mod dedup;
mod deobfuscate;
mod error;
mod io;
mod pattern;
mod pipeline;
mod resolve;
mod types;

pub use config::ExtractConfig;
pub use dedup::{LEDGER_EMAIL_HEADERS, SeenSet};
pub use deobfuscate::deobfuscate;
pub use error::{ExtractError, Result};
pub use io::{load_records, parse_records, run, write_rows, write_rows_to_path};
pub use pattern::{Candidate, Candidates, find_candidates, normalize_address};
pub use pipeline::ExtractionPipeline;
pub use resolve::{resolve_comment_text, resolve_identity, resolve_source, resolve_source_for};
pub use types::*;

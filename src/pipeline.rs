//! Extraction over a collection of comment records

use crate::config::ExtractConfig;
use crate::dedup::SeenSet;
use crate::deobfuscate::deobfuscate;
use crate::pattern::find_candidates;
use crate::resolve::{resolve_comment_text, resolve_identity, resolve_source_for};
use crate::types::{Extraction, OutputRow};
use serde_json::Value;
use tracing::{debug, info};

/// Turns comment records into contact rows
#[derive(Debug, Clone, Default)]
pub struct ExtractionPipeline {
    config: ExtractConfig,
}

impl ExtractionPipeline {
    #[must_use]
    pub const fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract one row per previously unseen address, in input order
    ///
    /// Non-object records and records without comment text are skipped.
    /// Every emitted address is added to `seen`, so the same set can be
    /// threaded through several calls to deduplicate across them.
    pub fn run(&self, records: &[Value], seen: &mut SeenSet) -> Extraction {
        let mut extraction = Extraction::default();

        for (index, value) in records.iter().enumerate() {
            extraction.stats.records += 1;

            let Some(record) = value.as_object() else {
                debug!("Skipping record {index}: not an object");
                extraction.stats.malformed += 1;
                continue;
            };

            let Some(text) = resolve_comment_text(record) else {
                debug!("Skipping record {index}: no comment text");
                extraction.stats.without_text += 1;
                continue;
            };

            let identity = resolve_identity(record);
            let source = resolve_source_for(record, &identity);
            let cleaned = deobfuscate(text);

            for candidate in find_candidates(&cleaned) {
                extraction.stats.candidates += 1;
                let email = candidate.normalized();

                if !seen.insert(&email) {
                    debug!("Record {index}: {email} already known");
                    extraction.stats.duplicates += 1;
                    continue;
                }

                debug!("Record {index}: {email} from {identity}");
                extraction.rows.push(OutputRow {
                    email,
                    first_name: identity.first.clone(),
                    last_name: identity.last.clone(),
                    source: source.clone(),
                    note: excerpt(text, self.config.note_chars),
                });
            }
        }

        info!(
            "Extracted {} unique addresses from {} records ({} duplicates, {} skipped)",
            extraction.count(),
            extraction.stats.records,
            extraction.stats.duplicates,
            extraction.stats.malformed + extraction.stats.without_text,
        );

        extraction
    }
}

/// First `max_chars` characters of `text`
fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

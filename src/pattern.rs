//! Address recognition in free text
//!
//! An address is `local@domain.tld` where the local part draws from
//! `[A-Za-z0-9._%+-]`, the domain from `[A-Za-z0-9.-]` and the TLD is two or
//! more letters. A match only counts when the TLD is followed by the end of
//! the text, whitespace or one of `. , ; : ! ? ) } ]`; anything else means
//! the TLD ran into surrounding prose.
//!
//! The `regex` crate has no lookahead, so the local part is located with a
//! regex and the domain boundary is resolved by hand. The domain is tried
//! longest first, the same order a backtracking engine would use.

use regex::Regex;
use std::sync::LazyLock;

/// Local part up to and including the `@`
static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@").unwrap());

/// Punctuation allowed right after a TLD
const BOUNDARY_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', '}', ']'];

/// Punctuation stripped from the end of a matched address
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\''];

const MIN_TLD_LEN: usize = 2;

/// A candidate address found in text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Candidate<'t> {
    /// The matched text, as written
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// Byte offset of the match start
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the match
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The address in its canonical form
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize_address(self.as_str())
    }
}

/// Lazy iterator over the non-overlapping candidates in a text
#[derive(Debug, Clone)]
pub struct Candidates<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Candidates<'t> {
    type Item = Candidate<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let local = LOCAL_PART.find_at(self.text, self.pos)?;

            if let Some(end) = domain_end(self.text, local.end()) {
                self.pos = end;
                return Some(Candidate {
                    text: self.text,
                    start: local.start(),
                    end,
                });
            }

            // No usable domain behind this '@'; the next local part may start right after it
            self.pos = local.end();
        }

        None
    }
}

/// Find all candidate addresses in a text, left to right
#[must_use]
pub const fn find_candidates(text: &str) -> Candidates<'_> {
    Candidates { text, pos: 0 }
}

/// Canonical form of a matched address
///
/// Lower-cases the match and strips trailing punctuation left over from
/// the surrounding sentence.
#[must_use]
pub fn normalize_address(raw: &str) -> String {
    raw.to_lowercase()
        .trim_end_matches(TRAILING_PUNCTUATION)
        .to_string()
}

/// Resolve where the domain after an `@` at `start` ends, if anywhere
fn domain_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let run_end = start
        + bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'.' || **b == b'-')
            .count();

    // The domain proper needs at least one character before the TLD's dot
    (start + 1..run_end)
        .rev()
        .filter(|&dot| bytes[dot] == b'.')
        .find_map(|dot| {
            let end = tld_end(bytes, dot + 1);
            (end - (dot + 1) >= MIN_TLD_LEN && is_boundary(text, end)).then_some(end)
        })
}

/// End of the letter run starting at `start`
///
/// A lower-to-upper case change ends the run: `coAnd` in `a@b.coAnd` is
/// the TLD followed by a new word, not a five-letter TLD.
fn tld_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_alphabetic() {
        if end > start && bytes[end].is_ascii_uppercase() && bytes[end - 1].is_ascii_lowercase() {
            break;
        }
        end += 1;
    }
    end
}

fn is_boundary(text: &str, at: usize) -> bool {
    text[at..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c))
}

//! Recovery of hand-obfuscated addresses
//!
//! Commenters often write `jane (at) example (dot) com` to dodge scrapers.
//! Rewrite passes run over the whole text, in order: `at` tokens, `dot`
//! tokens joining two address characters, any remaining `dot` tokens, then
//! whitespace around `@`.

use regex::Regex;
use std::sync::LazyLock;

/// Standalone `at`, optionally wrapped in `()` or `[]`
static AT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:[(\[]\s*)?\bat\b(?:\s*[)\]])?").unwrap());

/// `dot` token between two address characters, with the spacing around it
static DOT_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Za-z0-9])\s*(?:[(\[]\s*)?\bdot\b(?:\s*[)\]])?\s*([A-Za-z0-9])").unwrap()
});

/// Standalone `dot` anywhere else; surrounding whitespace is kept
static DOT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:[(\[]\s*)?\bdot\b(?:\s*[)\]])?").unwrap());

static AT_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*@\s*").unwrap());

/// Rewrite obfuscation tokens into canonical address symbols
///
/// The result is only meant for address matching: ordinary prose such as
/// "meet at noon" is rewritten too, so callers keep the original text for
/// display.
#[must_use]
pub fn deobfuscate(text: &str) -> String {
    let mut text = AT_TOKEN.replace_all(text, "@").into_owned();

    // Adjacent joins share a character, so `a dot b dot c` needs a second sweep
    loop {
        let joined = DOT_BETWEEN.replace_all(&text, "${1}.${2}").into_owned();
        if joined == text {
            break;
        }
        text = joined;
    }

    let text = DOT_TOKEN.replace_all(&text, ".");
    AT_SPACING.replace_all(&text, "@").into_owned()
}

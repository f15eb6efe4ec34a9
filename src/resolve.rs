//! Field resolution across record shapes
//!
//! Exports mix a current capture shape (an `actor` object, `commentary`
//! text, a direct `linkedinUrl`) with older ones (an `author` object and a
//! handful of text and link aliases). Each logical value is resolved by an
//! ordered chain of total resolvers; the first one that yields a value wins.
//! Values of the wrong JSON type count as absent.

use crate::types::{Identity, Record};
use serde_json::Value;

/// Key holding comment text in the current shape
const PRIMARY_TEXT_KEY: &str = "commentary";

/// Older text keys, in priority order
const FALLBACK_TEXT_KEYS: [&str; 7] = [
    "comment",
    "text",
    "message",
    "body",
    "content",
    "value",
    "commentText",
];

const ACTOR_KEY: &str = "actor";
const AUTHOR_KEY: &str = "author";

/// Direct link to the comment in the current shape
const PRIMARY_LINK_KEY: &str = "linkedinUrl";

/// Older link keys, in priority order
const FALLBACK_LINK_KEYS: [&str; 5] = ["link", "permalink", "updateUrl", "postUrl", "url"];

/// Post identifier keys used to synthesize a source
const POST_ID_KEYS: [&str; 3] = ["postId", "updateId", "activityId"];

type IdentityResolver = fn(&Record) -> Option<Identity>;
type SourceResolver = fn(&Record, &Identity) -> Option<String>;

const IDENTITY_CHAIN: [IdentityResolver; 2] = [identity_from_actor, identity_from_author];
const SOURCE_CHAIN: [SourceResolver; 3] = [direct_link, legacy_link, synthesized_link];

/// Resolve the free text of a comment
///
/// Blank (empty or whitespace-only) values fall through to the next key.
/// The returned text is not trimmed.
#[must_use]
pub fn resolve_comment_text(record: &Record) -> Option<&str> {
    std::iter::once(PRIMARY_TEXT_KEY)
        .chain(FALLBACK_TEXT_KEYS)
        .filter_map(|key| str_field(record, key))
        .find(|text| !text.trim().is_empty())
}

/// Resolve the comment author's identity
///
/// Returns an all-empty identity when the record carries no author
/// object of a known shape.
#[must_use]
pub fn resolve_identity(record: &Record) -> Identity {
    IDENTITY_CHAIN
        .iter()
        .find_map(|resolve| resolve(record))
        .unwrap_or_default()
}

/// Resolve a provenance link for the comment
///
/// A present link field wins even when it is empty. Without one, the
/// source is built from the author's profile link and a post identifier,
/// which may leave it empty when neither exists.
#[must_use]
pub fn resolve_source(record: &Record) -> String {
    resolve_source_for(record, &resolve_identity(record))
}

/// Resolve a provenance link using an identity already resolved for `record`
#[must_use]
pub fn resolve_source_for(record: &Record, identity: &Identity) -> String {
    SOURCE_CHAIN
        .iter()
        .find_map(|resolve| resolve(record, identity))
        .unwrap_or_default()
}

fn identity_from_actor(record: &Record) -> Option<Identity> {
    let actor = object_field(record, ACTOR_KEY)?;
    let name = non_empty_str_field(actor, "name");
    let profile = non_empty_str_field(actor, "linkedinUrl").unwrap_or_default();
    let first = non_empty_str_field(actor, "firstName");
    let last = non_empty_str_field(actor, "lastName");

    let identity = match (first, last, name) {
        (Some(first), Some(last), _) => Identity {
            first: first.to_string(),
            last: last.to_string(),
            profile_url: profile.to_string(),
        },
        (_, _, Some(name)) => Identity::from_display_name(name, profile),
        (first, last, None) => Identity {
            first: first.unwrap_or_default().to_string(),
            last: last.unwrap_or_default().to_string(),
            profile_url: profile.to_string(),
        },
    };
    Some(identity)
}

fn identity_from_author(record: &Record) -> Option<Identity> {
    let author = object_field(record, AUTHOR_KEY)?;
    let profile = non_empty_str_field(author, "profileUrl").unwrap_or_default();
    let first = non_empty_str_field(author, "firstName").unwrap_or_default();
    let last = non_empty_str_field(author, "lastName").unwrap_or_default();

    // Either half missing: the display name is the better signal
    if (first.is_empty() || last.is_empty())
        && let Some(name) = non_empty_str_field(author, "name")
    {
        return Some(Identity::from_display_name(name, profile));
    }

    Some(Identity {
        first: first.to_string(),
        last: last.to_string(),
        profile_url: profile.to_string(),
    })
}

fn direct_link(record: &Record, _: &Identity) -> Option<String> {
    str_field(record, PRIMARY_LINK_KEY).map(str::to_string)
}

fn legacy_link(record: &Record, _: &Identity) -> Option<String> {
    FALLBACK_LINK_KEYS
        .iter()
        .find_map(|key| str_field(record, key))
        .map(str::to_string)
}

#[allow(clippy::unnecessary_wraps)]
fn synthesized_link(record: &Record, identity: &Identity) -> Option<String> {
    let post_id = POST_ID_KEYS
        .iter()
        .find_map(|key| record.get(*key).and_then(scalar_text))
        .unwrap_or_default();

    Some(format!("{} {post_id}", identity.profile_url).trim().to_string())
}

fn object_field<'a>(map: &'a Record, key: &str) -> Option<&'a Record> {
    map.get(key).and_then(Value::as_object)
}

fn str_field<'a>(map: &'a Record, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn non_empty_str_field<'a>(map: &'a Record, key: &str) -> Option<&'a str> {
    str_field(map, key).filter(|s| !s.is_empty())
}

/// Render a post identifier, which exports store as either text or a number
///
/// Zero, in any numeric form, counts as no identifier.
#[allow(clippy::float_cmp)]
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

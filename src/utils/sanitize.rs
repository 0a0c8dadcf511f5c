//! Removal of characters that are unsafe to store or echo back.
//!
//! Markup tags are dropped whole (`<` through the next `>`, or through the end
//! of the input when unterminated) and control characters are removed. Letters,
//! digits, spaces, punctuation and quotes are kept as-is; quotes are never
//! entity-encoded.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

static CONTROL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cc}").expect("control pattern is valid"));

/// Strip markup tags and control characters from `input`.
///
/// The result is not trimmed.
pub fn sanitize_text(input: &str) -> String {
    let without_tags = TAG_RE.replace_all(input, "");
    CONTROL_RE.replace_all(&without_tags, "").into_owned()
}

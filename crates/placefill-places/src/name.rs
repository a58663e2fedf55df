//! Organization-name cleanup for search queries.

use std::sync::LazyLock;

use regex::Regex;

static BUSINESS_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\b(?:LLC|Inc|Corporation|Corp|Ltd|Limited|Co|Company|Group|Holdings|Services)\.?\s*$",
    )
    .expect("valid business suffix regex")
});

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid disallowed chars regex"));

/// Cleans a free-text organization name into a search-friendly string.
///
/// Trims the name, drops one trailing legal/business suffix (`LLC`, `Inc.`,
/// `Corp`, `Services`, ...), replaces punctuation other than `_` and `-`
/// with spaces, and collapses whitespace. The steps repeat until the output
/// stops changing, which makes the function idempotent.
///
/// Never fails; the result may be empty (e.g. for a name that is only a
/// suffix).
#[must_use]
pub fn normalize_org_name(raw: &str) -> String {
    let mut current = normalize_once(raw);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_suffix = BUSINESS_SUFFIX.replace(trimmed, "");
    let cleaned = DISALLOWED_CHARS.replace_all(&without_suffix, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Domain-level website comparison.

use reqwest::Url;

/// Extracts the canonical domain from a website URL.
///
/// Scheme-less input (`"www.example.com/about"`) is treated as `http://`.
/// The host is lower-cased and a leading `www.` is stripped. Returns `None`
/// for empty input or anything that does not parse to a URL with a host;
/// parse failures are logged, never propagated.
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered_prefix = trimmed.get(..8).unwrap_or(trimmed).to_ascii_lowercase();
    let with_scheme =
        if lowered_prefix.starts_with("http://") || lowered_prefix.starts_with("https://") {
            trimmed.to_owned()
        } else {
            format!("http://{trimmed}")
        };

    let parsed = match Url::parse(&with_scheme) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!(url = trimmed, error = %e, "could not parse website URL");
            return None;
        }
    };

    let host = parsed.host_str()?.to_ascii_lowercase();
    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        None
    } else {
        Some(domain.to_owned())
    }
}

/// Returns `true` when both URLs resolve to the same non-empty domain.
#[must_use]
pub fn websites_match(a: &str, b: &str) -> bool {
    match (extract_domain(a), extract_domain(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

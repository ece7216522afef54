//! Path building for DNSimple resources.
//!
//! Resource paths are hierarchical and rooted at an account:
//!
//! - `{account}/domains`
//! - `{account}/domains/{domain}/certificates`
//! - `{account}/domains/{domain}/certificates/{id}`
//!
//! Each segment is percent-escaped on its own, so identifiers containing
//! `/`, `?` or spaces cannot change the path structure. Identifiers that are
//! exactly `.` or `..` are rejected, since no escaping survives URL
//! normalization for them. The API version
//! prefix is added by the transport through [`versioned`], never here.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::rest::build_path;
//!
//! // "list" and "get" share the same builder: the empty id is dropped.
//! let list = build_path("1010", &["domains", "example.com", "certificates", ""]).unwrap();
//! assert_eq!(list, "1010/domains/example.com/certificates");
//!
//! let get = build_path("1010", &["domains", "example.com", "certificates", "42"]).unwrap();
//! assert_eq!(get, "1010/domains/example.com/certificates/42");
//! ```

use crate::clients::InvalidArgumentError;
use crate::config::ApiVersion;

/// Builds an account-rooted resource path.
///
/// Trailing empty segments are dropped. The result has no leading or
/// trailing slash.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptyAccountId`] if `account_id` is empty
/// or whitespace, [`InvalidArgumentError::EmptySegment`] if an empty
/// segment is followed by a non-empty one, and
/// [`InvalidArgumentError::DotSegment`] if the account or a segment is `.`
/// or `..`.
pub fn build_path(account_id: &str, segments: &[&str]) -> Result<String, InvalidArgumentError> {
    if account_id.trim().is_empty() {
        return Err(InvalidArgumentError::EmptyAccountId);
    }

    let used = segments
        .iter()
        .rposition(|segment| !segment.is_empty())
        .map_or(0, |last| last + 1);
    let segments = segments.get(..used).unwrap_or_default();

    if let Some(index) = segments.iter().position(|segment| segment.is_empty()) {
        return Err(InvalidArgumentError::EmptySegment { index });
    }

    // Percent-escaping does not help here: URL parsers also collapse `%2E`.
    if let Some(dot) = std::iter::once(&account_id)
        .chain(segments)
        .find(|segment| is_dot_segment(segment))
    {
        return Err(InvalidArgumentError::DotSegment {
            segment: (*dot).to_string(),
        });
    }

    let mut path = urlencoding::encode(account_id).into_owned();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    Ok(path)
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Prefixes a path with the API version (e.g., `/v2/1010/domains`).
#[must_use]
pub fn versioned(version: &ApiVersion, path: &str) -> String {
    format!("/{}/{}", version.as_segment(), path.trim_start_matches('/'))
}

/// Path of a domain: `{account}/domains/{domain}`.
///
/// # Errors
///
/// Same as [`build_path`]; an empty `domain` yields the domains collection.
pub fn domain_path(account_id: &str, domain: &str) -> Result<String, InvalidArgumentError> {
    build_path(account_id, &["domains", domain])
}

/// Path of a domain's certificates, or of one certificate when
/// `certificate_id` is non-empty.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::EmptySegment`] if `domain` is empty, or
/// [`InvalidArgumentError::EmptyAccountId`] if `account_id` is empty.
pub fn certificate_path(
    account_id: &str,
    domain: &str,
    certificate_id: &str,
) -> Result<String, InvalidArgumentError> {
    build_path(account_id, &["domains", domain, "certificates", certificate_id])
}

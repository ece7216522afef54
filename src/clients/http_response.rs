//! Raw HTTP response types for the DNSimple API client.
//!
//! A [`RawResponse`] is what the transport hands back: status, headers and
//! body bytes, untouched. It is created per call and consumed by the decoder.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::clients::decode::SUCCESS_STATUSES;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::{RateLimit, RawResponse};
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["2400".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["2398".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1700000000".to_string()]);
///
/// let response = RawResponse::new(200, headers, Vec::new());
/// let limit = response.rate_limit().unwrap();
/// assert_eq!(limit.limit, 2400);
/// assert_eq!(limit.remaining, 2398);
/// assert_eq!(limit.reset, 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum number of requests per hour.
    pub limit: u32,
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Epoch seconds at which the window resets.
    pub reset: i64,
}

impl RateLimit {
    /// Returns the reset time as a UTC instant.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.reset, 0)
    }
}

/// A transport-level response.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lowercased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The unparsed response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new `RawResponse`.
    ///
    /// Header names are lowercased so lookups are case-insensitive.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_ascii_lowercase()).or_default().extend(v);
                acc
            });
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the status is in [`SUCCESS_STATUSES`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status)
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn body_is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-RateLimit-Reset` header as epoch seconds, if present.
    #[must_use]
    pub fn rate_limit_reset(&self) -> Option<i64> {
        self.header("x-ratelimit-reset")
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the `Retry-After` header in seconds, if present.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the full rate limit information, if all three headers are present.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimit> {
        let limit = self.header("x-ratelimit-limit")?.trim().parse().ok()?;
        let remaining = self.header("x-ratelimit-remaining")?.trim().parse().ok()?;
        let reset = self.rate_limit_reset()?;

        Some(RateLimit {
            limit,
            remaining,
            reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = RawResponse::new(200, headers(&[("X-Request-Id", "abc-123")]), Vec::new());
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-REQUEST-ID"), Some("abc-123"));
    }

    #[test]
    fn test_rate_limit_requires_all_headers() {
        let response = RawResponse::new(
            200,
            headers(&[("x-ratelimit-limit", "2400"), ("x-ratelimit-reset", "1700000000")]),
            Vec::new(),
        );
        assert!(response.rate_limit().is_none());
        assert_eq!(response.rate_limit_reset(), Some(1_700_000_000));
    }

    #[test]
    fn test_rate_limit_reset_at() {
        let limit = RateLimit {
            limit: 2400,
            remaining: 0,
            reset: 1_700_000_000,
        };
        assert_eq!(limit.reset_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_invalid_numeric_headers_are_ignored() {
        let response = RawResponse::new(
            429,
            headers(&[("x-ratelimit-reset", "soon"), ("retry-after", "-1")]),
            Vec::new(),
        );
        assert!(response.rate_limit_reset().is_none());
        assert!(response.retry_after().is_none());
    }

    #[test]
    fn test_body_is_blank() {
        assert!(RawResponse::new(204, HashMap::new(), Vec::new()).body_is_blank());
        assert!(RawResponse::new(204, HashMap::new(), b" \n".to_vec()).body_is_blank());
        assert!(!RawResponse::new(200, HashMap::new(), b"{}".to_vec()).body_is_blank());
    }

    #[test]
    fn test_is_success_matches_decoded_statuses() {
        for status in [200, 201, 204] {
            assert!(RawResponse::new(status, HashMap::new(), Vec::new()).is_success());
        }
        for status in [202, 206, 301, 404, 500] {
            assert!(
                !RawResponse::new(status, HashMap::new(), Vec::new()).is_success(),
                "{status}"
            );
        }
    }
}

//! Envelope and response types for DNSimple API calls.
//!
//! The API wraps every payload as `{"data": ..., "pagination": {...}}`.
//! [`Envelope<T>`] is that wire shape. [`Response<T>`] is what callers get:
//! the decoded envelope plus the transport metadata (status, headers, rate
//! limit, request id) held in named fields.
//!
//! `Response<T>` implements `Deref<Target = T>`, so it can be used like the
//! inner data:
//!
//! ```rust,ignore
//! let certificates = client.certificates().list_certificates("1010", "example.com", None).await?;
//!
//! for certificate in certificates.iter() {
//!     println!("{}", certificate.common_name);
//! }
//!
//! if let Some(pagination) = certificates.pagination() {
//!     println!("page {} of {}", pagination.current_page, pagination.total_pages);
//! }
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::clients::{RateLimit, RawResponse};

/// Pagination metadata returned by collection endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// The current page (1-based).
    pub current_page: u32,
    /// Entries per page.
    pub per_page: u32,
    /// Total number of entries across all pages.
    pub total_entries: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl Pagination {
    /// Returns `true` if there is a page after the current one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if there is a page before the current one.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }
}

/// The JSON envelope wrapping every response payload.
///
/// `T` is a single resource for "get" endpoints and `Vec<Resource>` for
/// collection endpoints. `pagination` is only present for collections.
///
/// # Example
///
/// ```rust
/// use dnsimple::rest::Envelope;
///
/// let envelope: Envelope<Vec<u32>> = serde_json::from_str(
///     r#"{"data":[1,2],"pagination":{"current_page":1,"per_page":30,"total_entries":2,"total_pages":1}}"#,
/// ).unwrap();
/// assert_eq!(envelope.data, vec![1, 2]);
/// assert_eq!(envelope.pagination.unwrap().total_entries, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    /// The response payload.
    pub data: T,
    /// Pagination metadata for collection endpoints.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// A decoded API response with its transport metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    data: T,
    pagination: Option<Pagination>,
    status: u16,
    headers: HashMap<String, Vec<String>>,
    rate_limit: Option<RateLimit>,
    request_id: Option<String>,
}

impl<T> Response<T> {
    /// Combines a decoded envelope with the metadata of the raw response it
    /// came from.
    #[must_use]
    pub fn from_parts(envelope: Envelope<T>, raw: RawResponse) -> Self {
        let rate_limit = raw.rate_limit();
        let request_id = raw.request_id().map(ToString::to_string);
        Self {
            data: envelope.data,
            pagination: envelope.pagination,
            status: raw.status,
            headers: raw.headers,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the pagination metadata, if the endpoint is a collection.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the response headers (lowercased names).
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Returns the rate limit information, if the API sent it.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_next_page())
    }

    /// Transforms the inner data while keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            pagination: self.pagination,
            status: self.status,
            headers: self.headers,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Response<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_headers(pairs: &[(&str, &str)]) -> RawResponse {
        let headers = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        RawResponse::new(200, headers, Vec::new())
    }

    #[test]
    fn test_envelope_without_pagination() {
        let envelope: Envelope<String> = serde_json::from_str(r#"{"data":"hello"}"#).unwrap();
        assert_eq!(envelope.data, "hello");
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn test_response_deref_to_data() {
        let envelope = Envelope {
            data: vec!["a", "b", "c"],
            pagination: None,
        };
        let response = Response::from_parts(envelope, raw_with_headers(&[]));

        assert_eq!(response.len(), 3);
        assert_eq!(response[0], "a");
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_response_carries_transport_metadata() {
        let envelope = Envelope {
            data: 1_u32,
            pagination: None,
        };
        let raw = raw_with_headers(&[
            ("X-Request-Id", "req-1"),
            ("X-RateLimit-Limit", "2400"),
            ("X-RateLimit-Remaining", "2399"),
            ("X-RateLimit-Reset", "1700000000"),
        ]);
        let response = Response::from_parts(envelope, raw);

        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.rate_limit().unwrap().remaining, 2399);
        assert!(response.headers().contains_key("x-ratelimit-limit"));
    }

    #[test]
    fn test_pagination_navigation() {
        let first = Pagination {
            current_page: 1,
            per_page: 30,
            total_entries: 45,
            total_pages: 2,
        };
        assert!(first.has_next_page());
        assert!(!first.has_prev_page());

        let last = Pagination {
            current_page: 2,
            ..first
        };
        assert!(!last.has_next_page());
        assert!(last.has_prev_page());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let envelope = Envelope {
            data: vec![1, 2, 3],
            pagination: Some(Pagination {
                current_page: 1,
                per_page: 3,
                total_entries: 9,
                total_pages: 3,
            }),
        };
        let response = Response::from_parts(envelope, raw_with_headers(&[]));
        let mapped = response.map(|v| v.len());

        assert_eq!(*mapped, 3);
        assert!(mapped.has_next_page());
    }
}

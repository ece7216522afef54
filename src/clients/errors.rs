//! Error types for DNSimple API calls.
//!
//! Every failed call yields exactly one [`ApiError`]. The variants form a
//! closed taxonomy:
//!
//! - [`ApiError::TransportFailure`]: the network round trip itself failed
//!   (connection, timeout, cancellation, body read)
//! - [`ApiError::DecodeFailure`]: a success response had a malformed body
//! - [`ApiError::Unauthorized`], [`ApiError::NotFound`],
//!   [`ApiError::ValidationFailed`], [`ApiError::RateLimited`],
//!   [`ApiError::ServerError`], [`ApiError::ClientError`],
//!   [`ApiError::UnexpectedStatus`]: classified non-success responses
//! - [`ApiError::InvalidArgument`]: the call was rejected before sending
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::ApiError;
//!
//! match client.certificates().get_certificate("1010", "example.com", 1).await {
//!     Ok(response) => println!("{}", response.common_name),
//!     Err(ApiError::NotFound { .. }) => println!("no such certificate"),
//!     Err(ApiError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(ApiError::RateLimited { reset, .. }) => println!("slow down until {reset:?}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The kind of transport-level failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The connection could not be established.
    Connect,
    /// The request did not complete within the configured timeout.
    Timeout,
    /// The caller canceled the in-flight request.
    Canceled,
    /// The response body could not be read.
    Body,
    /// Any other socket or protocol level failure.
    Other,
}

impl TransportErrorKind {
    /// Derives the kind from a `reqwest` error.
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect
        } else if error.is_body() || error.is_decode() {
            Self::Body
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Timeout => write!(f, "timeout"),
            Self::Canceled => write!(f, "canceled"),
            Self::Body => write!(f, "body"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A call was rejected before any request was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The account identifier was empty.
    #[error("Account identifier cannot be empty.")]
    EmptyAccountId,

    /// A path segment was empty but followed by further segments.
    #[error("Path segment {index} is empty but is followed by further segments.")]
    EmptySegment {
        /// Zero-based position of the empty segment.
        index: usize,
    },

    /// A path identifier was `.` or `..`, which URL parsing would collapse.
    #[error("Path identifier '{segment}' is not allowed: '.' and '..' would change the request path.")]
    DotSegment {
        /// The rejected identifier.
        segment: String,
    },

    /// A pagination option was set to zero.
    #[error("Option '{name}' must be greater than 0 when set.")]
    NonPositive {
        /// The option name (`page` or `per_page`).
        name: &'static str,
    },

    /// `per_page` exceeds the documented maximum.
    #[error("Option 'per_page' is {value}, which exceeds the maximum of {max}.")]
    PerPageTooLarge {
        /// The requested page size.
        value: u32,
        /// The maximum page size.
        max: u32,
    },

    /// A filter was given an empty name.
    #[error("Filter names cannot be empty.")]
    EmptyFilterName,

    /// A query string could not be parsed back into options.
    #[error("Malformed query string: {reason}")]
    MalformedQuery {
        /// What was wrong with the query string.
        reason: String,
    },

    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("Request body could not be serialized: {reason}")]
    BodySerialization {
        /// The serializer's error message.
        reason: String,
    },
}

/// The error returned by every DNSimple API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network round trip failed.
    #[error("Transport failure ({kind}): {message}")]
    TransportFailure {
        /// What kind of failure occurred.
        kind: TransportErrorKind,
        /// Human readable description.
        message: String,
        /// The underlying HTTP client error, if any.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A success response carried a body that is not a valid envelope.
    #[error("Failed to decode response body (status {status}): {message}")]
    DecodeFailure {
        /// The HTTP status code of the response.
        status: u16,
        /// The decoder's error message.
        message: String,
        /// The first bytes of the body, for diagnostics.
        body_snippet: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Authentication failed (HTTP 401).
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// The message returned by the API.
        message: String,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound {
        /// The message returned by the API.
        message: String,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The API rejected the input (HTTP 422).
    #[error("{message}: {errors:?}")]
    ValidationFailed {
        /// The top-level message returned by the API.
        message: String,
        /// Attribute name to the full list of messages for that attribute.
        errors: HashMap<String, Vec<String>>,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The rate limit was exceeded (HTTP 429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// The message returned by the API.
        message: String,
        /// Epoch seconds at which the limit resets (from X-RateLimit-Reset).
        reset: Option<i64>,
        /// Seconds to wait before retrying (from Retry-After).
        retry_after: Option<u64>,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The API failed internally (HTTP 5xx).
    #[error("Server error {status}: {message}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The message returned by the API.
        message: String,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// Any other 4xx response.
    #[error("Client error {status}: {message}")]
    ClientError {
        /// The HTTP status code.
        status: u16,
        /// The message returned by the API.
        message: String,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// A status outside the success set that is neither 4xx nor 5xx.
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
        /// The raw message.
        message: String,
        /// The request ID (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// The call was rejected before sending.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
}

impl ApiError {
    /// Builds a transport failure from a `reqwest` error.
    #[must_use]
    pub fn transport(error: reqwest::Error) -> Self {
        Self::TransportFailure {
            kind: TransportErrorKind::from_reqwest(&error),
            message: error.to_string(),
            source: Some(error),
        }
    }

    /// Builds the transport failure reported for a canceled request.
    #[must_use]
    pub fn canceled() -> Self {
        Self::TransportFailure {
            kind: TransportErrorKind::Canceled,
            message: "request was canceled before completion".to_string(),
            source: None,
        }
    }

    /// Returns the HTTP status code this error was derived from, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::DecodeFailure { status, .. }
            | Self::ServerError { status, .. }
            | Self::ClientError { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::RateLimited { .. } => Some(429),
            Self::TransportFailure { .. } | Self::InvalidArgument(_) => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { request_id, .. }
            | Self::NotFound { request_id, .. }
            | Self::ValidationFailed { request_id, .. }
            | Self::RateLimited { request_id, .. }
            | Self::ServerError { request_id, .. }
            | Self::ClientError { request_id, .. }
            | Self::UnexpectedStatus { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the transport failure kind, if this is a transport failure.
    #[must_use]
    pub const fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::TransportFailure { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if the request was canceled by the caller.
    #[must_use]
    pub const fn is_canceled(&self) -> bool {
        matches!(
            self.transport_kind(),
            Some(TransportErrorKind::Canceled)
        )
    }

    /// Returns the per-attribute validation messages, if this is a
    /// validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            Self::ValidationFailed { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Returns the instant at which a rate limit resets, if known.
    #[must_use]
    pub fn rate_limit_reset_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::RateLimited {
                reset: Some(reset), ..
            } => DateTime::from_timestamp(*reset, 0),
            _ => None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

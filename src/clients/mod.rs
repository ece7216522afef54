//! HTTP pipeline for DNSimple API communication.
//!
//! This module holds the layers every API call goes through, leaf first:
//!
//! - [`HttpRequest`] / [`HttpMethod`]: a request to send
//! - [`HttpClient`]: the transport, one network round trip per call
//! - [`RawResponse`] / [`RateLimit`]: what the transport returns
//! - [`decode`]: success bodies into typed envelopes
//! - [`classify`]: everything else into [`ApiError`]
//! - [`rest::RestClient`]: the pipeline composed behind `get`/`post`/...
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::clients::{decode, HttpClient, HttpMethod, HttpRequest};
//!
//! let transport = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "whoami").build()?;
//!
//! let raw = transport.execute(&request).await?;
//! let whoami = decode::<serde_json::Value>(raw)?;
//! ```
//!
//! # Retries
//!
//! Nothing in this module retries. A 429 surfaces as
//! [`ApiError::RateLimited`] with the reset time attached; retry policy is
//! left to the caller.

mod classify;
mod decode;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use classify::classify;
pub use decode::{decode, decode_envelope, BODY_SNIPPET_LEN, SUCCESS_STATUSES};
pub use errors::{ApiError, InvalidArgumentError, TransportErrorKind};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{RateLimit, RawResponse};

pub use rest::RestClient;

//! # DNSimple API Rust client
//!
//! A typed client for the DNSimple v2 API (domains, DNS records,
//! certificates, billing).
//!
//! ## Overview
//!
//! Every endpoint goes through one shared pipeline:
//!
//! - [`rest::build_path`] builds an escaped, account-rooted path
//! - [`rest::encode_options`] turns [`rest::ListOptions`] into a query string
//! - [`HttpClient`] performs a single network round trip
//! - [`clients::decode`] decodes the `{"data": ..., "pagination": ...}` envelope
//! - [`clients::classify`] maps failures onto [`ApiError`]
//!
//! [`RestClient`] composes these behind `get`/`post`/`put`/`patch`/`delete`,
//! and resource services such as [`rest::resources::CertificatesService`]
//! sit on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use dnsimple::{AccessToken, BaseUrl, DnsimpleConfig, RestClient};
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .base_url(BaseUrl::sandbox())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use dnsimple::rest::ListOptions;
//!
//! let certificates = client
//!     .certificates()
//!     .list_certificates("1010", "example.com", Some(&ListOptions::new().per_page(50)))
//!     .await?;
//!
//! if let Some(pagination) = certificates.pagination() {
//!     println!("{} certificates in total", pagination.total_entries);
//! }
//! ```
//!
//! ## Errors
//!
//! Every failed call returns exactly one [`ApiError`]; validation errors keep
//! the full per-attribute message lists and rate-limit errors carry the reset
//! time. Nothing retries automatically.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed explicitly to each client
//! - **Fail-fast validation**: paths, options and newtypes validate before sending
//! - **Thread-safe**: clients are `Send + Sync` and hold no mutable state
//! - **Async-first**: built on Tokio and reqwest

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiVersion, BaseUrl, DnsimpleConfig, DnsimpleConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP pipeline types
pub use clients::{
    ApiError, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, InvalidArgumentError,
    RateLimit, RawResponse, RestClient, TransportErrorKind,
};

// Re-export response types
pub use rest::{Envelope, ListOptions, Pagination, Response};

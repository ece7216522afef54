//! Resource-level building blocks for the DNSimple REST API.
//!
//! - [`build_path`], [`domain_path`], [`certificate_path`], [`versioned`]:
//!   account-rooted, escaped resource paths
//! - [`ListOptions`], [`encode_options`], [`decode_options`]: query options
//!   for collection endpoints
//! - [`Envelope`], [`Pagination`], [`Response`]: typed response shapes
//! - [`resources`]: resource services (e.g., certificates)
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::{build_path, ListOptions};
//!
//! let path = build_path("1010", &["domains", "example.com", "records", ""])?;
//! let records = client
//!     .get::<Vec<serde_json::Value>>(&path, Some(&ListOptions::new().filter("type", "A")))
//!     .await?;
//! ```

mod path;
mod query;
mod response;

pub mod resources;

pub use path::{build_path, certificate_path, domain_path, versioned};
pub use query::{decode_options, encode_options, ListOptions, MAX_PER_PAGE};
pub use response::{Envelope, Pagination, Response};

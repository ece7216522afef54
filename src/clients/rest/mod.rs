//! REST API client for DNSimple.
//!
//! [`RestClient`] sits on top of the [`HttpClient`](crate::clients::HttpClient)
//! transport and runs every call through the same pipeline:
//!
//! 1. the resource layer builds a path with [`build_path`](crate::rest::build_path)
//! 2. optional [`ListOptions`](crate::rest::ListOptions) are encoded
//! 3. the transport performs one round trip
//! 4. the response is decoded into a [`Response<T>`](crate::rest::Response),
//!    or classified into an [`ApiError`](crate::clients::ApiError)
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::{AccessToken, DnsimpleConfig, RestClient};
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = RestClient::new(&config)?;
//!
//! let whoami = client.get::<serde_json::Value>("whoami", None).await?;
//! println!("{}", *whoami);
//! ```

mod client;

pub use client::RestClient;

//! REST client for the DNSimple API.
//!
//! This module provides the [`RestClient`] type: the request pipeline every
//! resource service goes through (query encoding, transport, decoding).

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::decode::decode;
use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest, InvalidArgumentError};
use crate::config::{ApiVersion, DnsimpleConfig};
use crate::error::ConfigError;
use crate::rest::{encode_options, ListOptions, Response};

/// REST API client for DNSimple.
///
/// Provides `get`, `post`, `put`, `patch` and `delete` over account-relative
/// paths (see [`build_path`](crate::rest::build_path)). Each call returns
/// either a decoded [`Response<T>`] or exactly one [`ApiError`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Share it (e.g., in an `Arc`) across tasks;
/// calls never share mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use dnsimple::{AccessToken, DnsimpleConfig, RestClient};
/// use dnsimple::rest::{build_path, ListOptions};
///
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = RestClient::new(&config)?;
///
/// let path = build_path("1010", &["domains"])?;
/// let domains = client
///     .get::<Vec<serde_json::Value>>(&path, Some(&ListOptions::new().per_page(50)))
///     .await?;
/// println!("{} domains", domains.len());
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: &DnsimpleConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(
            base_url = http_client.base_url(),
            api_version = %http_client.api_version(),
            "created DNSimple REST client"
        );
        Ok(Self { http_client })
    }

    /// Wraps an existing transport.
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        self.http_client.api_version()
    }

    /// Sends a GET request, encoding `options` into the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for invalid options, otherwise
    /// any transport, decode or classified error.
    pub async fn get<T>(
        &self,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let query = options.map(encode_options).transpose()?.unwrap_or_default();
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::BodySerialization`] if `body` cannot be
    /// serialized, otherwise any transport, decode or classified error.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send_with_body(HttpMethod::Patch, path, body).await
    }

    /// Sends a DELETE request.
    ///
    /// Most delete endpoints answer 204 with no body; use `T = ()` for those.
    ///
    /// # Errors
    ///
    /// Any transport, decode or classified error.
    pub async fn delete<T>(&self, path: &str) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    /// Sends a prepared request and decodes the response.
    ///
    /// # Errors
    ///
    /// Any transport, decode or classified error.
    pub async fn request<T>(&self, request: HttpRequest) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let raw = self.http_client.execute(&request).await?;
        decode(raw)
    }

    /// Sends a prepared request, aborting it if `cancel` completes first.
    ///
    /// # Errors
    ///
    /// A canceled call yields a `TransportFailure` of kind `Canceled`;
    /// otherwise the same errors as [`request`](Self::request).
    pub async fn request_with_cancel<T, C>(
        &self,
        request: HttpRequest,
        cancel: C,
    ) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
        C: Future<Output = ()> + Send,
    {
        let raw = self
            .http_client
            .execute_with_cancel(&request, cancel)
            .await?;
        decode(raw)
    }

    async fn send_with_body<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Response<T>, ApiError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(|e| {
            InvalidArgumentError::BodySerialization {
                reason: e.to_string(),
            }
        })?;
        let request = HttpRequest::builder(method, path).body(body).build()?;
        self.request(request).await
    }
}

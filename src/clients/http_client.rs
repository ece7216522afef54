//! HTTP transport for DNSimple API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! network round trip per call and returns the raw response. It never
//! retries and never interprets the status code.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::errors::ApiError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::RawResponse;
use crate::config::{ApiVersion, DnsimpleConfig};
use crate::error::ConfigError;
use crate::rest::versioned;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the DNSimple API.
///
/// The client holds the connection pool and the read-only settings derived
/// from [`DnsimpleConfig`]:
/// - Base URL and API version prefix
/// - Default headers (User-Agent, Accept, Authorization)
/// - Request timeout
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so one instance
/// can serve any number of concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use dnsimple::{AccessToken, DnsimpleConfig};
/// use dnsimple::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = DnsimpleConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "whoami").build()?;
/// let raw = client.execute(&request).await?;
/// println!("status {}", raw.status);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.dnsimple.com`).
    base_url: String,
    /// API version applied to every path.
    api_version: ApiVersion,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying HTTP client
    /// cannot be initialized (e.g., TLS backend failure).
    pub fn new(config: &DnsimpleConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} "));
        let user_agent = format!("{user_agent_prefix}dnsimple-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.access_token().as_ref()),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            api_version: config.api_version().clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API version applied to every path.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for a request: base URL, version prefix, path and
    /// query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let mut url = format!(
            "{}{}",
            self.base_url,
            versioned(&self.api_version, &request.path)
        );
        if !request.query.is_empty() {
            url.push('?');
            url.push_str(&request.query);
        }
        url
    }

    /// Sends a request and returns the raw response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful transport
    /// result; classification happens in the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if the request fails validation,
    /// or [`ApiError::TransportFailure`] if the connection fails, the request
    /// times out, or the body cannot be read.
    pub async fn execute(&self, request: &HttpRequest) -> Result<RawResponse, ApiError> {
        request.verify()?;

        let url = self.url_for(request);
        tracing::debug!(method = %request.http_method, path = %request.path, "sending DNSimple API request");

        let mut req_builder = self.client.request(request.http_method.as_reqwest(), &url);

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if request.body.is_some() {
            req_builder = req_builder.header("Content-Type", "application/json");
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await.map_err(ApiError::transport)?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await.map_err(ApiError::transport)?.to_vec();

        tracing::debug!(status, path = %request.path, "received DNSimple API response");

        Ok(RawResponse::new(status, headers, body))
    }

    /// Sends a request, aborting it if `cancel` completes first.
    ///
    /// Dropping the in-flight request future closes its connection.
    ///
    /// # Errors
    ///
    /// Returns a [`ApiError::TransportFailure`] with kind
    /// [`Canceled`](crate::clients::TransportErrorKind::Canceled) when
    /// canceled, otherwise the same errors as [`execute`](Self::execute).
    pub async fn execute_with_cancel<C>(
        &self,
        request: &HttpRequest,
        cancel: C,
    ) -> Result<RawResponse, ApiError>
    where
        C: Future<Output = ()> + Send,
    {
        tokio::select! {
            biased;
            () = cancel => {
                tracing::debug!(path = %request.path, "DNSimple API request canceled");
                Err(ApiError::canceled())
            }
            result = self.execute(request) => result,
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

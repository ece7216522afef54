//! Configuration types for the DNSimple API client.
//!
//! Configuration is an explicit value passed to the client at construction.
//! There is no process-wide state, so independent clients (for example one
//! against production and one against the sandbox) never interfere.
//!
//! - [`DnsimpleConfig`]: the immutable client settings
//! - [`DnsimpleConfigBuilder`]: builder for [`DnsimpleConfig`]
//! - [`AccessToken`]: validated bearer token with masked debug output
//! - [`BaseUrl`]: validated API base URL
//! - [`ApiVersion`]: the API version path segment
//!
//! # Example
//!
//! ```rust
//! use dnsimple::{AccessToken, BaseUrl, DnsimpleConfig};
//! use std::time::Duration;
//!
//! let config = DnsimpleConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .base_url(BaseUrl::sandbox())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.sandbox.dnsimple.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the DNSimple API client.
///
/// `DnsimpleConfig` is `Clone`, `Send`, and `Sync`; it is read-only once built.
#[derive(Clone, Debug)]
pub struct DnsimpleConfig {
    access_token: AccessToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DnsimpleConfig {
    /// Creates a new builder for constructing a `DnsimpleConfig`.
    #[must_use]
    pub fn builder() -> DnsimpleConfigBuilder {
        DnsimpleConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DnsimpleConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DnsimpleConfig>();
};

/// Builder for constructing [`DnsimpleConfig`] instances.
///
/// `access_token` is required. Defaults:
///
/// - `base_url`: [`BaseUrl::production()`]
/// - `api_version`: [`ApiVersion::V2`]
/// - `timeout`: `None` (no client-side deadline)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DnsimpleConfigBuilder {
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DnsimpleConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the per-request timeout.
    ///
    /// A request that does not complete within this duration fails with a
    /// `Timeout` transport error.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DnsimpleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<DnsimpleConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(DnsimpleConfig {
            access_token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_access_token() {
        let result = DnsimpleConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = DnsimpleConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &BaseUrl::production());
        assert_eq!(config.api_version(), &ApiVersion::V2);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = DnsimpleConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .base_url(BaseUrl::sandbox())
            .api_version(ApiVersion::Custom("v3".to_string()))
            .timeout(Duration::from_millis(1500))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), &BaseUrl::sandbox());
        assert_eq!(config.api_version().as_segment(), "v3");
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = DnsimpleConfig::builder()
            .access_token(AccessToken::new("very-secret-token").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("DnsimpleConfig"));
        assert!(!debug_str.contains("very-secret-token"));
    }
}

//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction, so an invalid
//! token or URL is rejected before a client is ever built.

use crate::error::ConfigError;
use std::fmt;

/// A DNSimple API access token.
///
/// The token is obtained externally (OAuth or the account settings page) and
/// sent as a bearer token on every request. The `Debug` implementation masks
/// its value to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use dnsimple::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// whitespace only.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and have a non-empty host.
/// Trailing slashes are stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use dnsimple::BaseUrl;
///
/// let url = BaseUrl::new("https://api.dnsimple.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.dnsimple.com");
///
/// assert!(BaseUrl::new("api.dnsimple.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Production API endpoint.
    pub const PRODUCTION: &'static str = "https://api.dnsimple.com";
    /// Sandbox API endpoint.
    pub const SANDBOX: &'static str = "https://api.sandbox.dnsimple.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not `http` or
    /// `https`, or if the host part is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Returns the production API base URL.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }

    /// Returns the sandbox API base URL.
    #[must_use]
    pub fn sandbox() -> Self {
        Self(Self::SANDBOX.to_string())
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! DNSimple API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// DNSimple API version.
///
/// The version is a single path segment applied uniformly to every request
/// path by the transport (for example `/v2/whoami`).
///
/// # Example
///
/// ```rust
/// use dnsimple::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// assert_eq!(version.to_string(), "v2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2, the current stable version.
    #[default]
    V2,
    /// Custom version segment for unreleased or future versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version as a path segment (without slashes).
    #[must_use]
    pub fn as_segment(&self) -> &str {
        match self {
            Self::V2 => "v2",
            Self::Custom(version) => version,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/');
        // Empty and dot-only versions would collapse the `/{version}/` prefix.
        let dot_only = s.chars().all(|c| c == '.');
        if dot_only || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-') {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }
        match s {
            "v2" => Ok(Self::V2),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}

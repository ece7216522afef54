//! Certificate resource.
//!
//! SSL certificates belong to a domain. The API exposes them at
//! `/v2/{account}/domains/{domain}/certificates[/{id}]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnsimple::rest::ListOptions;
//!
//! let certificates = client
//!     .certificates()
//!     .list_certificates("1010", "example.com", Some(&ListOptions::new().sort("expiration:asc")))
//!     .await?;
//!
//! for certificate in certificates.iter() {
//!     println!("{} ({})", certificate.common_name, certificate.state);
//! }
//!
//! let certificate = client.certificates().get_certificate("1010", "example.com", 101967).await?;
//! println!("expires on {:?}", certificate.expires_on);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ApiError, RestClient};
use crate::rest::{certificate_path, ListOptions, Response};

/// An SSL certificate issued for a domain.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Certificate {
    /// The certificate ID.
    #[serde(default)]
    pub id: u64,
    /// The ID of the domain the certificate belongs to.
    #[serde(default)]
    pub domain_id: u64,
    /// The fully qualified name the certificate is issued for.
    #[serde(default)]
    pub common_name: String,
    /// Validity period in years.
    #[serde(default)]
    pub years: u32,
    /// Lifecycle state (e.g., `new`, `purchased`, `issued`, `cancelled`).
    #[serde(default)]
    pub state: String,
    /// The issuing authority (e.g., `letsencrypt`).
    #[serde(default)]
    pub authority_identifier: String,
    /// The certificate signing request.
    #[serde(default, rename = "csr", skip_serializing_if = "Option::is_none")]
    pub certificate_request: Option<String>,
    /// When the certificate was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the certificate was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// The day the certificate expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
}

/// Certificate endpoints.
///
/// Obtained from [`RestClient::certificates`].
#[derive(Debug, Clone, Copy)]
pub struct CertificatesService<'a> {
    client: &'a RestClient,
}

impl RestClient {
    /// Returns the certificate endpoints.
    #[must_use]
    pub const fn certificates(&self) -> CertificatesService<'_> {
        CertificatesService { client: self }
    }
}

impl CertificatesService<'_> {
    /// Lists the certificates of a domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for an empty account or domain or
    /// invalid options, otherwise any transport, decode or classified error.
    pub async fn list_certificates(
        &self,
        account_id: &str,
        domain: &str,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<Certificate>>, ApiError> {
        let path = certificate_path(account_id, domain, "")?;
        self.client.get(&path, options).await
    }

    /// Fetches a single certificate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the certificate does not exist, plus
    /// the errors of [`list_certificates`](Self::list_certificates).
    pub async fn get_certificate(
        &self,
        account_id: &str,
        domain: &str,
        certificate_id: u64,
    ) -> Result<Response<Certificate>, ApiError> {
        let path = certificate_path(account_id, domain, &certificate_id.to_string())?;
        self.client.get(&path, None).await
    }
}

//! Resource services built on the shared request pipeline.
//!
//! Each service is a thin consumer of [`RestClient`](crate::clients::RestClient):
//! it builds a path, optionally passes list options, and names the type the
//! `data` member decodes into.
//!
//! ```rust,ignore
//! let certificates = client
//!     .certificates()
//!     .list_certificates("1010", "example.com", None)
//!     .await?;
//! ```

mod certificates;

pub use certificates::{Certificate, CertificatesService};

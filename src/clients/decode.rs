//! Decoding of raw responses into typed envelopes.
//!
//! Only statuses in the success set (200, 201, 204) are decoded into `T`.
//! Everything else goes to [`classify`](crate::clients::classify) and is
//! never decoded into the caller's type.

use serde::de::DeserializeOwned;

use crate::clients::classify::classify;
use crate::clients::errors::ApiError;
use crate::clients::http_response::RawResponse;
use crate::rest::{Envelope, Response};

/// Status codes treated as success.
pub const SUCCESS_STATUSES: [u16; 3] = [200, 201, 204];

/// Maximum number of body bytes kept in a [`ApiError::DecodeFailure`].
pub const BODY_SNIPPET_LEN: usize = 256;

/// Decodes the body of a raw response into an [`Envelope<T>`].
///
/// A 204 with a blank body yields `T::default()` and no pagination.
///
/// # Errors
///
/// Returns [`ApiError::DecodeFailure`] if a success body is not a valid
/// envelope, or the classified error for any other status.
pub fn decode_envelope<T>(raw: &RawResponse) -> Result<Envelope<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !raw.is_success() {
        return Err(classify(raw));
    }

    if raw.status == 204 && raw.body_is_blank() {
        return Ok(Envelope::default());
    }

    serde_json::from_slice::<Envelope<T>>(&raw.body).map_err(|source| {
        tracing::debug!(status = raw.status, error = %source, "failed to decode DNSimple response body");
        ApiError::DecodeFailure {
            status: raw.status,
            message: source.to_string(),
            body_snippet: body_snippet(&raw.body),
            source,
        }
    })
}

/// Decodes a raw response into a [`Response<T>`], keeping its metadata.
///
/// # Errors
///
/// Same as [`decode_envelope`].
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::{decode, RawResponse};
/// use std::collections::HashMap;
///
/// let raw = RawResponse::new(204, HashMap::new(), Vec::new());
/// let response = decode::<Vec<String>>(raw).unwrap();
/// assert!(response.is_empty());
/// assert!(response.pagination().is_none());
/// ```
pub fn decode<T>(raw: RawResponse) -> Result<Response<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    let envelope = decode_envelope(&raw)?;
    Ok(Response::from_parts(envelope, raw))
}

fn body_snippet(body: &[u8]) -> String {
    let end = body.len().min(BODY_SNIPPET_LEN);
    String::from_utf8_lossy(body.get(..end).unwrap_or_default()).into_owned()
}

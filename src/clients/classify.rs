//! Classification of non-success responses into [`ApiError`] variants.
//!
//! The status code alone decides the variant:
//!
//! | Status | Variant |
//! |---|---|
//! | 401 | [`ApiError::Unauthorized`] |
//! | 404 | [`ApiError::NotFound`] |
//! | 422 | [`ApiError::ValidationFailed`] |
//! | 429 | [`ApiError::RateLimited`] |
//! | 5xx | [`ApiError::ServerError`] |
//! | other 4xx | [`ApiError::ClientError`] |
//! | anything else | [`ApiError::UnexpectedStatus`] |
//!
//! The body only fills in the message and field errors. A body that cannot
//! be parsed never changes the variant.

use std::collections::HashMap;

use crate::clients::errors::ApiError;
use crate::clients::http_response::RawResponse;

/// The fields of an API error body.
#[derive(Debug)]
struct ErrorBody {
    message: Option<String>,
    errors: Option<serde_json::Value>,
}

/// Maps a non-success response to its [`ApiError`].
///
/// # Example
///
/// ```rust
/// use dnsimple::clients::{classify, RawResponse};
/// use dnsimple::ApiError;
/// use std::collections::HashMap;
///
/// let body = br#"{"message":"Validation failed","errors":{"name":["can't be blank"]}}"#;
/// let raw = RawResponse::new(422, HashMap::new(), body.to_vec());
///
/// match classify(&raw) {
///     ApiError::ValidationFailed { errors, .. } => {
///         assert_eq!(errors["name"], vec!["can't be blank".to_string()]);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[must_use]
pub fn classify(raw: &RawResponse) -> ApiError {
    let status = raw.status;
    let request_id = raw.request_id().map(ToString::to_string);

    let parsed = parse_error_body(raw);
    let message = parsed
        .as_ref()
        .and_then(|body| body.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(raw, parsed.is_some()));

    match status {
        401 => ApiError::Unauthorized {
            message,
            request_id,
        },
        404 => ApiError::NotFound {
            message,
            request_id,
        },
        422 => ApiError::ValidationFailed {
            message,
            errors: parsed
                .as_ref()
                .and_then(|body| body.errors.as_ref())
                .map(parse_validation_errors)
                .unwrap_or_default(),
            request_id,
        },
        429 => {
            let reset = raw.rate_limit_reset();
            tracing::warn!(reset = ?reset, "DNSimple API rate limit exceeded");
            ApiError::RateLimited {
                message,
                reset,
                retry_after: raw.retry_after(),
                request_id,
            }
        }
        500..=599 => ApiError::ServerError {
            status,
            message,
            request_id,
        },
        400..=499 => ApiError::ClientError {
            status,
            message,
            request_id,
        },
        _ => ApiError::UnexpectedStatus {
            status,
            message,
            request_id,
        },
    }
}

fn parse_error_body(raw: &RawResponse) -> Option<ErrorBody> {
    if raw.body_is_blank() {
        return None;
    }
    match serde_json::from_slice::<serde_json::Value>(&raw.body) {
        Ok(serde_json::Value::Object(mut map)) => Some(ErrorBody {
            message: map
                .remove("message")
                .and_then(|m| m.as_str().map(ToString::to_string)),
            errors: map.remove("errors"),
        }),
        Ok(other) => {
            tracing::debug!(status = raw.status, body = %other, "DNSimple error body is not a JSON object");
            None
        }
        Err(e) => {
            tracing::debug!(status = raw.status, error = %e, "could not parse DNSimple error body");
            None
        }
    }
}

/// Message used when the body carries no usable `message`.
fn fallback_message(raw: &RawResponse, body_parsed: bool) -> String {
    let reason = reqwest::StatusCode::from_u16(raw.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status");

    if body_parsed || raw.body_is_blank() {
        format!("HTTP {} {reason}", raw.status)
    } else {
        format!(
            "HTTP {} {reason} (unparseable error body, {} bytes)",
            raw.status,
            raw.body.len()
        )
    }
}

/// Collects per-attribute validation messages.
///
/// DNSimple returns `{"errors": {"name": ["can't be blank"]}}`. Array and
/// string shapes are collected under `base`.
fn parse_validation_errors(errors: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match errors {
        serde_json::Value::Object(map) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Null => continue,
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter(|v| !v.is_null())
                        .map(|v| {
                            v.as_str()
                                .map_or_else(|| v.to_string(), ToString::to_string)
                        })
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => vec![messages.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        serde_json::Value::Array(arr) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        serde_json::Value::String(s) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

//! Query option encoding for collection endpoints.
//!
//! [`ListOptions`] holds the pagination, sorting and filter settings a list
//! call accepts. [`encode_options`] turns it into a query string, emitting
//! only the options that are set, sorted by key so identical options always
//! produce identical URLs.
//!
//! `per_page` is checked against [`MAX_PER_PAGE`] before sending; the API
//! would otherwise clamp it silently.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::rest::{encode_options, ListOptions};
//!
//! let options = ListOptions::new()
//!     .page(2)
//!     .per_page(50)
//!     .sort("expiration:asc")
//!     .filter("name_like", "example");
//!
//! assert_eq!(
//!     encode_options(&options).unwrap(),
//!     "filter[name_like]=example&page=2&per_page=50&sort=expiration%3Aasc"
//! );
//! assert_eq!(encode_options(&ListOptions::default()).unwrap(), "");
//! ```

use std::collections::BTreeMap;

use crate::clients::InvalidArgumentError;

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 100;

const FILTER_PREFIX: &str = "filter[";
const FILTER_SUFFIX: &str = "]";

/// Options for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to fetch (1-based).
    pub page: Option<u32>,
    /// Entries per page, at most [`MAX_PER_PAGE`].
    pub per_page: Option<u32>,
    /// Sort expression (e.g., `id:asc,name:desc`).
    pub sort: Option<String>,
    /// Named filters, emitted as `filter[name]=value`.
    pub filters: BTreeMap<String, String>,
}

impl ListOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort expression.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.per_page.is_none()
            && self.sort.as_deref().map_or(true, str::is_empty)
            && self.filters.is_empty()
    }

    /// Validates the options and returns them as sorted key/value pairs
    /// (unescaped).
    ///
    /// # Errors
    ///
    /// See [`encode_options`].
    pub fn to_pairs(&self) -> Result<BTreeMap<String, String>, InvalidArgumentError> {
        let mut pairs = BTreeMap::new();

        if let Some(page) = self.page {
            if page == 0 {
                return Err(InvalidArgumentError::NonPositive { name: "page" });
            }
            pairs.insert("page".to_string(), page.to_string());
        }

        if let Some(per_page) = self.per_page {
            if per_page == 0 {
                return Err(InvalidArgumentError::NonPositive { name: "per_page" });
            }
            if per_page > MAX_PER_PAGE {
                return Err(InvalidArgumentError::PerPageTooLarge {
                    value: per_page,
                    max: MAX_PER_PAGE,
                });
            }
            pairs.insert("per_page".to_string(), per_page.to_string());
        }

        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            pairs.insert("sort".to_string(), sort.to_string());
        }

        for (name, value) in &self.filters {
            if name.is_empty() {
                return Err(InvalidArgumentError::EmptyFilterName);
            }
            pairs.insert(format!("{FILTER_PREFIX}{name}{FILTER_SUFFIX}"), value.clone());
        }

        Ok(pairs)
    }
}

/// Encodes list options as a query string (without the leading `?`).
///
/// Unset options are omitted; the empty default encodes to `""`.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::NonPositive`] if `page` or `per_page` is
/// zero, [`InvalidArgumentError::PerPageTooLarge`] if `per_page` exceeds
/// [`MAX_PER_PAGE`], and [`InvalidArgumentError::EmptyFilterName`] for a
/// filter with an empty name.
pub fn encode_options(options: &ListOptions) -> Result<String, InvalidArgumentError> {
    let pairs = options.to_pairs()?;

    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_key(key), urlencoding::encode(value)))
        .collect();

    Ok(encoded.join("&"))
}

/// Parses a query string produced by [`encode_options`] back into options.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::MalformedQuery`] for unknown keys,
/// missing `=`, invalid escapes or non-numeric pagination values, and the
/// validation errors of [`encode_options`] for out-of-range values.
pub fn decode_options(query: &str) -> Result<ListOptions, InvalidArgumentError> {
    let mut options = ListOptions::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) =
            pair.split_once('=')
                .ok_or_else(|| InvalidArgumentError::MalformedQuery {
                    reason: format!("missing '=' in '{pair}'"),
                })?;
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;

        match key.as_str() {
            "page" => options.page = Some(parse_number(&key, &value)?),
            "per_page" => options.per_page = Some(parse_number(&key, &value)?),
            "sort" => options.sort = Some(value),
            _ => {
                let name = key
                    .strip_prefix(FILTER_PREFIX)
                    .and_then(|rest| rest.strip_suffix(FILTER_SUFFIX))
                    .ok_or_else(|| InvalidArgumentError::MalformedQuery {
                        reason: format!("unknown option '{key}'"),
                    })?;
                options.filters.insert(name.to_string(), value);
            }
        }
    }

    options.to_pairs()?;
    Ok(options)
}

/// Escapes a key, keeping the `filter[...]` brackets literal.
fn encode_key(key: &str) -> String {
    key.strip_prefix(FILTER_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILTER_SUFFIX))
        .map_or_else(
            || urlencoding::encode(key).into_owned(),
            |name| format!("{FILTER_PREFIX}{}{FILTER_SUFFIX}", urlencoding::encode(name)),
        )
}

fn decode_component(raw: &str) -> Result<String, InvalidArgumentError> {
    urlencoding::decode(raw)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| InvalidArgumentError::MalformedQuery {
            reason: format!("invalid escape in '{raw}': {e}"),
        })
}

fn parse_number(key: &str, value: &str) -> Result<u32, InvalidArgumentError> {
    value
        .parse()
        .map_err(|_| InvalidArgumentError::MalformedQuery {
            reason: format!("'{key}' must be a positive integer, got '{value}'"),
        })
}

//! Ambient browser state captured as plain data.
//!
//! The host adapter snapshots the document title and navigation URL once per
//! event and hands them in here, so every downstream function stays testable
//! without a live browser.

use indexmap::IndexMap;

use crate::types::{QueryKey, QueryValue};

/// Insertion-ordered query parameters of a URL.
pub type QueryParams = IndexMap<QueryKey, QueryValue>;

/// Immutable snapshot of the host page's navigation context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Document title as reported by the host page.
    pub title: String,
    /// Raw navigation URL, taken verbatim (may use backslash separators when
    /// the viewer is served from a local install).
    pub url: String,
}

impl PageContext {
    /// Capture a context from raw title and URL strings.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Parse this context's query parameters.
    pub fn query_params(&self) -> QueryParams {
        parse_query_params(&self.url)
    }
}

/// Extract query parameters from a raw URL.
///
/// The query is the span between the first `?` and any following `#`. Pairs
/// split at the first `=`; a pair without `=` maps the whole token to an empty
/// value; duplicate keys keep the last occurrence. A URL without `?` yields an
/// empty map. Never fails for any input string.
pub fn parse_query_params(url: &str) -> QueryParams {
    let mut params = QueryParams::new();
    let Some(query_start) = url.find('?') else {
        return params;
    };
    let query = &url[query_start + 1..];
    let query = query.split('#').next().unwrap_or(query);

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => params.insert(key.to_string(), value.to_string()),
            None => params.insert(pair.to_string(), String::new()),
        };
    }
    params
}

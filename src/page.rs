//! Page identity extraction for feedback mail subjects.

use crate::constants::feedback::{
    APOSTROPHE_REPLACEMENT, QUOTE_REPLACEMENT, TITLE_ELLIPSIS, TITLE_KEPT_CHARS, TITLE_MAX_CHARS,
    TITLE_PLACEHOLDER,
};
use crate::context::PageContext;

/// Derived, read-only pair of sanitized title and canonical topic filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageIdentity {
    /// Sanitized document title, capped at [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    /// Topic filename with path and fragment components stripped.
    pub filename: String,
}

impl PageIdentity {
    /// Extract the identity of the page a context points at.
    pub fn from_context(ctx: &PageContext) -> Self {
        Self {
            title: sanitize_title(&ctx.title),
            filename: filename_from_url(&ctx.url),
        }
    }
}

/// Sanitize a document title for use inside a bracketed mail subject.
///
/// Double quotes become `--` and apostrophes `-`; an empty title is replaced
/// with [`TITLE_PLACEHOLDER`]; titles longer than [`TITLE_MAX_CHARS`]
/// characters are cut to [`TITLE_KEPT_CHARS`] plus an ellipsis marker.
/// Idempotent: sanitizing sanitized output changes nothing.
pub fn sanitize_title(raw: &str) -> String {
    let title = raw
        .replace('"', QUOTE_REPLACEMENT)
        .replace('\'', APOSTROPHE_REPLACEMENT);
    if title.is_empty() {
        return TITLE_PLACEHOLDER.to_string();
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        let mut truncated: String = title.chars().take(TITLE_KEPT_CHARS).collect();
        truncated.push_str(TITLE_ELLIPSIS);
        return truncated;
    }
    title
}

/// Extract the topic filename from a raw navigation URL.
///
/// Takes the remainder after the last path separator (backslash or slash,
/// whichever comes last) and cuts it at the first fragment marker. Always
/// returns, possibly with an empty string for separator-terminated URLs.
pub fn filename_from_url(url: &str) -> String {
    let remainder = match url.rfind(['\\', '/']) {
        Some(idx) => &url[idx + 1..],
        None => url,
    };
    remainder
        .split('#')
        .next()
        .unwrap_or(remainder)
        .to_string()
}

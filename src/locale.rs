//! Locale derivation from the host page's URL.
//!
//! Two mechanisms coexist in the viewer: the navigation shell carries the
//! content language in a `lang` query parameter, while statically served help
//! pages encode it as the path segment after `help`. Both degrade to the
//! worldwide sentinel `W1` instead of failing.

use tracing::debug;

use crate::constants::locale::{
    DEFAULT_LOCALE, HELP_PATH_SEGMENT, LANG_QUERY_KEY, WORLDWIDE_PATH_SEGMENT,
};
use crate::context::QueryParams;
use crate::types::LocaleTag;

/// Locale the navigation shell was invoked with, from the `lang` query key.
///
/// Absent or empty values resolve to [`DEFAULT_LOCALE`].
pub fn content_locale(params: &QueryParams) -> LocaleTag {
    match params.get(LANG_QUERY_KEY) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => {
            debug!("no usable '{LANG_QUERY_KEY}' query parameter, using {DEFAULT_LOCALE}");
            DEFAULT_LOCALE.to_string()
        }
    }
}

/// Locale encoded in the URL path, as the segment following `help`.
///
/// The worldwide source publishes under `en`, which maps to [`DEFAULT_LOCALE`];
/// a missing or empty segment resolves to [`DEFAULT_LOCALE`] as well.
pub fn path_locale(url: &str) -> LocaleTag {
    let mut segments = url.split('/');
    let found = segments.any(|segment| segment == HELP_PATH_SEGMENT);
    if !found {
        return DEFAULT_LOCALE.to_string();
    }
    match segments.next() {
        Some(segment) if !segment.is_empty() && segment != WORLDWIDE_PATH_SEGMENT => {
            segment.to_string()
        }
        _ => DEFAULT_LOCALE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::parse_query_params;

    #[test]
    fn content_locale_reads_lang_parameter() {
        let params = parse_query_params("/main.aspx?lang=da-dk&content=topic.htm");
        assert_eq!(content_locale(&params), "da-dk");
    }

    #[test]
    fn content_locale_defaults_when_lang_missing_or_empty() {
        assert_eq!(content_locale(&parse_query_params("/main.aspx")), "W1");
        assert_eq!(
            content_locale(&parse_query_params("/main.aspx?lang=")),
            "W1"
        );
    }

    #[test]
    fn path_locale_takes_segment_after_help() {
        assert_eq!(path_locale("http://host/help/da-dk/topic.htm"), "da-dk");
    }

    #[test]
    fn path_locale_maps_worldwide_segment_to_sentinel() {
        assert_eq!(path_locale("http://host/help/en/topic.htm"), "W1");
    }

    #[test]
    fn path_locale_defaults_without_help_segment() {
        assert_eq!(path_locale("http://host/docs/en/topic.htm"), "W1");
        assert_eq!(path_locale(""), "W1");
    }

    #[test]
    fn path_locale_defaults_when_help_is_last_segment() {
        assert_eq!(path_locale("http://host/help"), "W1");
        assert_eq!(path_locale("http://host/help/"), "W1");
    }
}

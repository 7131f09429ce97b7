/// Constants used by feedback subject/body composition.
pub mod feedback {
    /// Longest sanitized title allowed in a mail subject.
    pub const TITLE_MAX_CHARS: usize = 60;
    /// Characters kept when an over-long title is truncated.
    pub const TITLE_KEPT_CHARS: usize = 57;
    /// Marker appended to truncated titles.
    pub const TITLE_ELLIPSIS: &str = "...";
    /// Substitute title when the document reports none.
    pub const TITLE_PLACEHOLDER: &str = "Documentation Feedback";
    /// Replacement for double quotes in titles (mail subjects choke on them).
    pub const QUOTE_REPLACEMENT: &str = "--";
    /// Replacement for apostrophes in titles.
    pub const APOSTROPHE_REPLACEMENT: &str = "-";
    /// Rating code emitted when no rating is selected.
    pub const RATING_UNSET_CODE: &str = "0";
    /// Suffix appended to the rating code in the subject line.
    pub const RATING_CLASS_SUFFIX: &str = "-Class";
}

/// Constants used by content-frame link classification and rewriting.
pub mod rewrite {
    /// Prefix of hrefs already routed through the navigation shell.
    pub const INTERNAL_NAV_PREFIX: &str = "/main.aspx?lang=";
    /// Query key carrying the routed topic file.
    pub const CONTENT_PARAM: &str = "&content=";
    /// Scheme prefix identifying external links (matched case-insensitively).
    pub const EXTERNAL_SCHEME_PREFIX: &str = "http";
    /// Current-directory prefix stripped from relative topic hrefs.
    pub const CURRENT_DIR_PREFIX: &str = "./";
    /// Navigation target for rewritten internal links.
    pub const PARENT_FRAME_TARGET: &str = "_parent";
    /// Navigation target for external links.
    pub const EXTERNAL_FRAME_TARGET: &str = "_externalContent";
    /// Stylesheet injected into the embedded document head on load.
    pub const INJECTED_STYLESHEET_HREF: &str = "/css/injected.css";
}

/// Constants used by locale derivation.
pub mod locale {
    /// Query key the navigation shell uses to carry the content language.
    pub const LANG_QUERY_KEY: &str = "lang";
    /// Sentinel locale used when no language can be derived.
    pub const DEFAULT_LOCALE: &str = "W1";
    /// URL path segment preceding the locale segment.
    pub const HELP_PATH_SEGMENT: &str = "help";
    /// Path segment published by the worldwide (untranslated) content source.
    pub const WORLDWIDE_PATH_SEGMENT: &str = "en";
}

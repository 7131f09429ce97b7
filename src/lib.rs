#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Static configuration for feedback composition and the widget.
pub mod config;
/// Centralized constants for composition, rewriting, and locale handling.
pub mod constants;
/// Ambient browser state captured as explicit context objects.
pub mod context;
/// Reusable demo runners shared by the `demos/` wrappers.
pub mod example_apps;
/// Feedback mail subject/body/link composition.
pub mod feedback;
/// Frame-load planning and content dimension reporting.
pub mod frame;
/// Locale derivation from query parameters and URL paths.
pub mod locale;
/// Page identity extraction (sanitized title, topic filename).
pub mod page;
/// Link classification and rewrite actions.
pub mod rewrite;
/// Shared type aliases.
pub mod types;
/// Feedback panel markup rendering.
pub mod widget;

mod errors;

pub use config::{FeedbackConfig, RatingTexts, WidgetTexts};
pub use context::{parse_query_params, PageContext, QueryParams};
pub use errors::HelpshellError;
pub use feedback::{
    build_body, build_mail_link, build_subject, compose_feedback, encode_uri_component,
    FeedbackEmail, Rating,
};
pub use frame::{
    content_dimensions, plan_frame_load, FrameLoadPlan, FrameMetrics, FrameSnapshot, LayoutAction,
};
pub use locale::{content_locale, path_locale};
pub use page::{filename_from_url, sanitize_title, PageIdentity};
pub use rewrite::{apply_rewrites, classify, rewrite_links, LinkRecord, RewriteAction};
pub use types::{
    Body, FrameTarget, Href, LocaleTag, MailtoUri, Markup, QueryKey, QueryValue, Subject,
};

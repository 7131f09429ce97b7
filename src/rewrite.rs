//! Content-frame link classification and rewriting.
//!
//! Links inside the embedded documentation frame are partitioned into internal
//! topic references (routed through the parent navigation shell), external
//! references (retargeted to a dedicated browsing context), and everything
//! else (left untouched). Classification is pure and memoryless; the returned
//! action list is applied to real elements by a thin host adapter.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::rewrite::{
    CONTENT_PARAM, CURRENT_DIR_PREFIX, EXTERNAL_FRAME_TARGET, EXTERNAL_SCHEME_PREFIX,
    INTERNAL_NAV_PREFIX, PARENT_FRAME_TARGET,
};
use crate::types::{FrameTarget, Href, LocaleTag};

/// Relative topic reference: optional `./`, a run of word characters, `.htm`.
///
/// Matched by containment, not anchored: hyphenated topic names such as
/// `sales-orders.htm` qualify through their `orders.htm` tail.
static TOPIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\./)?[A-Za-z0-9_]+\.htm").expect("invalid topic pattern")
});

/// Transient view over one anchor element inside the embedded frame.
///
/// The element itself stays owned by the frame's document; records only carry
/// the attributes classification needs. A missing `href` is representable and
/// classifies as a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// `href` attribute, when present.
    pub href: Option<Href>,
    /// `target` attribute, when present.
    pub target: Option<FrameTarget>,
}

impl LinkRecord {
    /// Record for an anchor carrying an `href`.
    pub fn with_href(href: impl Into<Href>) -> Self {
        Self {
            href: Some(href.into()),
            target: None,
        }
    }

    /// Record for an anchor with no `href` attribute.
    pub fn bare() -> Self {
        Self::default()
    }
}

/// Intended mutation for one link, produced by classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewriteAction {
    /// Leave the element untouched.
    NoOp,
    /// Route an internal topic link through the parent navigation shell.
    RewriteInternal {
        /// Replacement `href` pointing at the shell.
        href: Href,
        /// Replacement navigation target (the parent frame).
        target: FrameTarget,
    },
    /// Send an external link into the dedicated external browsing context,
    /// leaving its `href` unchanged.
    RewriteExternal {
        /// Replacement navigation target.
        target: FrameTarget,
    },
}

impl RewriteAction {
    /// Apply this action to a link record (the adapter side of the split).
    pub fn apply(&self, link: &mut LinkRecord) {
        match self {
            RewriteAction::NoOp => {}
            RewriteAction::RewriteInternal { href, target } => {
                link.href = Some(href.clone());
                link.target = Some(target.clone());
            }
            RewriteAction::RewriteExternal { target } => {
                link.target = Some(target.clone());
            }
        }
    }
}

/// Classify one link against the current locale.
///
/// Total over all inputs: external links (href begins with `http`, any case)
/// are retargeted regardless of the topic pattern; internal candidates already
/// carrying the shell prefix are skipped; remaining candidates are rewritten;
/// everything else, including a missing href, is a no-op. Never panics for any
/// input string.
pub fn classify(link: &LinkRecord, locale: &LocaleTag) -> RewriteAction {
    let Some(href) = link.href.as_deref() else {
        return RewriteAction::NoOp;
    };

    if href.to_lowercase().starts_with(EXTERNAL_SCHEME_PREFIX) {
        return RewriteAction::RewriteExternal {
            target: EXTERNAL_FRAME_TARGET.to_string(),
        };
    }

    if !TOPIC_PATTERN.is_match(href) {
        return RewriteAction::NoOp;
    }
    if href.starts_with(INTERNAL_NAV_PREFIX) {
        debug!("href already routed, skipping: {href}");
        return RewriteAction::NoOp;
    }

    let stripped = href.replacen(CURRENT_DIR_PREFIX, "", 1);
    RewriteAction::RewriteInternal {
        href: format!("{INTERNAL_NAV_PREFIX}{locale}{CONTENT_PARAM}{stripped}"),
        target: PARENT_FRAME_TARGET.to_string(),
    }
}

/// Classify every link in a frame, deriving nothing per-link beyond its href.
///
/// The locale is resolved once by the caller and reused for the whole
/// invocation.
pub fn rewrite_links(links: &[LinkRecord], locale: &LocaleTag) -> Vec<RewriteAction> {
    links.iter().map(|link| classify(link, locale)).collect()
}

/// Apply a plan to the records it was computed from.
///
/// Extra actions (or extra links) are ignored rather than treated as errors;
/// the zip stops at the shorter side.
pub fn apply_rewrites(links: &mut [LinkRecord], actions: &[RewriteAction]) {
    for (link, action) in links.iter_mut().zip(actions) {
        action.apply(link);
    }
}

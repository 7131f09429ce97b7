//! Load-event planning for the embedded content frame.
//!
//! On page-load-complete the host reads a snapshot of the embedded document
//! and receives back one plan: layout normalization actions plus the link
//! rewrite actions, in the order the viewer applies them.

use serde::{Deserialize, Serialize};

use crate::constants::rewrite::INJECTED_STYLESHEET_HREF;
use crate::context::PageContext;
use crate::locale::content_locale;
use crate::rewrite::{rewrite_links, LinkRecord, RewriteAction};
use crate::types::Href;

/// Scroll dimensions of the embedded document body, used to size the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Body scroll height in pixels.
    pub height: u32,
    /// Body scroll width in pixels.
    pub width: u32,
}

/// What the host adapter reads out of the embedded document on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Title of the embedded document.
    pub title: String,
    /// URL the frame was loaded from.
    pub url: String,
    /// Scroll height of the embedded body.
    pub body_scroll_height: u32,
    /// Scroll width of the embedded body.
    pub body_scroll_width: u32,
    /// Anchor elements found in the embedded document, in document order.
    pub links: Vec<LinkRecord>,
}

/// Layout mutation the host applies to the frame or the embedded body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutAction {
    /// Append a stylesheet link to the embedded document head.
    InjectStylesheet {
        /// Stylesheet location, resolved against the shell origin.
        href: Href,
    },
    /// Zero the embedded body's left margin.
    ZeroBodyLeftMargin,
    /// Resize the frame element to the embedded content dimensions.
    ResizeFrame {
        /// New frame height in pixels.
        height: u32,
        /// New frame width in pixels.
        width: u32,
    },
}

/// Complete plan for one frame-load event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLoadPlan {
    /// Layout actions, in application order.
    pub layout: Vec<LayoutAction>,
    /// One rewrite action per snapshot link, in document order.
    pub link_actions: Vec<RewriteAction>,
}

/// Report the embedded content's scroll dimensions.
pub fn content_dimensions(snapshot: &FrameSnapshot) -> FrameMetrics {
    FrameMetrics {
        height: snapshot.body_scroll_height,
        width: snapshot.body_scroll_width,
    }
}

/// Build the plan for a frame-load event.
///
/// Layout order matches the viewer's load handler: inject the shell
/// stylesheet, normalize the body margin, then resize the frame to the
/// content dimensions. The rewrite locale comes from the host page's `lang`
/// query parameter, derived once for the whole invocation.
pub fn plan_frame_load(snapshot: &FrameSnapshot, host: &PageContext) -> FrameLoadPlan {
    let metrics = content_dimensions(snapshot);
    let locale = content_locale(&host.query_params());
    FrameLoadPlan {
        layout: vec![
            LayoutAction::InjectStylesheet {
                href: INJECTED_STYLESHEET_HREF.to_string(),
            },
            LayoutAction::ZeroBodyLeftMargin,
            LayoutAction::ResizeFrame {
                height: metrics.height,
                width: metrics.width,
            },
        ],
        link_actions: rewrite_links(&snapshot.links, &locale),
    }
}

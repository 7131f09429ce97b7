//! Markup rendering for the feedback panel.
//!
//! Pure string producers; the host inserts the fragments into its own DOM and
//! wires the click handlers. Markup mirrors what the packaged viewer ships,
//! including the `fbRating` radio group the rating scan reads back.

use crate::config::FeedbackConfig;
use crate::feedback::FeedbackEmail;
use crate::types::Markup;

/// Name of the radio group carrying the rating selection.
pub const RATING_GROUP_NAME: &str = "fbRating";

/// Inline link that opens the feedback panel.
pub fn feedback_link(config: &FeedbackConfig, open_href: &str) -> Markup {
    format!(
        "<b><a href=\"{open_href}\">{}</a></b><br />",
        config.widget.link_text
    )
}

/// Privacy statement paragraph with its external anchor.
pub fn privacy_notice(config: &FeedbackConfig) -> Markup {
    format!(
        "To see how your personal information will be used, see <a href=\"{}\" target=\"_blank\">{} {} Privacy Statement</a>.",
        config.privacy_statement_url, config.product, config.version
    )
}

/// Rating form: one radio row per configured label, values 1-based.
pub fn rating_form(config: &FeedbackConfig) -> Markup {
    let mut form = String::from("<form method=\"post\" enctype=\"text/plain\" name=\"formRating\">\n");
    for (idx, label) in config.rating.labels.iter().enumerate() {
        form.push_str(&format!(
            "<input type=\"radio\" value=\"{}\" name=\"{RATING_GROUP_NAME}\">{label}<br>\n",
            idx + 1
        ));
    }
    form.push_str("</form>");
    form
}

/// Full feedback panel: heading, prompt, rating form, privacy notice, submit
/// anchor carrying the composed mailto link, and the cancel link.
pub fn feedback_panel(config: &FeedbackConfig, email: &FeedbackEmail) -> Markup {
    format!(
        "<div id=\"feedbackarea\">\n\
         <b>{title}</b><br /><br />\n\
         <p>{prompt}</p>\n\
         {form}\n\
         <p>{privacy}</p>\n\
         <p>{lead}&nbsp;<a href=\"{mailto}\">{submit}</a>.</p>\n\
         <p><a href=\"#Feedback\">{cancel}</a></p>\n\
         <hr>\n\
         </div>",
        title = config.widget.window_title,
        prompt = config.widget.prompt,
        form = rating_form(config),
        privacy = privacy_notice(config),
        lead = config.widget.submit_lead,
        mailto = email.mailto,
        submit = config.widget.submit_text,
        cancel = config.widget.cancel_text,
    )
}

//! Feedback mail composition.
//!
//! Builds the templated subject, body, and mailto-style link from user rating
//! input and the current page identity. Every operation is total: absent
//! ratings, empty titles, and malformed URLs all degrade to defined defaults.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;
use crate::constants::feedback::{RATING_CLASS_SUFFIX, RATING_UNSET_CODE};
use crate::context::PageContext;
use crate::locale::path_locale;
use crate::page::PageIdentity;
use crate::types::{Body, LocaleTag, MailtoUri, Subject};

/// Characters left verbatim by JavaScript's `encodeURIComponent`; everything
/// else is percent-encoded.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a URI component.
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT_SET).to_string()
}

/// User's ordinal feedback selection.
///
/// Either unset or the 1-based index of one choice from the closed candidate
/// set presented by the widget. Immutable once read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// No choice selected.
    Unset,
    /// 1-based index of the selected choice.
    Choice(u8),
}

impl Rating {
    /// Read the rating off a radio-button selection group.
    ///
    /// Scans the candidate set in presentation order; the first checked entry
    /// defines the rating. Nothing checked yields [`Rating::Unset`].
    pub fn from_selection(checked: &[bool]) -> Self {
        checked
            .iter()
            .position(|&is_checked| is_checked)
            .map_or(Rating::Unset, |idx| Rating::Choice(idx as u8 + 1))
    }

    /// Interpret a numeric rating code; anything outside 1..=4 is unset.
    pub fn from_code(code: u8) -> Self {
        match code {
            1..=4 => Rating::Choice(code),
            _ => Rating::Unset,
        }
    }

    /// Code rendered into the subject line: `"0"` when unset.
    pub fn as_code(&self) -> String {
        match self {
            Rating::Unset => RATING_UNSET_CODE.to_string(),
            Rating::Choice(n) => n.to_string(),
        }
    }

    /// Question text this rating appends to the mail body.
    pub fn question<'a>(&self, config: &'a FeedbackConfig) -> &'a str {
        match self {
            Rating::Choice(n @ 1..=3) => config.rating.questions[usize::from(*n) - 1].as_ref(),
            _ => config.rating.fallback_question.as_ref(),
        }
    }
}

/// Composed feedback mail, ready for the host's mail-handling mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackEmail {
    /// Bracketed subject line.
    pub subject: Subject,
    /// Privacy notice plus selected question.
    pub body: Body,
    /// `mailto:` URI combining recipient, subject, and body.
    pub mailto: MailtoUri,
}

/// Compose the bracketed subject line.
///
/// Fixed sequence: product, version, locale, partner, filename, title, and the
/// rating code with its class suffix.
pub fn build_subject(
    config: &FeedbackConfig,
    locale: &LocaleTag,
    identity: &PageIdentity,
    rating: Rating,
) -> Subject {
    format!(
        "[{}] [{}] [{}] [{}] [{}] [{}] [{}{}]",
        config.product,
        config.version,
        locale,
        config.partner,
        identity.filename,
        identity.title,
        rating.as_code(),
        RATING_CLASS_SUFFIX,
    )
}

/// Compose the mail body: privacy-statement notice followed by the question
/// selected by the rating.
///
/// The privacy statement URL travels percent-encoded so it survives inside the
/// mailto link.
pub fn build_body(config: &FeedbackConfig, rating: Rating) -> Body {
    format!(
        "{} {} Privacy Statement {}{}",
        config.product,
        config.version,
        encode_uri_component(&config.privacy_statement_url),
        rating.question(config),
    )
}

/// Combine recipient, subject, and body into the final mailto-style URI.
pub fn build_mail_link(config: &FeedbackConfig, subject: &Subject, body: &Body) -> MailtoUri {
    format!("{}?subject={subject}&body={body}", config.recipient)
}

/// Full composition pipeline: page identity, path-derived locale, subject,
/// body, and mail link.
pub fn compose_feedback(
    config: &FeedbackConfig,
    ctx: &PageContext,
    rating: Rating,
) -> FeedbackEmail {
    let identity = PageIdentity::from_context(ctx);
    let locale = path_locale(&ctx.url);
    let subject = build_subject(config, &locale, &identity, rating);
    let body = build_body(config, rating);
    let mailto = build_mail_link(config, &subject, &body);
    FeedbackEmail {
        subject,
        body,
        mailto,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn from_selection_takes_first_checked_entry() {
        assert_eq!(
            Rating::from_selection(&[false, true, false, true]),
            Rating::Choice(2)
        );
        assert_eq!(
            Rating::from_selection(&[false, false, false, true]),
            Rating::Choice(4)
        );
    }

    #[test]
    fn from_selection_without_checks_is_unset() {
        assert_eq!(Rating::from_selection(&[false, false, false, false]), Rating::Unset);
        assert_eq!(Rating::from_selection(&[]), Rating::Unset);
        assert_eq!(Rating::Unset.as_code(), "0");
    }

    #[test]
    fn from_code_accepts_only_the_closed_set() {
        assert_eq!(Rating::from_code(3), Rating::Choice(3));
        assert_eq!(Rating::from_code(0), Rating::Unset);
        assert_eq!(Rating::from_code(5), Rating::Unset);
    }

    #[test]
    fn question_switches_on_rating_with_default_fallback() {
        let mut config = FeedbackConfig::default();
        config.rating.questions = [
            Cow::Borrowed("Q1"),
            Cow::Borrowed("Q2"),
            Cow::Borrowed("Q3"),
        ];
        config.rating.fallback_question = Cow::Borrowed("QDefault");

        assert_eq!(Rating::Choice(1).question(&config), "Q1");
        assert_eq!(Rating::Choice(3).question(&config), "Q3");
        assert_eq!(Rating::Choice(4).question(&config), "QDefault");
        assert_eq!(Rating::Unset.question(&config), "QDefault");
    }

    #[test]
    fn subject_interpolates_actual_rating_code() {
        let config = FeedbackConfig::default();
        let identity = PageIdentity {
            title: "Topic Title".to_string(),
            filename: "topic.htm".to_string(),
        };
        let subject = build_subject(&config, &"en-us".to_string(), &identity, Rating::Choice(3));
        assert_eq!(
            subject,
            "[Dynamics NAV] [2016] [en-us] [MSFT] [topic.htm] [Topic Title] [3-Class]"
        );
    }

    #[test]
    fn body_embeds_percent_encoded_privacy_url() {
        let config = FeedbackConfig::default();
        let body = build_body(&config, Rating::Unset);
        assert!(body.contains("http%3A%2F%2Fgo.microsoft.com%2Ffwlink%2F%3FLinkID%3D617571"));
        assert!(!body.contains("fwlink/?LinkID"));
    }

    #[test]
    fn encode_uri_component_matches_javascript_exemptions() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
    }

    #[test]
    fn mail_link_concatenates_recipient_subject_and_body() {
        let config = FeedbackConfig::default();
        let link = build_mail_link(&config, &"S".to_string(), &"B".to_string());
        assert_eq!(link, "mailto:nav-olh@microsoft.com?subject=S&body=B");
    }
}

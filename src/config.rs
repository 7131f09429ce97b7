use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::HelpshellError;

/// Rating labels shown in the widget and the question texts appended to the
/// mail body for each rating.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingTexts {
    /// Label per rating choice, in presentation order (rating 1 first).
    pub labels: [Cow<'static, str>; 4],
    /// Question appended to the body for ratings 1 through 3.
    pub questions: [Cow<'static, str>; 3],
    /// Question used for any other rating, including "unset".
    pub fallback_question: Cow<'static, str>,
}

impl Default for RatingTexts {
    fn default() -> Self {
        Self {
            labels: [
                Cow::Borrowed("Yes, this information was helpful."),
                Cow::Borrowed("This Help topic contains a technical error."),
                Cow::Borrowed("I could not find what I was looking for."),
                Cow::Borrowed("The language or terminology was incorrect."),
            ],
            questions: [Cow::Borrowed(""), Cow::Borrowed(""), Cow::Borrowed("")],
            fallback_question: Cow::Borrowed(""),
        }
    }
}

/// Static strings rendered by the feedback widget.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetTexts {
    /// Text of the inline link that opens the feedback panel.
    pub link_text: Cow<'static, str>,
    /// Heading shown at the top of the panel.
    pub window_title: Cow<'static, str>,
    /// Prompt above the rating choices.
    pub prompt: Cow<'static, str>,
    /// Lead-in before the submit anchor ("click here" is appended to this).
    pub submit_lead: Cow<'static, str>,
    /// Text of the submit anchor itself.
    pub submit_text: Cow<'static, str>,
    /// Text of the cancel link.
    pub cancel_text: Cow<'static, str>,
}

impl Default for WidgetTexts {
    fn default() -> Self {
        Self {
            link_text: Cow::Borrowed("Documentation Feedback"),
            window_title: Cow::Borrowed("Documentation Feedback"),
            prompt: Cow::Borrowed("Was this information helpful?"),
            submit_lead: Cow::Borrowed("To submit your feedback,"),
            submit_text: Cow::Borrowed("click here"),
            cancel_text: Cow::Borrowed("Cancel"),
        }
    }
}

/// Static configuration for feedback composition and the widget.
///
/// Fixed at configuration time; nothing here is runtime-mutable. Defaults
/// match the strings the packaged viewer ships with, and partner builds
/// override `partner`/`recipient` (the upstream address stays in place so both
/// parties receive the mail).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Product name placed in the subject line.
    pub product: Cow<'static, str>,
    /// Product version placed in the subject line and privacy notice.
    pub version: Cow<'static, str>,
    /// Partner tag placed in the subject line.
    pub partner: Cow<'static, str>,
    /// `mailto:`-prefixed recipient the composed link opens.
    pub recipient: Cow<'static, str>,
    /// Privacy statement the mail body references.
    pub privacy_statement_url: Cow<'static, str>,
    /// Rating labels and per-rating questions.
    pub rating: RatingTexts,
    /// Widget strings.
    pub widget: WidgetTexts,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            product: Cow::Borrowed("Dynamics NAV"),
            version: Cow::Borrowed("2016"),
            partner: Cow::Borrowed("MSFT"),
            recipient: Cow::Borrowed("mailto:nav-olh@microsoft.com"),
            privacy_statement_url: Cow::Borrowed(
                "http://go.microsoft.com/fwlink/?LinkID=617571",
            ),
            rating: RatingTexts::default(),
            widget: WidgetTexts::default(),
        }
    }
}

impl FeedbackConfig {
    /// Load a configuration override file (JSON, absent keys keep defaults).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, HelpshellError> {
        let raw = fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&raw).map_err(|err| {
            HelpshellError::Configuration(format!(
                "could not parse {}: {err}",
                path.as_ref().display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_four_labels_and_three_questions() {
        let config = FeedbackConfig::default();
        assert_eq!(config.rating.labels.len(), 4);
        assert_eq!(config.rating.questions.len(), 3);
        assert!(config.recipient.starts_with("mailto:"));
    }

    #[test]
    fn json_overrides_merge_onto_defaults() {
        let config: FeedbackConfig =
            serde_json::from_str(r#"{"partner": "CONTOSO", "version": "2017"}"#).unwrap();
        assert_eq!(config.partner, "CONTOSO");
        assert_eq!(config.version, "2017");
        assert_eq!(config.product, FeedbackConfig::default().product);
    }
}

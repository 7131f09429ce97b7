/// Raw hyperlink reference as read from an anchor element.
/// Examples: `./sales-orders.htm`, `http://example.com/page.htm`
pub type Href = String;
/// Browsing-context name an anchor navigates into.
/// Examples: `_parent`, `_externalContent`, `_blank`
pub type FrameTarget = String;
/// Short code identifying content language/region.
/// Examples: `en-us`, `da-dk`, `W1`
pub type LocaleTag = String;
/// Key of a query-string parameter.
/// Example: `lang`
pub type QueryKey = String;
/// Value of a query-string parameter (empty when the pair carries no `=`).
/// Examples: `en-us`, ``
pub type QueryValue = String;
/// Composed feedback mail subject line.
/// Example: `[Dynamics NAV] [2016] [W1] [MSFT] [topic.htm] [Topic Title] [0-Class]`
pub type Subject = String;
/// Composed feedback mail body text.
pub type Body = String;
/// Full mailto-style URI handed to the browser's mail handler.
/// Example: `mailto:feedback@example.com?subject=...&body=...`
pub type MailtoUri = String;
/// Rendered widget markup fragment.
pub type Markup = String;

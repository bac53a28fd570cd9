//! Flow state classification
//!
//! The identity provider is identified only by where it sends the client:
//! a path containing `/login` is its login page, a path containing
//! `/consent` is its consent page, anything else is treated as the end of
//! the flow. Matching is a plain substring check on the decoded path, so
//! `/tenant/login`, `/login/` and `/oauth2/consent` all match.

use crate::types::FlowState;
use std::borrow::Cow;
use url::Url;

const LOGIN_MARKER: &str = "/login";
const CONSENT_MARKER: &str = "/consent";

/// Classify the URL a response landed on
///
/// Only the path is inspected: host, query and fragment never change the
/// result. A path carrying both markers classifies as a login page; the
/// walker still runs its consent step on it through [`is_consent_page`].
///
/// # Examples
///
/// ```
/// use login_bot_flow::classify::classify;
/// use login_bot_flow::types::FlowState;
/// use url::Url;
///
/// let url = Url::parse("http://localhost:8080/login?return_to=/app").unwrap();
/// assert_eq!(classify(&url), FlowState::AwaitingLogin);
///
/// let url = Url::parse("http://localhost:8080/consent?client_id=abc").unwrap();
/// assert_eq!(classify(&url), FlowState::AwaitingConsent);
///
/// let url = Url::parse("http://localhost:8082/callback?next=/login").unwrap();
/// assert_eq!(classify(&url), FlowState::Terminal);
/// ```
pub fn classify(url: &Url) -> FlowState {
    if is_login_page(url) {
        FlowState::AwaitingLogin
    } else if is_consent_page(url) {
        FlowState::AwaitingConsent
    } else {
        FlowState::Terminal
    }
}

/// True when the decoded path contains `/login`
pub fn is_login_page(url: &Url) -> bool {
    decoded_path(url).contains(LOGIN_MARKER)
}

/// True when the decoded path contains `/consent`, whatever else it contains
///
/// The consent step checks this on its own: a page that also carries the
/// login marker is still a consent page once the login step is behind.
pub fn is_consent_page(url: &Url) -> bool {
    decoded_path(url).contains(CONSENT_MARKER)
}

fn decoded_path(url: &Url) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(url.path()).decode_utf8_lossy()
}

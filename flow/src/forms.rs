//! Form payloads for the login and consent pages
//!
//! Neither page is parsed. The login page posts back to its own URL with the
//! two credential fields, and the consent page echoes the flow parameters of
//! its query string as hidden fields next to the approval button.

use crate::error::FlowError;
use crate::types::Credentials;
use url::Url;

pub const CONSENT_FIELD: &str = "consent";
pub const CONSENT_APPROVE: &str = "approve";
const CONSENT_PATH: &str = "/consent";

/// Fields posted to the login page: `email` and `password`, nothing else
pub fn login_form(credentials: &Credentials) -> [(&'static str, &str); 2] {
    [
        ("email", credentials.email()),
        ("password", credentials.password()),
    ]
}

/// Fields posted to the consent endpoint
///
/// Every query pair of `url` is kept in order, repeated keys included.
/// Existing `consent` pairs are dropped and a single `consent=approve` is
/// appended.
pub fn consent_form(url: &Url) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CONSENT_FIELD)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    fields.push((CONSENT_FIELD.to_owned(), CONSENT_APPROVE.to_owned()));
    fields
}

/// Consent submission endpoint: `/consent` on the origin of `url`
pub fn consent_target(url: &Url) -> Result<Url, FlowError> {
    Ok(url.join(CONSENT_PATH)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(url: &str) -> Url {
        Url::parse(url).expect("parse url")
    }

    fn owned(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_login_form_has_exactly_credentials() {
        let credentials = Credentials::new("alice@example.com", "p@ss word");
        let form = login_form(&credentials);
        assert_eq!(
            form,
            [("email", "alice@example.com"), ("password", "p@ss word")]
        );
    }

    #[test]
    fn test_consent_form_echoes_query() {
        let url = parse("http://idp/consent?client_id=abc&return_to=/app");
        assert_eq!(
            consent_form(&url),
            owned(&[
                ("client_id", "abc"),
                ("return_to", "/app"),
                ("consent", "approve")
            ])
        );
    }

    #[test]
    fn test_consent_form_keeps_repeated_keys() {
        let url = parse("http://idp/consent?scope=openid&scope=email&state=s1");
        assert_eq!(
            consent_form(&url),
            owned(&[
                ("scope", "openid"),
                ("scope", "email"),
                ("state", "s1"),
                ("consent", "approve")
            ])
        );
    }

    #[test]
    fn test_consent_form_overrides_existing_consent() {
        let url = parse("http://idp/consent?consent=deny&client_id=abc&consent=maybe");
        assert_eq!(
            consent_form(&url),
            owned(&[("client_id", "abc"), ("consent", "approve")])
        );
    }

    #[test]
    fn test_consent_form_decodes_values() {
        let url = parse(
            "http://idp/consent?redirect_uri=http%3A%2F%2Flocalhost%3A8082%2Fcallback&scope=openid+profile",
        );
        assert_eq!(
            consent_form(&url),
            owned(&[
                ("redirect_uri", "http://localhost:8082/callback"),
                ("scope", "openid profile"),
                ("consent", "approve")
            ])
        );
    }

    #[test]
    fn test_consent_form_without_query() {
        let url = parse("http://idp/consent");
        assert_eq!(consent_form(&url), owned(&[("consent", "approve")]));
    }

    #[test]
    fn test_consent_target_uses_origin() {
        let url = parse("http://localhost:8080/tenant/acme/consent?client_id=abc#frag");
        assert_eq!(
            consent_target(&url).expect("resolve").as_str(),
            "http://localhost:8080/consent"
        );
    }
}

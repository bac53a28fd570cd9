use crate::error::FlowError;
use std::time::Duration;
use tracing::debug;

/// HTTP session settings for one run
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock bound on each logical request, redirect chain included
    pub timeout: Duration,
    /// Follow every redirect, cross-origin included, keeping the cookie store
    pub follow_redirects: bool,
}

impl SessionConfig {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            follow_redirects: true,
        }
    }
}

/// Build the client used for the whole run
///
/// Cookies set by any response are sent on every later request that matches
/// them, on every hop of a redirect chain too. With `follow_redirects` the
/// client never stops on a redirect: there is no hop limit, the timeout is
/// the only bound.
pub fn build_client(config: &SessionConfig) -> Result<reqwest::Client, FlowError> {
    let policy = if config.follow_redirects {
        reqwest::redirect::Policy::custom(|attempt| {
            debug!(
                hop = attempt.previous().len(),
                "redirecting to {}",
                attempt.url()
            );
            attempt.follow()
        })
    } else {
        reqwest::redirect::Policy::none()
    };

    reqwest::ClientBuilder::new()
        .cookie_store(true)
        .redirect(policy)
        .timeout(config.timeout)
        .build()
        .map_err(FlowError::Client)
}

//! The redirect-following state walk
//!
//! A run is at most three requests: the start GET, an optional login POST
//! and an optional consent POST. Each one is followed through its whole
//! redirect chain by the client, and the state is re-derived from the URL
//! the chain ended on. The walker holds exactly one live response at a time:
//! a step takes the current response by value and drops it before sending
//! the next request.
//!
//! There is no loop. A provider that sends the client back to its login page
//! after consent ends the walk on that page, and the run fails verification.

use crate::classify::{classify, is_consent_page};
use crate::config::WalkerConfig;
use crate::error::FlowError;
use crate::forms::{consent_form, consent_target, login_form};
use crate::session::{SessionConfig, build_client};
use crate::types::{Credentials, FlowOutcome, FlowReport, FlowState, FlowStep, StepRecord};
use crate::verify::verify;
use reqwest::Response;
use tracing::{debug, info, warn};
use url::Url;

/// Walks one flow per call to [`FlowWalker::walk`], sharing a cookie store across calls
pub struct FlowWalker {
    client: reqwest::Client,
    success_marker: String,
    preview_chars: usize,
}

impl FlowWalker {
    /// Build a walker with the session settings derived from `config`
    pub fn new(config: &WalkerConfig) -> Result<Self, FlowError> {
        Self::with_session(config, &config.session())
    }

    /// Build a walker with explicit session settings
    pub fn with_session(config: &WalkerConfig, session: &SessionConfig) -> Result<Self, FlowError> {
        Ok(Self {
            client: build_client(session)?,
            success_marker: config.success_marker.clone(),
            preview_chars: config.preview_chars,
        })
    }

    /// Run the flow from `start_url` to the final page
    ///
    /// Transport failures abort the walk with the step they happened in. A
    /// final page without the success marker is not an error: it is reported
    /// as [`FlowOutcome::Failure`].
    pub async fn walk(
        &self,
        credentials: &Credentials,
        start_url: &Url,
    ) -> Result<FlowReport, FlowError> {
        let mut steps = Vec::with_capacity(3);

        info!("starting flow at {start_url}");
        let response = self
            .client
            .get(start_url.clone())
            .send()
            .await
            .map_err(FlowError::transport(FlowStep::Start))?;
        steps.push(record(FlowStep::Start, start_url.clone(), &response));

        let response = match classify(response.url()) {
            FlowState::AwaitingLogin => {
                self.submit_login(response, credentials, &mut steps).await?
            }
            _ => response,
        };

        // checked on its own: a landing path may carry both markers
        let response = if is_consent_page(response.url()) {
            self.submit_consent(response, &mut steps).await?
        } else {
            response
        };

        let landed = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(FlowError::transport(FlowStep::ReadBody))?;
        let outcome = verify(&body, &self.success_marker, self.preview_chars);
        match &outcome {
            FlowOutcome::Success => info!("success marker found at {landed}"),
            FlowOutcome::Failure { .. } => warn!("success marker missing at {landed}"),
        }

        Ok(FlowReport {
            steps,
            landed,
            outcome,
        })
    }

    async fn submit_login(
        &self,
        current: Response,
        credentials: &Credentials,
        steps: &mut Vec<StepRecord>,
    ) -> Result<Response, FlowError> {
        // the login page posts back to itself, query string included
        let target = current.url().clone();
        drop(current);

        info!("login page detected, posting credentials to {target}");
        debug!(email = credentials.email(), "submitting login form");
        let next = self
            .client
            .post(target.clone())
            .form(&login_form(credentials))
            .send()
            .await
            .map_err(FlowError::transport(FlowStep::Login))?;
        steps.push(record(FlowStep::Login, target, &next));
        Ok(next)
    }

    async fn submit_consent(
        &self,
        current: Response,
        steps: &mut Vec<StepRecord>,
    ) -> Result<Response, FlowError> {
        let landed = current.url().clone();
        drop(current);

        let target = consent_target(&landed)?;
        let fields = consent_form(&landed);
        info!("consent page detected, approving at {target}");
        debug!(fields = fields.len(), "submitting consent form");
        let next = self
            .client
            .post(target.clone())
            .form(&fields)
            .send()
            .await
            .map_err(FlowError::transport(FlowStep::Consent))?;
        steps.push(record(FlowStep::Consent, target, &next));
        Ok(next)
    }
}

fn record(step: FlowStep, target: Url, response: &Response) -> StepRecord {
    debug!(%step, status = %response.status(), "landed at {}", response.url());
    StepRecord {
        step,
        target,
        landed: response.url().clone(),
    }
}

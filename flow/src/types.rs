use std::fmt;
use url::Url;

/// Step of the flow, derived from the URL a response landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// The identity provider is showing its login page
    AwaitingLogin,
    /// The identity provider is asking the user to approve the client
    AwaitingConsent,
    /// Neither login nor consent: the page to verify
    Terminal,
}

/// Email and password used by the login step
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Request issued by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// GET of the start URL
    Start,
    /// POST of the credentials to the login page
    Login,
    /// POST of the approval to the consent endpoint
    Consent,
    /// Reading the body of the final page
    ReadBody,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowStep::Start => "GET start URL",
            FlowStep::Login => "Login POST",
            FlowStep::Consent => "Consent POST",
            FlowStep::ReadBody => "reading final page body",
        };
        f.write_str(label)
    }
}

/// A completed request: where it was sent and where the redirect chain ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub step: FlowStep,
    pub target: Url,
    pub landed: Url,
}

/// Result of checking the final page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The success marker was found in the body
    Success,
    /// The marker is missing; `preview` holds the start of the body
    Failure { preview: String },
}

/// Everything a run produced, in order
#[derive(Debug, Clone)]
pub struct FlowReport {
    pub steps: Vec<StepRecord>,
    /// Final URL of the last response
    pub landed: Url,
    pub outcome: FlowOutcome,
}

impl FlowReport {
    pub fn succeeded(&self) -> bool {
        self.outcome == FlowOutcome::Success
    }

    /// Records of the POSTs issued, login first
    pub fn submissions(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|record| matches!(record.step, FlowStep::Login | FlowStep::Consent))
    }
}

use crate::types::FlowStep;
use thiserror::Error;

/// Errors that abort a walk
#[derive(Error, Debug)]
pub enum FlowError {
    /// Network failure or timeout; always fatal
    #[error("{step} failed: {source}")]
    Transport {
        step: FlowStep,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FlowError {
    /// `map_err` adapter labelling a request failure with its step
    pub fn transport(step: FlowStep) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| FlowError::Transport { step, source }
    }

    /// True when a request hit the session timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            FlowError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Step that failed, if the error came from a request
    pub fn step(&self) -> Option<FlowStep> {
        match self {
            FlowError::Transport { step, .. } => Some(*step),
            _ => None,
        }
    }
}

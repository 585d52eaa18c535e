//! Error types for the guardian analysis contract.
//!
//! Every failure of the single outbound model call lands here. The session
//! layer collapses all of them into one localized "system busy" notice; the
//! distinct variants exist so the causes can be logged apart.

use thiserror::Error;

/// Failure of one analysis invocation (transport, empty reply, or a reply
/// that does not satisfy the declared response contract).
#[derive(Debug, Error)]
pub enum GuardianError {
    /// Network or service failure reaching the hosted model.
    #[error("model transport failed: {0}")]
    Transport(String),

    /// The service answered but produced no candidate text.
    #[error("model returned no candidate text")]
    EmptyResponse,

    /// The candidate text is not valid JSON for the declared shape.
    #[error("malformed model response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Parsed JSON violates an invariant of the contract (score bounds,
    /// empty roadmap/principles).
    #[error("response violates the analysis contract: {0}")]
    ContractViolation(String),

    /// No API key configured for the real client.
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    /// Configuration could not be loaded for the real client.
    #[error("load configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GuardianError {
    fn from(err: reqwest::Error) -> Self {
        GuardianError::Transport(err.to_string())
    }
}

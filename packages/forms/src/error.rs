use thiserror::Error;

use crate::schema::ValidationErrors;

/// Failure of the asynchronous submission step.
///
/// Every variant ends in the same generic user-facing toast; the variant is
/// only used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("credentials rejected")]
    Rejected,
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Why the workflow refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("validation failed on {} field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("a submission is already in flight")]
    Busy,
    #[error("the form has already been submitted successfully")]
    Finished,
    #[error("the owning view has been torn down")]
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid password bounds: min {min}, max {max}")]
    InvalidBounds { min: usize, max: usize },
}

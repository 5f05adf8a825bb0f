use thiserror::Error;

/// Why the environment could not be turned into a [`Config`](crate::server::config::Config)
///
/// Only raised at startup. Should one reach a handler through [`Error`](super::Error) it is
/// answered like any other unexpected failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("{0} must be set")]
    MissingEnvVar(String),
    #[error("{var} could not be parsed: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid Sanity client configuration: {0}")]
    InvalidConfig(String),
    #[error("Sanity API token is required for mutations")]
    MissingToken,
    #[error("Sanity API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Acknowledgement returned to the Sanity webhook
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookResponseDto {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheClearedDto {
    /// Number of cached entries dropped
    pub cleared: usize,
}

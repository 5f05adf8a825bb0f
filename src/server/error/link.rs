use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("No {table} row with id {id}")]
    RecordNotFound { table: &'static str, id: String },
    #[error("Player profile {0} has neither a player name nor a first or last name")]
    ProfileMissingName(String),
    #[error("Invalid webhook payload: {0}")]
    InvalidWebhookPayload(String),
}

impl IntoResponse for LinkError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ProfileMissingName(_) | Self::InvalidWebhookPayload(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

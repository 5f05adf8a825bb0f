//! Error types for the crosslink server.
//!
//! Resolvers never return errors, a failed lookup is an empty result. The errors here come
//! from the operations that must report failure: configuration, startup, the link audit and
//! repair, and webhook-driven sync. Every error converts into an axum response.

pub mod config;
pub mod link;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, link::LinkError},
};

/// Main error type for the crosslink server
///
/// Aggregates domain errors & library errors so `?` works across the server. The
/// `IntoResponse` implementation maps domain errors to 4xx responses and everything else to a
/// logged 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variable
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A link operation was asked to act on something that cannot be linked
    #[error(transparent)]
    LinkError(#[from] LinkError),
    /// Sanity API error (query, mutation, missing token)
    #[error(transparent)]
    CmsError(#[from] sanity_client::Error),
    /// Database error (query failures, connection issues, constraint violations)
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup)
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Binding or serving the HTTP listener failed
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::LinkError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response
///
/// The client only receives a generic message, the full error goes to the log.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a configuration error reaching a handler is answered as a 500
    ///
    /// 500 internal server error
    #[test]
    fn config_error_responds_internal_server_error() {
        let err = Error::from(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Tests that link errors keep their own status
    ///
    /// 404 not found, 400 bad request
    #[test]
    fn link_error_keeps_status() {
        let missing = Error::from(LinkError::RecordNotFound {
            table: "people",
            id: "p1".to_string(),
        });
        let invalid = Error::from(LinkError::InvalidWebhookPayload("no _id".to_string()));

        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

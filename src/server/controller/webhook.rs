use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;

use crate::{
    model::api::{ErrorDto, WebhookResponseDto},
    server::{
        error::Error,
        model::app::AppState,
        service::link::{WebhookEvent, WebhookService},
    },
};

pub static WEBHOOK_TAG: &str = "webhook";

/// Receive a document change from Sanity
///
/// The body is the changed document with an optional `operation` of `create`, `update` or
/// `delete`, defaulting to `update`. Player profiles are synced to the `people` table. Galleries,
/// sponsors and teams set or clear the `sanity_id` of the row they name.
///
/// # Responses
/// - 200 (OK): Event applied, `success` is false for document types without a handler
/// - 400 (Bad Request): The body names no document, does not match its type, or a player profile
///   has no name
/// - 500 (Internal Server Error): Writing the linked row failed
#[utoipa::path(
    post,
    path = "/api/webhooks/sanity",
    tag = WEBHOOK_TAG,
    request_body(content = Object, description = "The changed document", content_type = "application/json"),
    responses(
        (status = 200, description = "Event processed", body = WebhookResponseDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sanity_webhook(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let event = WebhookEvent::from_payload(payload)?;
    let service = WebhookService::new(&state.db, &state.cms_client, &state.cache);

    let outcome = service.handle(event).await?;

    Ok((
        StatusCode::OK,
        Json(WebhookResponseDto {
            success: outcome.handled,
            message: outcome.message,
        }),
    ))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::CacheClearedDto,
    server::{error::Error, model::app::AppState},
};

pub static CACHE_TAG: &str = "cache";

/// Drop every cached reference
#[utoipa::path(
    post,
    path = "/api/cache/clear",
    tag = CACHE_TAG,
    responses(
        (status = 200, description = "Number of entries dropped", body = CacheClearedDto)
    ),
)]
pub async fn clear_cache(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cleared = state.cache.clear();

    tracing::info!("Cleared {} cached references", cleared);

    Ok((StatusCode::OK, Json(CacheClearedDto { cleared })))
}

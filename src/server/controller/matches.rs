use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, linked::MatchDayDto},
    server::{
        data::linked::RecordTable,
        error::{link::LinkError, Error},
        model::app::AppState,
        service::resolver::{matches::MatchResolver, ResolveOptions},
    },
};

pub static MATCH_TAG: &str = "match";

/// Get a match with its photo gallery and both teams
#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Id of the `match` row"),
        ResolveOptions
    ),
    responses(
        (status = 200, description = "The match, gallery & teams empty when not found", body = MatchDayDto),
        (status = 404, description = "No match with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = MatchResolver::new(&state.db, &state.cms_client, &state.cache);

    let Some(match_day) = resolver.get_match_day(&id, options).await else {
        return Err(LinkError::RecordNotFound {
            table: entity::prelude::Match::TABLE,
            id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(MatchDayDto::from(match_day))))
}

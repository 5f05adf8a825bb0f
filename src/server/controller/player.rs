use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, linked::PlayerDto},
    server::{
        data::linked::RecordTable,
        error::{link::LinkError, Error},
        model::app::AppState,
        service::resolver::{player::PlayerResolver, ResolveOptions},
    },
};

pub static PLAYER_TAG: &str = "player";

/// Get every player with their CMS profile, ordered by name
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(ResolveOptions),
    responses(
        (status = 200, description = "Every player, profile empty when not linked", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = PlayerResolver::new(&state.db, &state.cms_client, &state.cache);

    let players: Vec<PlayerDto> = resolver
        .get_all_players_with_profiles(options)
        .await
        .into_iter()
        .map(PlayerDto::from)
        .collect();

    Ok((StatusCode::OK, Json(players)))
}

/// Get a player by `people` id with their CMS profile
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = String, Path, description = "Id of the `people` row"),
        ResolveOptions
    ),
    responses(
        (status = 200, description = "The player, profile empty when not linked", body = PlayerDto),
        (status = 404, description = "No player with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = PlayerResolver::new(&state.db, &state.cms_client, &state.cache);

    let Some(player) = resolver.get_player_with_profile(&id, options).await else {
        return Err(LinkError::RecordNotFound {
            table: entity::prelude::People::TABLE,
            id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(PlayerDto::from(player))))
}

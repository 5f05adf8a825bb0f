use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, linked::TeamDto},
    server::{
        data::linked::RecordTable,
        error::{link::LinkError, Error},
        model::app::AppState,
        service::resolver::{team::TeamResolver, ResolveOptions},
    },
};

pub static TEAM_TAG: &str = "team";

/// Get every team with its CMS document, ordered by name
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(ResolveOptions),
    responses(
        (status = 200, description = "Every team", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = TeamResolver::new(&state.db, &state.cms_client, &state.cache);

    let teams: Vec<TeamDto> = resolver
        .get_all_teams_with_documents(options)
        .await
        .into_iter()
        .map(TeamDto::from)
        .collect();

    Ok((StatusCode::OK, Json(teams)))
}

/// Get the club's own team with its CMS document
///
/// The team is looked up by the configured `CLUB_TEAM_NAME`.
#[utoipa::path(
    get,
    path = "/api/teams/club",
    tag = TEAM_TAG,
    params(ResolveOptions),
    responses(
        (status = 200, description = "The club's team", body = TeamDto),
        (status = 404, description = "No team with the club's name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_team(
    State(state): State<AppState>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = TeamResolver::new(&state.db, &state.cms_client, &state.cache);

    let Some(team) = resolver.get_club_team(&state.club_team_name, options).await else {
        return Err(LinkError::RecordNotFound {
            table: entity::prelude::Teams::TABLE,
            id: state.club_team_name.clone(),
        }
        .into());
    };
    let document = resolver
        .resolve_team_document_from_record(Some(&team), options)
        .await;

    Ok((
        StatusCode::OK,
        Json(TeamDto {
            record: team.into(),
            document,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Id of the `teams` row"),
        ResolveOptions
    ),
    responses(
        (status = 200, description = "The team, document empty when not linked", body = TeamDto),
        (status = 404, description = "No team with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = TeamResolver::new(&state.db, &state.cms_client, &state.cache);

    let Some(team) = resolver.get_team_with_document(&id, options).await else {
        return Err(LinkError::RecordNotFound {
            table: entity::prelude::Teams::TABLE,
            id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

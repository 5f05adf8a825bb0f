use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, linked::SponsorDto},
    server::{
        data::linked::RecordTable,
        error::{link::LinkError, Error},
        model::app::AppState,
        service::resolver::{sponsor::SponsorResolver, ResolveOptions},
    },
};

pub static SPONSOR_TAG: &str = "sponsor";

/// Get every featured sponsor with its CMS document
#[utoipa::path(
    get,
    path = "/api/sponsors/featured",
    tag = SPONSOR_TAG,
    params(ResolveOptions),
    responses(
        (status = 200, description = "Featured sponsors ordered by name", body = Vec<SponsorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_sponsors(
    State(state): State<AppState>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = SponsorResolver::new(&state.db, &state.cms_client, &state.cache);

    let sponsors: Vec<SponsorDto> = resolver
        .get_featured_sponsors_with_documents(options)
        .await
        .into_iter()
        .map(SponsorDto::from)
        .collect();

    Ok((StatusCode::OK, Json(sponsors)))
}

#[utoipa::path(
    get,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(
        ("id" = String, Path, description = "Id of the `sponsors` row"),
        ResolveOptions
    ),
    responses(
        (status = 200, description = "The sponsor, document empty when not linked", body = SponsorDto),
        (status = 404, description = "No sponsor with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sponsor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(options): Query<ResolveOptions>,
) -> Result<impl IntoResponse, Error> {
    let resolver = SponsorResolver::new(&state.db, &state.cms_client, &state.cache);

    let Some(sponsor) = resolver.get_sponsor_with_document(&id, options).await else {
        return Err(LinkError::RecordNotFound {
            table: entity::prelude::Sponsors::TABLE,
            id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(SponsorDto::from(sponsor))))
}

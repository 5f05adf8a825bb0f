//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its OpenAPI specification; Swagger UI serves the
//! collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/players` - Every player with their profile
/// - `GET /api/players/{id}` - A player with their profile
/// - `GET /api/matches/{id}` - A match with its gallery and both teams
/// - `GET /api/sponsors/featured` - Featured sponsors with their documents
/// - `GET /api/sponsors/{id}` - A sponsor with its document
/// - `GET /api/teams` - Every team with its document
/// - `GET /api/teams/club` - The club's own team with its document
/// - `GET /api/teams/{id}` - A team with its document
/// - `GET /api/links/audit` - Link drift report
/// - `POST /api/links/repair` - Fill in missing link halves
/// - `POST /api/cache/clear` - Drop every cached reference
/// - `POST /api/webhooks/sanity` - Document change notifications from Sanity
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, cms_client, &config.club_team_name));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Crosslink", description = "Banks o' Dee cross-system reference API"), tags(
        (name = controller::player::PLAYER_TAG, description = "Players & their CMS profiles"),
        (name = controller::matches::MATCH_TAG, description = "Matches & their photo galleries"),
        (name = controller::sponsor::SPONSOR_TAG, description = "Sponsors & their CMS documents"),
        (name = controller::team::TEAM_TAG, description = "Teams & their CMS documents"),
        (name = controller::link::LINK_TAG, description = "Link auditing & repair"),
        (name = controller::cache::CACHE_TAG, description = "Reference cache"),
        (name = controller::webhook::WEBHOOK_TAG, description = "CMS webhooks"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::player::get_players))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::matches::get_match))
        .routes(routes!(controller::sponsor::get_featured_sponsors))
        .routes(routes!(controller::sponsor::get_sponsor))
        .routes(routes!(controller::team::get_teams))
        .routes(routes!(controller::team::get_club_team))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::link::audit_links))
        .routes(routes!(controller::link::repair_links))
        .routes(routes!(controller::cache::clear_cache))
        .routes(routes!(controller::webhook::sanity_webhook))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

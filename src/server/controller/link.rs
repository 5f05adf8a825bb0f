use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        error::Error,
        model::app::AppState,
        service::link::{LinkAuditService, LinkReport, RepairSummary},
    },
};

pub static LINK_TAG: &str = "link";

/// Audit the links between every linked table and its CMS documents
///
/// Read only. The report lists every row whose link is not consistent.
///
/// # Responses
/// - 200 (OK): Link report with per-status counts
/// - 500 (Internal Server Error): A table or document type could not be read
#[utoipa::path(
    get,
    path = "/api/links/audit",
    tag = LINK_TAG,
    responses(
        (status = 200, description = "Link report", body = LinkReport),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn audit_links(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = LinkAuditService::new(&state.db, &state.cms_client, &state.cache);

    let report = service.audit_all().await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Audit every link, then fill in the missing halves
///
/// Drifted & dangling links are counted as skipped. Individual write failures are counted,
/// they do not fail the request.
///
/// # Responses
/// - 200 (OK): Summary of the writes made
/// - 500 (Internal Server Error): The audit could not be completed, nothing was written
#[utoipa::path(
    post,
    path = "/api/links/repair",
    tag = LINK_TAG,
    responses(
        (status = 200, description = "Repair summary", body = RepairSummary),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn repair_links(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = LinkAuditService::new(&state.db, &state.cms_client, &state.cache);

    let report = service.audit_all().await?;
    let summary = service.repair(&report).await;

    Ok((StatusCode::OK, Json(summary)))
}

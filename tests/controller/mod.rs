//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, against an in-memory database
//! and a mock Sanity server.

mod cache;
mod link;
mod matches;
mod player;
mod sponsor;
mod team;
mod webhook;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use crosslink::server::{model::app::AppState, service::resolver::ResolveOptions};
use crosslink_test_utils::prelude::*;
use serde_json::{json, Value};

/// Reads a handler's response into its status & JSON body
async fn into_json(response: impl IntoResponse) -> (StatusCode, Value) {
    let response = response.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

fn options() -> Query<ResolveOptions> {
    Query(ResolveOptions::default())
}

fn path(id: &str) -> Path<String> {
    Path(id.to_string())
}

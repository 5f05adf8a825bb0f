//! Tests for the Sanity webhook endpoint.

use axum::Json;
use crosslink::server::controller::webhook::sanity_webhook;
use sea_orm::EntityTrait;

use super::*;

/// Tests that a new profile creates & links a `people` row.
///
/// Expected: 200 OK with success, row stored with the profile's published id
#[tokio::test]
async fn syncs_player_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_person("p1", None)
        .build()
        .await?;

    let mut profile = factory::mock_player_profile("drafts.profile-1", Some("p1"));
    profile["operation"] = json!("update");

    let result = sanity_webhook(State(test.to_app_state::<AppState>()), Json(profile)).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let person = entity::prelude::People::find_by_id("p1")
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(person.sanity_id.as_deref(), Some("profile-1"));

    Ok(())
}

/// Tests a payload that names no document.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_payload_without_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;

    let result = sanity_webhook(
        State(test.to_app_state::<AppState>()),
        Json(json!({ "_type": "playerProfile" })),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid webhook payload: missing _id");

    Ok(())
}

/// Tests a profile without any name.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_profile_without_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;

    let result = sanity_webhook(
        State(test.to_app_state::<AppState>()),
        Json(json!({ "_id": "profile-1", "_type": "playerProfile" })),
    )
    .await;
    let (status, _) = into_json(result).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a document type without a handler.
///
/// Expected: 200 OK with success false
#[tokio::test]
async fn unhandled_document_type() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = sanity_webhook(
        State(test.to_app_state::<AppState>()),
        Json(json!({ "_id": "post-1", "_type": "newsArticle", "operation": "create" })),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);

    Ok(())
}

/// Tests that deleting a sponsor document unlinks its row through the endpoint.
///
/// Expected: 200 OK with success, row kept without a back-reference
#[tokio::test]
async fn unlinks_deleted_sponsor() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, Some("sponsor-1"))
        .build()
        .await?;

    let result = sanity_webhook(
        State(test.to_app_state::<AppState>()),
        Json(json!({ "_id": "sponsor-1", "_type": "sponsor", "operation": "delete" })),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let sponsor = entity::prelude::Sponsors::find_by_id("s1")
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(sponsor.sanity_id, None);

    Ok(())
}

//! Tests for the link audit & repair endpoints.

use crosslink::server::controller::link::{audit_links, repair_links};
use sea_orm::EntityTrait;

use super::*;

/// One consistent player and one whose row lacks its back-reference
fn half_linked_players() -> TestBuilder {
    TestBuilder::new()
        .with_link_tables()
        .with_person("p1", Some("profile-1"))
        .with_person("p2", None)
        .with_all_documents_endpoint(
            "playerProfile",
            vec![
                factory::mock_player_profile("profile-1", Some("p1")),
                factory::mock_player_profile("profile-2", Some("p2")),
            ],
            1,
        )
        .with_all_documents_endpoint("matchGallery", Vec::new(), 1)
        .with_all_documents_endpoint("sponsor", Vec::new(), 1)
        .with_all_documents_endpoint("team", Vec::new(), 1)
}

/// Tests the audit report.
///
/// Expected: 200 OK, one consistent player & one missing back-reference
#[tokio::test]
async fn reports_link_drift() -> Result<(), TestError> {
    let test = half_linked_players().build().await?;

    let result = audit_links(State(test.to_app_state::<AppState>())).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["consistent"], 1);
    assert_eq!(body["missing_back_reference"], 1);
    assert_eq!(
        body["findings"],
        json!([{
            "entity": "player",
            "record_id": "p2",
            "status": "missing_back_reference",
            "document_id": "profile-2"
        }])
    );
    test.assert_mocks();

    Ok(())
}

/// Tests repairing a missing back-reference.
///
/// Expected: 200 OK, the row now points at its profile
#[tokio::test]
async fn repairs_missing_back_reference() -> Result<(), TestError> {
    let test = half_linked_players().build().await?;

    let result = repair_links(State(test.to_app_state::<AppState>())).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["back_references_set"], 1);
    assert_eq!(body["failed"], 0);

    let person = entity::prelude::People::find_by_id("p2")
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(person.sanity_id.as_deref(), Some("profile-2"));

    Ok(())
}

/// Tests the audit when the tables do not exist.
///
/// Expected: 500 Internal Server Error with a generic message
#[tokio::test]
async fn failed_audit_is_internal_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = audit_links(State(test.to_app_state::<AppState>())).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}

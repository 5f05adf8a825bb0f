//! Tests for the player endpoints.

use crosslink::server::controller::player::{get_player, get_players};

use super::*;

/// Tests listing players with and without a linked profile.
///
/// Verifies the linked player carries its profile and the unlinked one an empty profile,
/// both resolved through one CMS request each.
///
/// Expected: 200 OK with both players ordered by name
#[tokio::test]
async fn lists_players_with_profiles() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_person("p1", Some("profile-1"))
        .with_person("p2", None)
        .with_document_endpoint(
            "playerProfile",
            "profile-1",
            factory::mock_player_profile("profile-1", Some("p1")),
            1,
        )
        .with_external_document_endpoint("playerProfile", "p2", Value::Null, 1)
        .build()
        .await?;

    let result = get_players(State(test.to_app_state::<AppState>()), options()).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["record"]["id"], "p1");
    assert_eq!(body[0]["profile"]["_id"], "profile-1");
    assert_eq!(body[1]["record"]["id"], "p2");
    assert_eq!(body[1]["profile"], Value::Null);
    test.assert_mocks();

    Ok(())
}

/// Tests getting a single player with their profile.
///
/// Expected: 200 OK with the row & profile
#[tokio::test]
async fn gets_player_with_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_person("p1", Some("profile-1"))
        .with_document_endpoint(
            "playerProfile",
            "profile-1",
            factory::mock_player_profile("profile-1", Some("p1")),
            1,
        )
        .build()
        .await?;

    let result = get_player(
        State(test.to_app_state::<AppState>()),
        path("p1"),
        options(),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["sanity_id"], "profile-1");
    assert_eq!(body["profile"]["supabaseId"], "p1");

    Ok(())
}

/// Tests getting a player that does not exist.
///
/// Verifies the CMS is never queried when the row is missing.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn missing_player_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_external_document_endpoint("playerProfile", "p9", Value::Null, 0)
        .build()
        .await?;

    let result = get_player(
        State(test.to_app_state::<AppState>()),
        path("p9"),
        options(),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No people row with id p9");
    test.assert_mocks();

    Ok(())
}

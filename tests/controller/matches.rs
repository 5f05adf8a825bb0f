//! Tests for the match day endpoint.

use crosslink::server::controller::matches::get_match;

use super::*;

/// Tests getting a match with its gallery and both teams.
///
/// Expected: 200 OK with fixture, gallery, home & away team
#[tokio::test]
async fn gets_match_day() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", None)
        .with_team("t2", "Formartine United", None)
        .with_match("m1", Some("t1"), Some("t2"), Some("gallery-1"))
        .with_document_endpoint(
            "matchGallery",
            "gallery-1",
            factory::mock_match_gallery("gallery-1", Some("m1")),
            1,
        )
        .build()
        .await?;

    let result = get_match(
        State(test.to_app_state::<AppState>()),
        path("m1"),
        options(),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fixture"]["id"], "m1");
    assert_eq!(body["gallery"]["matchId"], "m1");
    assert_eq!(body["home_team"]["name"], "Banks o' Dee");
    assert_eq!(body["away_team"]["name"], "Formartine United");
    test.assert_mocks();

    Ok(())
}

/// Tests getting a match that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn missing_match_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_link_tables().build().await?;

    let result = get_match(
        State(test.to_app_state::<AppState>()),
        path("m9"),
        options(),
    )
    .await;
    let (status, _) = into_json(result).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

//! Tests for the team endpoints.

use crosslink::server::controller::team::{get_club_team, get_teams};

use super::*;

/// Tests getting the club's own team by its configured name.
///
/// Expected: 200 OK with the club team
#[tokio::test]
async fn gets_club_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", Some("team-1"))
        .with_team("t2", "Formartine United", None)
        .with_document_endpoint(
            "team",
            "team-1",
            factory::mock_team_document("team-1", Some("t1")),
            1,
        )
        .build()
        .await?;

    let result = get_club_team(State(test.to_app_state::<AppState>()), options()).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["id"], "t1");
    assert_eq!(body["document"]["_id"], "team-1");

    Ok(())
}

/// Tests the club team endpoint when no team has the club's name.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn missing_club_team_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t2", "Formartine United", None)
        .build()
        .await?;

    let result = get_club_team(State(test.to_app_state::<AppState>()), options()).await;
    let (status, _) = into_json(result).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing teams ordered by name.
///
/// Expected: 200 OK with both teams
#[tokio::test]
async fn lists_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t2", "Formartine United", None)
        .with_team("t1", "Banks o' Dee", None)
        .with_external_document_endpoint("team", "t1", Value::Null, 1)
        .with_external_document_endpoint("team", "t2", Value::Null, 1)
        .build()
        .await?;

    let result = get_teams(State(test.to_app_state::<AppState>()), options()).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["record"]["name"], "Banks o' Dee");
    assert_eq!(body[1]["record"]["name"], "Formartine United");
    test.assert_mocks();

    Ok(())
}

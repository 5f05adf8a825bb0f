//! Tests for the sponsor endpoints.

use crosslink::server::controller::sponsor::{get_featured_sponsors, get_sponsor};

use super::*;

/// Tests that only featured sponsors are listed.
///
/// Expected: 200 OK with the featured sponsor & its document
#[tokio::test]
async fn lists_featured_sponsors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, Some("sponsor-1"))
        .with_sponsor("s2", false, None)
        .with_document_endpoint(
            "sponsor",
            "sponsor-1",
            factory::mock_sponsor_document("sponsor-1", Some("s1")),
            1,
        )
        .build()
        .await?;

    let result = get_featured_sponsors(State(test.to_app_state::<AppState>()), options()).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["record"]["id"], "s1");
    assert_eq!(body[0]["document"]["_id"], "sponsor-1");
    test.assert_mocks();

    Ok(())
}

/// Tests a sponsor whose document cannot be found.
///
/// Expected: 200 OK with an empty document
#[tokio::test]
async fn sponsor_without_document() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s2", false, None)
        .with_external_document_endpoint("sponsor", "s2", Value::Null, 1)
        .build()
        .await?;

    let result = get_sponsor(
        State(test.to_app_state::<AppState>()),
        path("s2"),
        options(),
    )
    .await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["featured"], false);
    assert_eq!(body["document"], Value::Null);

    Ok(())
}

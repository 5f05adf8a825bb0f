//! Tests for the cache endpoint.

use crosslink::server::controller::cache::clear_cache;

use super::*;

/// Tests clearing the shared cache.
///
/// Expected: 200 OK with the number of dropped entries, cache empty afterwards
#[tokio::test]
async fn clears_shared_cache() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.to_app_state::<AppState>();
    state.cache.set("db:people:p1", 1_u32);
    state.cache.set("cms:playerProfile:profile-1", 1_u32);

    let result = clear_cache(State(state.clone())).await;
    let (status, body) = into_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared"], 2);
    assert!(state.cache.is_empty());

    Ok(())
}

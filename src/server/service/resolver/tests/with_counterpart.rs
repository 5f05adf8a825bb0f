//! Tests for ReferenceResolver::with_counterpart & with_counterparts.

use super::*;

/// Tests fetching a row with its linked document.
///
/// Expected: Some with the row as primary and the profile as counterpart
#[tokio::test]
async fn returns_row_with_counterpart() -> Result<(), TestError> {
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
    let cache = ReferenceCache::new();
    let resolver = ReferenceResolver::new(&test.db, &test.cms_client, &cache);

    let linked = resolver
        .with_counterpart::<entity::prelude::People, PlayerProfile>("p1", ResolveOptions::default())
        .await
        .unwrap();

    assert_eq!(linked.primary.id, "p1");
    assert_eq!(
        linked.counterpart.map(|profile| profile.id),
        Some("profile-1".to_string())
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that the primary row bypasses the cache.
///
/// Expected: None once the row is deleted, even after a cached resolution of the same id
#[tokio::test]
async fn primary_is_read_fresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_person("p1", None)
        .with_external_document_endpoint("playerProfile", "p1", Value::Null, 1)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = ReferenceResolver::new(&test.db, &test.cms_client, &cache);

    let cached = resolver
        .resolve_record_by_id::<entity::prelude::People>("p1", ResolveOptions::default())
        .await;
    assert!(cached.is_resolved());

    let linked = resolver
        .with_counterpart::<entity::prelude::People, PlayerProfile>("p1", ResolveOptions::default())
        .await;
    assert!(linked.is_some_and(|linked| linked.counterpart.is_none()));

    entity::prelude::People::delete_by_id("p1").exec(&test.db).await?;

    let linked = resolver
        .with_counterpart::<entity::prelude::People, PlayerProfile>("p1", ResolveOptions::default())
        .await;
    assert!(linked.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests that a missing row never reaches the CMS.
///
/// Expected: None, no CMS request
#[tokio::test]
async fn missing_row_skips_cms() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_external_document_endpoint("playerProfile", "p404", Value::Null, 0)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = ReferenceResolver::new(&test.db, &test.cms_client, &cache);

    let linked = resolver
        .with_counterpart::<entity::prelude::People, PlayerProfile>("p404", ResolveOptions::default())
        .await;

    assert!(linked.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests resolving counterparts for many rows at once.
///
/// Verifies that results keep the input order and that a row without a profile gets an
/// empty counterpart without affecting the others.
///
/// Expected: One entry per row, counterparts matched by position
#[tokio::test]
async fn preserves_row_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_document_endpoint(
            "playerProfile",
            "profile-1",
            factory::mock_player_profile("profile-1", Some("p1")),
            1,
        )
        .with_external_document_endpoint("playerProfile", "p2", Value::Null, 1)
        .with_failing_document_endpoint("playerProfile", "profile-3", 1)
        .with_external_document_endpoint(
            "playerProfile",
            "p4",
            factory::mock_player_profile("profile-4", Some("p4")),
            1,
        )
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = ReferenceResolver::new(&test.db, &test.cms_client, &cache);

    let people = vec![
        factory::mock_person("p1", Some("profile-1")),
        factory::mock_person("p2", None),
        factory::mock_person("p3", Some("profile-3")),
        factory::mock_person("p4", None),
    ];

    let linked = resolver
        .with_counterparts::<_, PlayerProfile>(people, ResolveOptions::default())
        .await;

    let pairs: Vec<(&str, Option<&str>)> = linked
        .iter()
        .map(|linked| {
            (
                linked.primary.id.as_str(),
                linked.counterpart.as_ref().map(|profile| profile.id.as_str()),
            )
        })
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("p1", Some("profile-1")),
            ("p2", None),
            ("p3", None),
            ("p4", Some("profile-4")),
        ]
    );
    test.assert_mocks();

    Ok(())
}

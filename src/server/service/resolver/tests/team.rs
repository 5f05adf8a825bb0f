//! Tests for TeamResolver.

use super::*;

use crate::server::service::resolver::team::TeamResolver;

/// Tests that the team list is cached until refreshed.
///
/// Expected: Cached list ignores a team added later, a fresh call includes it
#[tokio::test]
async fn caches_team_list() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_link_tables()
        .with_team("t2", "Formartine United", None)
        .with_team("t1", "Banks o' Dee", None)
        .build()
        .await?;
    let cache = ReferenceCache::new();

    let names = {
        let resolver = TeamResolver::new(&test.db, &test.cms_client, &cache);
        resolver.get_all_teams(ResolveOptions::default()).await
    };
    let names: Vec<String> = names.into_iter().map(|team| team.name).collect();
    assert_eq!(names, vec!["Banks o' Dee", "Formartine United"]);

    test.records()
        .insert_mock_team("t3", "Aberdeen Reserves", None)
        .await?;

    let resolver = TeamResolver::new(&test.db, &test.cms_client, &cache);

    let cached = resolver.get_all_teams(ResolveOptions::default()).await;
    assert_eq!(cached.len(), 2);

    let fresh = resolver.get_all_teams(ResolveOptions::fresh()).await;
    assert_eq!(fresh.len(), 3);
    assert_eq!(fresh[0].name, "Aberdeen Reserves");
    assert!(cache.contains("db:teams:@all"));

    Ok(())
}

/// Tests looking the club's own team up by name.
///
/// Expected: The team row, cached under its name
#[tokio::test]
async fn gets_club_team_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", None)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = TeamResolver::new(&test.db, &test.cms_client, &cache);

    let team = resolver
        .get_club_team("Banks o' Dee", ResolveOptions::default())
        .await;
    assert_eq!(team.map(|team| team.id), Some("t1".to_string()));
    assert!(cache.contains("db:teams:@name:Banks o' Dee"));

    let missing = resolver
        .get_club_team("Inverurie Loco Works", ResolveOptions::default())
        .await;
    assert!(missing.is_none());

    Ok(())
}

/// Tests listing teams with their documents.
///
/// Expected: Each team paired with its own document
#[tokio::test]
async fn lists_teams_with_documents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", Some("team-doc-1"))
        .with_team("t2", "Formartine United", None)
        .with_document_endpoint(
            "team",
            "team-doc-1",
            factory::mock_team_document("team-doc-1", Some("t1")),
            1,
        )
        .with_external_document_endpoint(
            "team",
            "t2",
            factory::mock_team_document("team-doc-2", Some("t2")),
            1,
        )
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = TeamResolver::new(&test.db, &test.cms_client, &cache);

    let teams = resolver
        .get_all_teams_with_documents(ResolveOptions::default())
        .await;

    let pairs: Vec<(&str, Option<&str>)> = teams
        .iter()
        .map(|linked| {
            (
                linked.primary.id.as_str(),
                linked.counterpart.as_ref().map(|doc| doc.id.as_str()),
            )
        })
        .collect();
    assert_eq!(pairs, vec![("t1", Some("team-doc-1")), ("t2", Some("team-doc-2"))]);
    test.assert_mocks();

    Ok(())
}

/// Tests restricting a team lookup to one system.
///
/// Expected: The row for System::Db and the document for System::Cms, with no request to the
/// CMS for the database lookup
#[tokio::test]
async fn finds_team_in_named_system() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", Some("team-doc-1"))
        .with_document_endpoint(
            "team",
            "team-doc-1",
            factory::mock_team_document("team-doc-1", Some("t1")),
            1,
        )
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = TeamResolver::new(&test.db, &test.cms_client, &cache);

    let from_db = resolver
        .find_team_by_any_id("t1", Some(System::Db), ResolveOptions::default())
        .await;
    assert!(matches!(from_db, Some(AnyRecord::Record(team)) if team.id == "t1"));

    let missing = resolver
        .find_team_by_any_id("team-doc-1", Some(System::Db), ResolveOptions::default())
        .await;
    assert!(missing.is_none());

    let from_cms = resolver
        .find_team_by_any_id("team-doc-1", Some(System::Cms), ResolveOptions::default())
        .await;
    assert!(matches!(from_cms, Some(AnyRecord::Document(document)) if document.id == "team-doc-1"));
    test.assert_mocks();

    Ok(())
}

//! Tests for LinkedRecordRepository.

use super::*;

use crate::server::data::linked::LinkedRecordRepository;

/// Tests fetching rows by primary key, singly and in batches.
///
/// Expected: Matching rows ordered by id, unknown ids ignored
#[tokio::test]
async fn gets_rows_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_person("p2", None)
        .with_person("p1", None)
        .build()
        .await?;

    let repo = LinkedRecordRepository::<_, entity::prelude::People>::new(&test.db);

    let person = repo.get_by_id("p1").await?;
    assert_eq!(person.map(|p| p.id), Some("p1".to_string()));
    assert!(repo.get_by_id("p404").await?.is_none());

    let people = repo.get_many_by_ids(&["p2", "p404", "p1"]).await?;
    let ids: Vec<&str> = people.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);

    assert!(repo.get_many_by_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests finding a row by back-reference, with and without a draft prefix.
///
/// Expected: The same row for both ids
#[tokio::test]
async fn gets_row_by_sanity_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, Some("sponsor-doc-1"))
        .build()
        .await?;

    let repo = LinkedRecordRepository::<_, entity::prelude::Sponsors>::new(&test.db);

    let published = repo.get_by_sanity_id("sponsor-doc-1").await?;
    let draft = repo.get_by_sanity_id("drafts.sponsor-doc-1").await?;

    assert_eq!(published.map(|s| s.id), Some("s1".to_string()));
    assert_eq!(draft.map(|s| s.id), Some("s1".to_string()));

    Ok(())
}

/// Tests setting and clearing a back-reference.
///
/// Verifies that a draft id is stored as its published id and that updating an unknown row
/// reports no change.
///
/// Expected: true for the existing row, false for an unknown one
#[tokio::test]
async fn sets_and_clears_sanity_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", None)
        .build()
        .await?;

    let repo = LinkedRecordRepository::<_, entity::prelude::Teams>::new(&test.db);

    assert!(repo.set_sanity_id("t1", Some("drafts.team-doc-1")).await?);
    let team = entity::prelude::Teams::find_by_id("t1").one(&test.db).await?;
    assert_eq!(
        team.and_then(|t| t.sanity_id),
        Some("team-doc-1".to_string())
    );

    assert!(repo.set_sanity_id("t1", None).await?);
    let team = entity::prelude::Teams::find_by_id("t1").one(&test.db).await?;
    assert_eq!(team.and_then(|t| t.sanity_id), None);

    assert!(!repo.set_sanity_id("t404", Some("team-doc-1")).await?);

    Ok(())
}

/// Tests a query against a table that was never created.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = LinkedRecordRepository::<_, entity::prelude::Match>::new(&test.db);
    let result = repo.get_by_id("m1").await;

    assert!(result.is_err());

    Ok(())
}

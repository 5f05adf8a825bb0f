//! Tests for DocumentLinkService.

use super::*;

use crate::server::{
    model::cms::{SponsorDocument, TeamDocument},
    service::link::DocumentLinkService,
};

/// Tests a document that names no row.
///
/// Expected: Ok(None), nothing written, cached team references dropped
#[tokio::test]
async fn document_without_external_id_links_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_team("t1", "Banks o' Dee", None)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    cache.set("db:teams:t1", 1_u32);
    let links = DocumentLinkService::new(&test.db, &cache);

    let document: TeamDocument =
        serde_json::from_value(factory::mock_team_document("team-1", None)).unwrap();
    let linked = links
        .link_document::<entity::prelude::Teams, TeamDocument>(&document)
        .await
        .unwrap();

    assert_eq!(linked, None);
    assert!(!cache.contains("db:teams:t1"));
    let team = entity::prelude::Teams::find_by_id("t1")
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(team.sanity_id, None);

    Ok(())
}

/// Tests deleting a document after its row was relinked elsewhere.
///
/// Expected: Ok(None), the row keeps its link to the newer document
#[tokio::test]
async fn unlink_leaves_relinked_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, Some("sponsor-2"))
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let links = DocumentLinkService::new(&test.db, &cache);

    let unlinked = links
        .unlink_document::<entity::prelude::Sponsors, SponsorDocument>("sponsor-1")
        .await
        .unwrap();

    assert_eq!(unlinked, None);
    let sponsor = entity::prelude::Sponsors::find_by_id("s1")
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(sponsor.sanity_id.as_deref(), Some("sponsor-2"));

    Ok(())
}

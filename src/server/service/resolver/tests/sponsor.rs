//! Tests for SponsorResolver.

use super::*;

use crate::server::service::resolver::sponsor::SponsorResolver;

/// Tests listing featured sponsors with their documents.
///
/// Verifies that sponsors not flagged as featured are left out and that a sponsor without a
/// document is still listed.
///
/// Expected: Featured sponsors ordered by name, one with a document
#[tokio::test]
async fn lists_featured_sponsors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, Some("sponsor-doc-1"))
        .with_sponsor("s2", true, None)
        .with_sponsor("s3", false, Some("sponsor-doc-3"))
        .with_document_endpoint(
            "sponsor",
            "sponsor-doc-1",
            factory::mock_sponsor_document("sponsor-doc-1", Some("s1")),
            1,
        )
        .with_external_document_endpoint("sponsor", "s2", Value::Null, 1)
        .with_document_endpoint("sponsor", "sponsor-doc-3", Value::Null, 0)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = SponsorResolver::new(&test.db, &test.cms_client, &cache);

    let sponsors = resolver
        .get_featured_sponsors_with_documents(ResolveOptions::default())
        .await;

    let ids: Vec<(&str, bool)> = sponsors
        .iter()
        .map(|linked| (linked.primary.id.as_str(), linked.counterpart.is_some()))
        .collect();
    assert_eq!(ids, vec![("s1", true), ("s2", false)]);
    test.assert_mocks();

    Ok(())
}

/// Tests resolving a sponsor row from its document.
///
/// Expected: The row the document's supabaseId names
#[tokio::test]
async fn resolves_sponsor_from_document() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", true, None)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = SponsorResolver::new(&test.db, &test.cms_client, &cache);

    let document: SponsorDocument =
        serde_json::from_value(factory::mock_sponsor_document("sponsor-doc-1", Some("s1")))
            .unwrap();

    let sponsor = resolver
        .resolve_sponsor_from_document(Some(&document), ResolveOptions::default())
        .await;

    assert_eq!(sponsor.map(|sponsor| sponsor.id), Some("s1".to_string()));

    Ok(())
}

/// Tests the document of a sponsor with no linked document.
///
/// Expected: None after a single reverse lookup
#[tokio::test]
async fn sponsor_without_document_resolves_to_none() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_external_document_endpoint("sponsor", "s1", Value::Null, 1)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = SponsorResolver::new(&test.db, &test.cms_client, &cache);

    let sponsor = factory::mock_sponsor("s1", true, None);
    let document = resolver
        .resolve_sponsor_document_from_record(Some(&sponsor), ResolveOptions::default())
        .await;

    assert!(document.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests finding a sponsor by row id before document id.
///
/// Expected: AnyRecord::Record without a CMS request
#[tokio::test]
async fn finds_sponsor_row_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_sponsor("s1", false, Some("sponsor-doc-1"))
        .with_document_endpoint("sponsor", "s1", Value::Null, 0)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = SponsorResolver::new(&test.db, &test.cms_client, &cache);

    let found = resolver
        .find_sponsor_by_any_id("s1", None, ResolveOptions::default())
        .await;

    assert!(matches!(found, Some(AnyRecord::Record(sponsor)) if sponsor.id == "s1"));
    test.assert_mocks();

    Ok(())
}

/// Tests falling back to the sponsor document when no row has the id.
///
/// Expected: AnyRecord::Document
#[tokio::test]
async fn finds_sponsor_document_when_no_row_matches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_link_tables()
        .with_document_endpoint(
            "sponsor",
            "sponsor-doc-1",
            factory::mock_sponsor_document("sponsor-doc-1", Some("s1")),
            1,
        )
        .build()
        .await?;
    let cache = ReferenceCache::new();
    let resolver = SponsorResolver::new(&test.db, &test.cms_client, &cache);

    let found = resolver
        .find_sponsor_by_any_id("sponsor-doc-1", None, ResolveOptions::default())
        .await;

    assert!(
        matches!(found, Some(AnyRecord::Document(document)) if document.id == "sponsor-doc-1")
    );
    test.assert_mocks();

    Ok(())
}

//! Tests for LinkAuditService::repair.

use super::*;

/// Tests repairing every repairable finding.
///
/// Verifies that missing back-references are written to the database, missing forward
/// references are patched into the CMS, drift is left alone and the player cache is dropped.
///
/// Expected: One repair of each kind, two skipped, cache emptied for players
#[tokio::test]
async fn repairs_missing_halves() -> Result<(), TestError> {
    let test = drifted_players()
        .with_set_field_endpoint("profile-3", "supabaseId", json!("p3"), 1)
        .build()
        .await?;
    let cache = ReferenceCache::new();
    cache.set("db:people:p2", 1_u32);
    cache.set("cms:playerProfile:@external:p3", 2_u32);
    cache.set("db:teams:@all", 3_u32);

    let service = LinkAuditService::new(&test.db, &test.cms_client, &cache);
    let findings = service.audit_players().await.unwrap();

    let report = LinkReport::from_findings(findings);

    let summary = service.repair(&report).await;

    assert_eq!(summary.back_references_set, 1);
    assert_eq!(summary.forward_references_set, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);

    let p2 = entity::prelude::People::find_by_id("p2").one(&test.db).await?;
    assert_eq!(p2.and_then(|p| p.sanity_id), Some("profile-2".to_string()));

    let p4 = entity::prelude::People::find_by_id("p4").one(&test.db).await?;
    assert_eq!(p4.and_then(|p| p.sanity_id), Some("profile-4".to_string()));

    assert!(!cache.contains("db:people:p2"));
    assert!(!cache.contains("cms:playerProfile:@external:p3"));
    assert!(cache.contains("db:teams:@all"));
    test.assert_mocks();

    Ok(())
}

/// Tests that a failed CMS patch is counted and does not stop other repairs.
///
/// Expected: One failure, the database repair still applied
#[tokio::test]
async fn counts_failed_repairs() -> Result<(), TestError> {
    let test = drifted_players().build().await?;
    let cache = ReferenceCache::new();
    let service = LinkAuditService::new(&test.db, &test.cms_client, &cache);

    let report = LinkReport::from_findings(service.audit_players().await.unwrap());
    let summary = service.repair(&report).await;

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.back_references_set, 1);

    Ok(())
}

mod document;
mod repair;

use crosslink_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::{json, Value};

use crate::server::service::{
    link::{LinkAuditService, LinkReport, LinkStatus, LinkedEntity, ProfileSyncService},
    resolver::ReferenceCache,
};

/// Rows & documents covering every link state, keyed by the row id they describe
///
/// - p1 & profile-1 point at each other
/// - profile-2 points at p2, p2 has no back-reference
/// - p3 points at profile-3, profile-3 has no supabaseId
/// - p4 points at profile-4, profile-4 points at p9
/// - p5 points at a profile that does not exist
/// - p6 is not linked at all
fn drifted_players() -> TestBuilder {
    TestBuilder::new()
        .with_link_tables()
        .with_person("p1", Some("profile-1"))
        .with_person("p2", None)
        .with_person("p3", Some("profile-3"))
        .with_person("p4", Some("profile-4"))
        .with_person("p5", Some("profile-gone"))
        .with_person("p6", None)
        .with_all_documents_endpoint(
            "playerProfile",
            vec![
                factory::mock_player_profile("profile-1", Some("p1")),
                factory::mock_player_profile("profile-2", Some("p2")),
                factory::mock_player_profile("profile-3", None),
                factory::mock_player_profile("profile-4", Some("p9")),
            ],
            1,
        )
}

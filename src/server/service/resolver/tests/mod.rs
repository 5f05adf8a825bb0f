mod sponsor;
mod team;
mod with_counterpart;

use crosslink_test_utils::prelude::*;
use sea_orm::EntityTrait;
use serde_json::Value;

use crate::server::{
    model::cms::{MatchGallery, PlayerProfile, SponsorDocument, TeamDocument},
    service::resolver::{
        AnyRecord, ReferenceCache, ReferenceResolver, Resolution, ResolveOptions, System,
    },
};

fn profile(document_id: &str, supabase_id: Option<&str>) -> PlayerProfile {
    serde_json::from_value(factory::mock_player_profile(document_id, supabase_id)).unwrap()
}

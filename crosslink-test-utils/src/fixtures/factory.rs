//! Mock rows and CMS documents with default test values.
//!
//! Row factories return entity models ready to insert. Document factories return raw JSON in
//! the shape the Sanity query endpoint serves, so the code under test exercises its own
//! deserialization.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde_json::{json, Value};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn kick_off() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 2)
        .and_then(|d| d.and_hms_opt(15, 0, 0))
        .unwrap()
}

/// Create a mock player row
///
/// # Arguments
/// - `id` - Primary key of the row
/// - `sanity_id` - Optional back-reference to a `playerProfile` document
pub fn mock_person(id: &str, sanity_id: Option<&str>) -> entity::people::Model {
    entity::people::Model {
        id: id.to_string(),
        name: format!("Player {}", id),
        first_name: Some("Player".to_string()),
        last_name: Some(id.to_string()),
        position: "player".to_string(),
        player_position: Some("Midfielder".to_string()),
        staff_role: None,
        nationality: Some("Scotland".to_string()),
        jersey_number: Some(8),
        image_url: None,
        sanity_id: sanity_id.map(str::to_string),
        created_at: now(),
        updated_at: now(),
    }
}

/// Create a mock member of staff, a `people` row without a player position
pub fn mock_staff(id: &str, sanity_id: Option<&str>) -> entity::people::Model {
    entity::people::Model {
        name: format!("Staff {}", id),
        first_name: Some("Staff".to_string()),
        position: "staff".to_string(),
        player_position: None,
        staff_role: Some("Manager".to_string()),
        jersey_number: None,
        ..mock_person(id, sanity_id)
    }
}

pub fn mock_team(id: &str, name: &str, sanity_id: Option<&str>) -> entity::teams::Model {
    entity::teams::Model {
        id: id.to_string(),
        name: name.to_string(),
        short_name: None,
        logo_url: None,
        sanity_id: sanity_id.map(str::to_string),
        created_at: now(),
        updated_at: now(),
    }
}

/// Create a mock fixture between two teams
pub fn mock_match(
    id: &str,
    home_team_id: Option<&str>,
    away_team_id: Option<&str>,
    sanity_id: Option<&str>,
) -> entity::matches::Model {
    entity::matches::Model {
        id: id.to_string(),
        home_team_id: home_team_id.map(str::to_string),
        away_team_id: away_team_id.map(str::to_string),
        match_date: kick_off(),
        competition: Some("Highland League".to_string()),
        venue: Some("Spain Park".to_string()),
        home_score: Some(2),
        away_score: Some(1),
        status: "completed".to_string(),
        sanity_id: sanity_id.map(str::to_string),
        created_at: now(),
        updated_at: now(),
    }
}

pub fn mock_sponsor(id: &str, featured: bool, sanity_id: Option<&str>) -> entity::sponsors::Model {
    entity::sponsors::Model {
        id: id.to_string(),
        name: format!("Sponsor {}", id),
        website: Some("https://example.com".to_string()),
        tier: Some("gold".to_string()),
        featured,
        logo_url: None,
        sanity_id: sanity_id.map(str::to_string),
        created_at: now(),
        updated_at: now(),
    }
}

/// Create a mock `playerProfile` document
///
/// # Arguments
/// - `document_id` - The document `_id`
/// - `supabase_id` - Optional external id pointing at a `people` row
pub fn mock_player_profile(document_id: &str, supabase_id: Option<&str>) -> Value {
    json!({
        "_id": document_id,
        "_type": "playerProfile",
        "supabaseId": supabase_id,
        "playerName": format!("Profile {}", document_id),
        "firstName": "Profile",
        "lastName": document_id,
        "playerPosition": "Midfielder",
        "nationality": "Scotland",
        "jerseyNumber": 8,
        "profileImage": {
            "asset": {
                "_ref": "image-abc-400x400-jpg",
                "url": "https://cdn.sanity.io/images/test/production/abc-400x400.jpg"
            }
        }
    })
}

pub fn mock_match_gallery(document_id: &str, match_id: Option<&str>) -> Value {
    json!({
        "_id": document_id,
        "_type": "matchGallery",
        "matchId": match_id,
        "title": "Banks o' Dee v Formartine United",
        "matchDate": "2025-08-02",
        "folderName": "2025-08-02-formartine",
        "homeTeam": "Banks o' Dee",
        "awayTeam": "Formartine United"
    })
}

pub fn mock_sponsor_document(document_id: &str, supabase_id: Option<&str>) -> Value {
    json!({
        "_id": document_id,
        "_type": "sponsor",
        "supabaseId": supabase_id,
        "name": format!("Sponsor {}", document_id),
        "website": "https://example.com",
        "tier": "gold",
        "featured": true
    })
}

pub fn mock_team_document(document_id: &str, supabase_id: Option<&str>) -> Value {
    json!({
        "_id": document_id,
        "_type": "team",
        "supabaseId": supabase_id,
        "name": format!("Team {}", document_id),
        "shortName": "TEAM"
    })
}

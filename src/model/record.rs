//! Database rows as returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonRecordDto {
    pub id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `player` or `staff`
    pub position: String,
    pub player_position: Option<String>,
    pub staff_role: Option<String>,
    pub nationality: Option<String>,
    pub jersey_number: Option<i32>,
    pub image_url: Option<String>,
    /// Id of the linked `playerProfile` document
    pub sanity_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamRecordDto {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
    pub sanity_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchRecordDto {
    pub id: String,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub match_date: NaiveDateTime,
    pub competition: Option<String>,
    pub venue: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: String,
    /// Id of the linked `matchGallery` document
    pub sanity_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SponsorRecordDto {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub tier: Option<String>,
    pub featured: bool,
    pub logo_url: Option<String>,
    pub sanity_id: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<entity::people::Model> for PersonRecordDto {
    fn from(person: entity::people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            first_name: person.first_name,
            last_name: person.last_name,
            position: person.position,
            player_position: person.player_position,
            staff_role: person.staff_role,
            nationality: person.nationality,
            jersey_number: person.jersey_number,
            image_url: person.image_url,
            sanity_id: person.sanity_id,
            updated_at: person.updated_at,
        }
    }
}

impl From<entity::teams::Model> for TeamRecordDto {
    fn from(team: entity::teams::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
            logo_url: team.logo_url,
            sanity_id: team.sanity_id,
            updated_at: team.updated_at,
        }
    }
}

impl From<entity::matches::Model> for MatchRecordDto {
    fn from(fixture: entity::matches::Model) -> Self {
        Self {
            id: fixture.id,
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            match_date: fixture.match_date,
            competition: fixture.competition,
            venue: fixture.venue,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            status: fixture.status,
            sanity_id: fixture.sanity_id,
            updated_at: fixture.updated_at,
        }
    }
}

impl From<entity::sponsors::Model> for SponsorRecordDto {
    fn from(sponsor: entity::sponsors::Model) -> Self {
        Self {
            id: sponsor.id,
            name: sponsor.name,
            website: sponsor.website,
            tier: sponsor.tier,
            featured: sponsor.featured,
            logo_url: sponsor.logo_url,
            sanity_id: sponsor.sanity_id,
            updated_at: sponsor.updated_at,
        }
    }
}

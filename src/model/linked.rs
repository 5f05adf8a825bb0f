//! Rows paired with their CMS documents.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    model::record::{MatchRecordDto, PersonRecordDto, SponsorRecordDto, TeamRecordDto},
    server::{
        model::cms::{MatchGallery, PlayerProfile, SponsorDocument, TeamDocument},
        service::resolver::{
            matches::MatchDay, player::PlayerWithProfile, sponsor::SponsorWithDocument,
            team::TeamWithDocument,
        },
    },
};

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct PlayerDto {
    pub record: PersonRecordDto,
    /// `None` when the player has no published profile
    pub profile: Option<PlayerProfile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct SponsorDto {
    pub record: SponsorRecordDto,
    pub document: Option<SponsorDocument>,
}

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct TeamDto {
    pub record: TeamRecordDto,
    pub document: Option<TeamDocument>,
}

/// A fixture with its gallery and both teams
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct MatchDayDto {
    pub fixture: MatchRecordDto,
    pub gallery: Option<MatchGallery>,
    pub home_team: Option<TeamRecordDto>,
    pub away_team: Option<TeamRecordDto>,
}

impl From<PlayerWithProfile> for PlayerDto {
    fn from(player: PlayerWithProfile) -> Self {
        Self {
            record: player.primary.into(),
            profile: player.counterpart,
        }
    }
}

impl From<SponsorWithDocument> for SponsorDto {
    fn from(sponsor: SponsorWithDocument) -> Self {
        Self {
            record: sponsor.primary.into(),
            document: sponsor.counterpart,
        }
    }
}

impl From<TeamWithDocument> for TeamDto {
    fn from(team: TeamWithDocument) -> Self {
        Self {
            record: team.primary.into(),
            document: team.counterpart,
        }
    }
}

impl From<MatchDay> for MatchDayDto {
    fn from(match_day: MatchDay) -> Self {
        Self {
            fixture: match_day.fixture.into(),
            gallery: match_day.gallery,
            home_team: match_day.home_team.map(Into::into),
            away_team: match_day.away_team.map(Into::into),
        }
    }
}

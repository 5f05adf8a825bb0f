use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A fixture or result, the `match` table
///
/// `sanity_id` links to the `matchGallery` document holding photos of the match.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub match_date: DateTime,
    pub competition: Option<String>,
    pub venue: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: String,
    pub sanity_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::HomeTeamId",
        to = "super::teams::Column::Id"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::AwayTeamId",
        to = "super::teams::Column::Id"
    )]
    AwayTeam,
}

impl ActiveModelBehavior for ActiveModel {}

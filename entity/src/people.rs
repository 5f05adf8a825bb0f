use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A player or member of staff
///
/// Players carry a `player_position`, staff a `staff_role`. `sanity_id` is the published id of
/// the linked `playerProfile` document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: String,
    pub player_position: Option<String>,
    pub staff_role: Option<String>,
    pub nationality: Option<String>,
    pub jersey_number: Option<i32>,
    pub image_url: Option<String>,
    pub sanity_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

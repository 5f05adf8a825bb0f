use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Fields of a `people` row that are written from a CMS player profile
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileFields {
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `player` or `staff`, left unchanged on update when unknown
    pub position: Option<String>,
    pub player_position: Option<String>,
    pub staff_role: Option<String>,
    pub nationality: String,
    pub jersey_number: Option<i32>,
    pub image_url: Option<String>,
    /// Published id of the profile document
    pub sanity_id: String,
}

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every player, people with a player position, ordered by name
    pub async fn get_players(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .filter(entity::people::Column::PlayerPosition.is_not_null())
            .order_by_asc(entity::people::Column::Name)
            .all(self.db)
            .await
    }

    /// Update the row with `id` from profile fields, or create it
    ///
    /// A new row takes `id` when given, otherwise a fresh UUID.
    pub async fn upsert_profile(
        &self,
        id: Option<&str>,
        fields: ProfileFields,
    ) -> Result<entity::people::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let existing = match id {
            Some(id) => {
                entity::prelude::People::find_by_id(id.to_string())
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        if let Some(existing) = existing {
            let mut person: entity::people::ActiveModel = existing.into();

            person.name = ActiveValue::Set(fields.name);
            person.first_name = ActiveValue::Set(fields.first_name);
            person.last_name = ActiveValue::Set(fields.last_name);
            if let Some(position) = fields.position {
                person.position = ActiveValue::Set(position);
            }
            person.player_position = ActiveValue::Set(fields.player_position);
            person.staff_role = ActiveValue::Set(fields.staff_role);
            person.nationality = ActiveValue::Set(Some(fields.nationality));
            if fields.jersey_number.is_some() {
                person.jersey_number = ActiveValue::Set(fields.jersey_number);
            }
            person.image_url = ActiveValue::Set(fields.image_url);
            person.sanity_id = ActiveValue::Set(Some(fields.sanity_id));
            person.updated_at = ActiveValue::Set(now);

            return person.update(self.db).await;
        }

        let id = id
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let person = entity::people::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(fields.name),
            first_name: ActiveValue::Set(fields.first_name),
            last_name: ActiveValue::Set(fields.last_name),
            position: ActiveValue::Set(fields.position.unwrap_or_else(|| "player".to_string())),
            player_position: ActiveValue::Set(fields.player_position),
            staff_role: ActiveValue::Set(fields.staff_role),
            nationality: ActiveValue::Set(Some(fields.nationality)),
            jersey_number: ActiveValue::Set(fields.jersey_number),
            image_url: ActiveValue::Set(fields.image_url),
            sanity_id: ActiveValue::Set(Some(fields.sanity_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        person.insert(self.db).await
    }
}

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get every team ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::teams::Model>, DbErr> {
        entity::prelude::Teams::find()
            .order_by_asc(entity::teams::Column::Name)
            .all(self.db)
            .await
    }

    /// Get a team by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::teams::Model>, DbErr> {
        entity::prelude::Teams::find()
            .filter(entity::teams::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}

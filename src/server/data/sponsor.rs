use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SponsorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SponsorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get sponsors flagged as featured, ordered by name
    pub async fn get_featured(&self) -> Result<Vec<entity::sponsors::Model>, DbErr> {
        entity::prelude::Sponsors::find()
            .filter(entity::sponsors::Column::Featured.eq(true))
            .order_by_asc(entity::sponsors::Column::Name)
            .all(self.db)
            .await
    }
}

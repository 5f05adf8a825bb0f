//! Generic access to tables whose rows link to a CMS document.
//!
//! Every linked table has a string primary key `id`, a nullable `sanity_id` back-reference and
//! an `updated_at` timestamp. [`RecordTable`] names those columns so lookups and back-reference
//! writes are written once for all of them.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::service::resolver::DocumentSource;

/// A table whose rows can be linked to CMS documents
pub trait RecordTable: EntityTrait<Model: DocumentSource + Sync + 'static> {
    /// Table name, also used in cache keys
    const TABLE: &'static str;

    fn id_column() -> Self::Column;

    fn sanity_id_column() -> Self::Column;

    fn updated_at_column() -> Self::Column;
}

macro_rules! record_table {
    ($module:ident, $entity:ty, $table:literal) => {
        impl RecordTable for $entity {
            const TABLE: &'static str = $table;

            fn id_column() -> Self::Column {
                entity::$module::Column::Id
            }

            fn sanity_id_column() -> Self::Column {
                entity::$module::Column::SanityId
            }

            fn updated_at_column() -> Self::Column {
                entity::$module::Column::UpdatedAt
            }
        }

        impl DocumentSource for entity::$module::Model {
            fn record_id(&self) -> &str {
                &self.id
            }

            fn sanity_id(&self) -> Option<&str> {
                self.sanity_id.as_deref()
            }
        }
    };
}

record_table!(people, entity::prelude::People, "people");
record_table!(matches, entity::prelude::Match, "match");
record_table!(sponsors, entity::prelude::Sponsors, "sponsors");
record_table!(teams, entity::prelude::Teams, "teams");

pub struct LinkedRecordRepository<'a, C: ConnectionTrait, E: RecordTable> {
    db: &'a C,
    _table: std::marker::PhantomData<E>,
}

impl<'a, C: ConnectionTrait, E: RecordTable> LinkedRecordRepository<'a, C, E> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _table: std::marker::PhantomData,
        }
    }

    /// Get a row by primary key
    pub async fn get_by_id(&self, id: &str) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await
    }

    /// Get every row whose primary key is in `ids`, ordered by id
    pub async fn get_many_by_ids(&self, ids: &[&str]) -> Result<Vec<E::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        E::find()
            .filter(E::id_column().is_in(ids.iter().copied()))
            .order_by_asc(E::id_column())
            .all(self.db)
            .await
    }

    /// Get the row whose back-reference is `sanity_id`
    ///
    /// A `drafts.` prefix is stripped first, back-references always hold the published id.
    pub async fn get_by_sanity_id(&self, sanity_id: &str) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::sanity_id_column().eq(sanity_client::published_id(sanity_id)))
            .one(self.db)
            .await
    }

    /// Get every row, ordered by id
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().order_by_asc(E::id_column()).all(self.db).await
    }

    /// Set or clear a row's back-reference
    ///
    /// # Returns
    /// - `Ok(true)` if the row exists and was updated
    /// - `Ok(false)` if no row has the given id
    pub async fn set_sanity_id(&self, id: &str, sanity_id: Option<&str>) -> Result<bool, DbErr> {
        let sanity_id = sanity_id.map(|id| sanity_client::published_id(id).to_string());

        let result = E::update_many()
            .col_expr(E::sanity_id_column(), Expr::value(sanity_id))
            .col_expr(E::updated_at_column(), Expr::value(Utc::now().naive_utc()))
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

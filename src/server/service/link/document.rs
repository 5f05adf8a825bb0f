use sea_orm::DatabaseConnection;

use crate::server::{
    data::linked::{LinkedRecordRepository, RecordTable},
    error::Error,
    model::cms::CmsDocument,
    service::resolver::{key, source::non_empty, DocumentSource, ReferenceCache},
};

/// Keeps a row's `sanity_id` pointed at the document that names it
///
/// Used for the document types whose content stays in the CMS. Only the back-reference is
/// written, the row's own columns are left alone.
pub struct DocumentLinkService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ReferenceCache,
}

impl<'a> DocumentLinkService<'a> {
    /// Creates a new instance of [`DocumentLinkService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a ReferenceCache) -> Self {
        Self { db, cache }
    }

    /// Point the row named by the document's external id back at the document
    ///
    /// Cached references for the table and document type are dropped either way.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The row that now links to the document
    /// - `Ok(None)` - The document names no row, or the row does not exist
    /// - `Err(DbErr)` - Writing the row failed
    pub async fn link_document<E: RecordTable, D: CmsDocument>(
        &self,
        document: &D,
    ) -> Result<Option<String>, Error> {
        let linked = match non_empty(document.external_id()) {
            Some(record_id) => {
                let updated = LinkedRecordRepository::<_, E>::new(self.db)
                    .set_sanity_id(record_id, Some(document.document_id()))
                    .await?;

                if updated {
                    tracing::info!(
                        "Linked {} row {} to {} {}",
                        E::TABLE,
                        record_id,
                        D::DOCUMENT_TYPE,
                        document.document_id()
                    );
                } else {
                    tracing::warn!(
                        "{} {} names {} row {} which does not exist",
                        D::DOCUMENT_TYPE,
                        document.document_id(),
                        E::TABLE,
                        record_id
                    );
                }

                updated.then(|| record_id.to_string())
            }
            None => {
                tracing::debug!(
                    "{} {} has no {}",
                    D::DOCUMENT_TYPE,
                    document.document_id(),
                    D::EXTERNAL_ID_FIELD
                );

                None
            }
        };

        self.invalidate::<E, D>();

        Ok(linked)
    }

    /// Clear the back-reference of the row linked to a deleted document
    ///
    /// The row is found by its `sanity_id`, so a row since relinked to another document keeps
    /// its link. The row itself is kept.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The row that was unlinked
    /// - `Ok(None)` - No row linked to the document
    /// - `Err(DbErr)` - Reading or writing the row failed
    pub async fn unlink_document<E: RecordTable, D: CmsDocument>(
        &self,
        document_id: &str,
    ) -> Result<Option<String>, Error> {
        let repo = LinkedRecordRepository::<_, E>::new(self.db);

        let unlinked = match repo.get_by_sanity_id(document_id).await? {
            Some(row) => {
                let record_id = row.record_id().to_string();
                repo.set_sanity_id(&record_id, None).await?;

                tracing::info!(
                    "Unlinked {} row {} from deleted {} {}",
                    E::TABLE,
                    record_id,
                    D::DOCUMENT_TYPE,
                    document_id
                );

                Some(record_id)
            }
            None => {
                tracing::debug!(
                    "No {} row linked to deleted {} {}",
                    E::TABLE,
                    D::DOCUMENT_TYPE,
                    document_id
                );

                None
            }
        };

        self.invalidate::<E, D>();

        Ok(unlinked)
    }

    fn invalidate<E: RecordTable, D: CmsDocument>(&self) {
        self.cache.delete_prefix(&key::table_prefix(E::TABLE));
        self.cache
            .delete_prefix(&key::document_type_prefix(D::DOCUMENT_TYPE));
    }
}

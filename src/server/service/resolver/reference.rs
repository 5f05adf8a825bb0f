use std::collections::HashSet;

use futures::future::join_all;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cms::DocumentRepository,
        linked::{LinkedRecordRepository, RecordTable},
    },
    model::cms::CmsDocument,
    service::resolver::{
        key,
        source::{non_empty, DocumentSource, RecordSource},
        AnyRecord, Linked, ReferenceCache, Resolution, ResolveOptions, System,
    },
};

/// Generic resolver between linked tables and CMS document types
///
/// Every `resolve_*` method goes through the cache and absorbs failures: a broken query is
/// logged and reported as [`Resolution::QueryFailed`], never returned as an error. `fetch_*`
/// methods skip the cache entirely.
pub struct ReferenceResolver<'a> {
    db: &'a DatabaseConnection,
    cms: &'a sanity_client::Client,
    cache: &'a ReferenceCache,
}

/// Distinct ids in first-seen order
fn unique<'s>(ids: impl Iterator<Item = &'s str>) -> Vec<&'s str> {
    let mut seen = HashSet::new();

    ids.filter(|id| seen.insert(*id)).collect()
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self { db, cms, cache }
    }

    /// Resolve the row a CMS-side source points at
    ///
    /// The row id is the source's external-id field, or its own id when it has none. A missing
    /// source or one without a usable id is [`Resolution::NotLinked`] and issues no query.
    pub async fn resolve_record<E, S>(
        &self,
        source: Option<&S>,
        options: ResolveOptions,
    ) -> Resolution<E::Model>
    where
        E: RecordTable,
        S: RecordSource + ?Sized,
    {
        let Some(source) = source else {
            return Resolution::NotLinked;
        };

        let Some(record_id) = source.record_id() else {
            tracing::debug!("Source has no id linking it to a {} row", E::TABLE);

            return Resolution::NotLinked;
        };

        self.resolve_record_by_id::<E>(record_id, options).await
    }

    /// Resolve a row by primary key through the cache, key `db:{table}:{id}`
    pub async fn resolve_record_by_id<E: RecordTable>(
        &self,
        id: &str,
        options: ResolveOptions,
    ) -> Resolution<E::Model> {
        let key = key::record(E::TABLE, id);

        self.cache
            .get_or_set(&key, || self.fetch_record::<E>(id), options.skip_cache)
            .await
    }

    /// Fetch a row by primary key without touching the cache
    pub async fn fetch_record<E: RecordTable>(&self, id: &str) -> Resolution<E::Model> {
        let result = LinkedRecordRepository::<_, E>::new(self.db)
            .get_by_id(id)
            .await;

        Resolution::from_lookup(result, &format!("Failed to fetch {} row {}", E::TABLE, id))
    }

    /// Resolve the CMS document linked to a row
    ///
    /// Looks the document up by the row's `sanity_id` first. Only when the row has no
    /// back-reference, or it names a document that does not exist, does it fall back to a
    /// reverse lookup on the document type's external-id field. A failed direct lookup is
    /// returned as is.
    pub async fn resolve_document<D, S>(
        &self,
        source: Option<&S>,
        options: ResolveOptions,
    ) -> Resolution<D>
    where
        D: CmsDocument,
        S: DocumentSource + ?Sized,
    {
        let Some(source) = source else {
            return Resolution::NotLinked;
        };

        if let Some(document_id) = non_empty(source.sanity_id()) {
            match self
                .resolve_document_by_id::<D>(document_id, options)
                .await
            {
                Resolution::NotFound => tracing::debug!(
                    "{} {} named by row {} does not exist, trying reverse lookup",
                    D::DOCUMENT_TYPE,
                    document_id,
                    source.record_id()
                ),
                resolution => return resolution,
            }
        }

        let record_id = source.record_id();
        if record_id.trim().is_empty() {
            return Resolution::NotLinked;
        }

        self.resolve_document_by_external_id::<D>(record_id, options)
            .await
    }

    /// Resolve a document by `_id`, key `cms:{type}:{id}`
    pub async fn resolve_document_by_id<D: CmsDocument>(
        &self,
        document_id: &str,
        options: ResolveOptions,
    ) -> Resolution<D> {
        let key = key::document(D::DOCUMENT_TYPE, document_id);

        self.cache
            .get_or_set(
                &key,
                || async {
                    let result = DocumentRepository::new(self.cms)
                        .get_by_id::<D>(document_id)
                        .await;

                    Resolution::from_lookup(
                        result,
                        &format!("Failed to fetch {} {}", D::DOCUMENT_TYPE, document_id),
                    )
                },
                options.skip_cache,
            )
            .await
    }

    /// Resolve a document by reverse lookup, key `cms:{type}:@external:{record_id}`
    pub async fn resolve_document_by_external_id<D: CmsDocument>(
        &self,
        record_id: &str,
        options: ResolveOptions,
    ) -> Resolution<D> {
        let key = key::external_document(D::DOCUMENT_TYPE, record_id);

        self.cache
            .get_or_set(
                &key,
                || async {
                    let result = DocumentRepository::new(self.cms)
                        .get_by_external_id::<D>(record_id)
                        .await;

                    Resolution::from_lookup(
                        result,
                        &format!(
                            "Failed to find {} with {} {}",
                            D::DOCUMENT_TYPE,
                            D::EXTERNAL_ID_FIELD,
                            record_id
                        ),
                    )
                },
                options.skip_cache,
            )
            .await
    }

    /// Resolve the rows a batch of CMS-side sources point at with a single query
    ///
    /// Sources without a usable id are skipped, duplicates are queried once. Rows come back
    /// ordered by id; a failed query yields an empty list.
    pub async fn resolve_records<E, S>(&self, sources: &[S], options: ResolveOptions) -> Vec<E::Model>
    where
        E: RecordTable,
        S: RecordSource,
    {
        let ids = unique(sources.iter().filter_map(|source| source.record_id()));
        if ids.is_empty() {
            return Vec::new();
        }

        let key = key::records(E::TABLE, &ids);

        self.cache
            .get_or_set(
                &key,
                || async {
                    LinkedRecordRepository::<_, E>::new(self.db)
                        .get_many_by_ids(&ids)
                        .await
                        .unwrap_or_else(|err| {
                            tracing::error!("Failed to fetch {} rows {:?}: {}", E::TABLE, ids, err);

                            Vec::new()
                        })
                },
                options.skip_cache,
            )
            .await
    }

    /// Resolve the documents linked to a batch of rows
    ///
    /// Rows with a back-reference are fetched in one `_id in $ids` query; rows without one in
    /// a single reverse lookup. Rows whose back-reference names a missing document are not
    /// retried by reverse lookup. A failed query contributes no documents.
    pub async fn resolve_documents<D, S>(&self, sources: &[S], options: ResolveOptions) -> Vec<D>
    where
        D: CmsDocument,
        S: DocumentSource,
    {
        let document_ids = unique(
            sources
                .iter()
                .filter_map(|source| non_empty(source.sanity_id())),
        );
        let record_ids = unique(
            sources
                .iter()
                .filter(|source| non_empty(source.sanity_id()).is_none())
                .map(|source| source.record_id())
                .filter(|id| !id.trim().is_empty()),
        );

        let mut documents = Vec::new();

        if !document_ids.is_empty() {
            let key = key::documents(D::DOCUMENT_TYPE, &document_ids);
            let found: Vec<D> = self
                .cache
                .get_or_set(
                    &key,
                    || async {
                        DocumentRepository::new(self.cms)
                            .get_many_by_ids::<D>(&document_ids)
                            .await
                            .unwrap_or_else(|err| {
                                tracing::error!(
                                    "Failed to fetch {} documents {:?}: {}",
                                    D::DOCUMENT_TYPE,
                                    document_ids,
                                    err
                                );

                                Vec::new()
                            })
                    },
                    options.skip_cache,
                )
                .await;

            documents.extend(found);
        }

        if !record_ids.is_empty() {
            let key = key::external_documents(D::DOCUMENT_TYPE, &record_ids);
            let found: Vec<D> = self
                .cache
                .get_or_set(
                    &key,
                    || async {
                        DocumentRepository::new(self.cms)
                            .get_many_by_external_ids::<D>(&record_ids)
                            .await
                            .unwrap_or_else(|err| {
                                tracing::error!(
                                    "Failed to find {} documents for rows {:?}: {}",
                                    D::DOCUMENT_TYPE,
                                    record_ids,
                                    err
                                );

                                Vec::new()
                            })
                    },
                    options.skip_cache,
                )
                .await;

            documents.extend(found);
        }

        documents
    }

    /// Fetch a row fresh and resolve its linked document
    ///
    /// Returns `None` when the row cannot be fetched, in which case the CMS is not queried.
    pub async fn with_counterpart<E, D>(
        &self,
        id: &str,
        options: ResolveOptions,
    ) -> Option<Linked<E::Model, D>>
    where
        E: RecordTable,
        D: CmsDocument,
    {
        let primary = self.fetch_record::<E>(id).await.into_option()?;

        let counterpart = self
            .resolve_document::<D, E::Model>(Some(&primary), options)
            .await
            .into_option();

        Some(Linked {
            primary,
            counterpart,
        })
    }

    /// Resolve the linked document of every row concurrently
    ///
    /// The result has one entry per row, in the same order.
    pub async fn with_counterparts<R, D>(
        &self,
        rows: Vec<R>,
        options: ResolveOptions,
    ) -> Vec<Linked<R, D>>
    where
        R: DocumentSource,
        D: CmsDocument,
    {
        let counterparts = join_all(
            rows.iter()
                .map(|row| self.resolve_document::<D, R>(Some(row), options)),
        )
        .await;

        rows.into_iter()
            .zip(counterparts)
            .map(|(primary, counterpart)| Linked {
                primary,
                counterpart: counterpart.into_option(),
            })
            .collect()
    }

    /// Look an id up in the named system, or in the database then the CMS
    pub async fn find_by_any_id<E, D>(
        &self,
        id: &str,
        system: Option<System>,
        options: ResolveOptions,
    ) -> Option<AnyRecord<E::Model, D>>
    where
        E: RecordTable,
        D: CmsDocument,
    {
        match system {
            Some(System::Db) => self
                .resolve_record_by_id::<E>(id, options)
                .await
                .into_option()
                .map(AnyRecord::Record),
            Some(System::Cms) => self
                .resolve_document_by_id::<D>(id, options)
                .await
                .into_option()
                .map(AnyRecord::Document),
            None => {
                if let Some(record) = self
                    .resolve_record_by_id::<E>(id, options)
                    .await
                    .into_option()
                {
                    return Some(AnyRecord::Record(record));
                }

                self.resolve_document_by_id::<D>(id, options)
                    .await
                    .into_option()
                    .map(AnyRecord::Document)
            }
        }
    }

    pub fn cache(&self) -> &ReferenceCache {
        self.cache
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.db
    }

    pub fn cms(&self) -> &sanity_client::Client {
        self.cms
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::sponsor::SponsorRepository,
    model::cms::SponsorDocument,
    service::resolver::{
        AnyRecord, Linked, ReferenceCache, ReferenceResolver, ResolveOptions, System,
    },
};

pub type SponsorWithDocument = Linked<entity::sponsors::Model, SponsorDocument>;

/// Resolves between `sponsors` rows and `sponsor` documents linked by `supabaseId`
pub struct SponsorResolver<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> SponsorResolver<'a> {
    /// Creates a new instance of [`SponsorResolver`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self {
            resolver: ReferenceResolver::new(db, cms, cache),
        }
    }

    pub async fn resolve_sponsor_from_document(
        &self,
        document: Option<&SponsorDocument>,
        options: ResolveOptions,
    ) -> Option<entity::sponsors::Model> {
        self.resolver
            .resolve_record::<entity::prelude::Sponsors, _>(document, options)
            .await
            .into_option()
    }

    pub async fn resolve_sponsor_document_from_record(
        &self,
        sponsor: Option<&entity::sponsors::Model>,
        options: ResolveOptions,
    ) -> Option<SponsorDocument> {
        self.resolver
            .resolve_document::<SponsorDocument, _>(sponsor, options)
            .await
            .into_option()
    }

    /// Get a sponsor by id with its CMS document, the row is read fresh
    pub async fn get_sponsor_with_document(
        &self,
        sponsor_id: &str,
        options: ResolveOptions,
    ) -> Option<SponsorWithDocument> {
        self.resolver
            .with_counterpart::<entity::prelude::Sponsors, SponsorDocument>(sponsor_id, options)
            .await
    }

    /// Get every featured sponsor with its CMS document, ordered by name
    pub async fn get_featured_sponsors_with_documents(
        &self,
        options: ResolveOptions,
    ) -> Vec<SponsorWithDocument> {
        let sponsors = match SponsorRepository::new(self.resolver.db())
            .get_featured()
            .await
        {
            Ok(sponsors) => sponsors,
            Err(err) => {
                tracing::error!("Failed to fetch featured sponsors: {}", err);

                return Vec::new();
            }
        };

        self.resolver.with_counterparts(sponsors, options).await
    }

    /// Find a sponsor by a row id or a sponsor document id
    pub async fn find_sponsor_by_any_id(
        &self,
        id: &str,
        system: Option<System>,
        options: ResolveOptions,
    ) -> Option<AnyRecord<entity::sponsors::Model, SponsorDocument>> {
        self.resolver
            .find_by_any_id::<entity::prelude::Sponsors, SponsorDocument>(id, system, options)
            .await
    }
}

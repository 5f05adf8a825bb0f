use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::server::{
    model::cms::MatchGallery,
    service::resolver::{
        AnyRecord, Linked, ReferenceCache, ReferenceResolver, ResolveOptions, System,
    },
};

pub type MatchWithGallery = Linked<entity::matches::Model, MatchGallery>;

/// Everything a match page shows: the fixture, its photo gallery and both teams
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchDay {
    pub fixture: entity::matches::Model,
    pub gallery: Option<MatchGallery>,
    pub home_team: Option<entity::teams::Model>,
    pub away_team: Option<entity::teams::Model>,
}

/// Resolves between `match` rows and `matchGallery` documents linked by `matchId`
pub struct MatchResolver<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> MatchResolver<'a> {
    /// Creates a new instance of [`MatchResolver`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self {
            resolver: ReferenceResolver::new(db, cms, cache),
        }
    }

    pub async fn resolve_match_from_gallery(
        &self,
        gallery: Option<&MatchGallery>,
        options: ResolveOptions,
    ) -> Option<entity::matches::Model> {
        self.resolver
            .resolve_record::<entity::prelude::Match, _>(gallery, options)
            .await
            .into_option()
    }

    pub async fn resolve_gallery_from_match(
        &self,
        fixture: Option<&entity::matches::Model>,
        options: ResolveOptions,
    ) -> Option<MatchGallery> {
        self.resolver
            .resolve_document::<MatchGallery, _>(fixture, options)
            .await
            .into_option()
    }

    /// Get a match by id with its gallery, the row is read fresh
    pub async fn get_match_with_gallery(
        &self,
        match_id: &str,
        options: ResolveOptions,
    ) -> Option<MatchWithGallery> {
        self.resolver
            .with_counterpart::<entity::prelude::Match, MatchGallery>(match_id, options)
            .await
    }

    /// Get a match with its gallery and both team rows
    ///
    /// The gallery and team lookups run concurrently once the fixture is read. `None` when the
    /// fixture cannot be read; any other missing piece is left empty.
    pub async fn get_match_day(&self, match_id: &str, options: ResolveOptions) -> Option<MatchDay> {
        let fixture = self
            .resolver
            .fetch_record::<entity::prelude::Match>(match_id)
            .await
            .into_option()?;

        let (gallery, home_team, away_team) = futures::join!(
            self.resolver
                .resolve_document::<MatchGallery, _>(Some(&fixture), options),
            self.resolve_team(fixture.home_team_id.as_deref(), options),
            self.resolve_team(fixture.away_team_id.as_deref(), options),
        );

        Some(MatchDay {
            gallery: gallery.into_option(),
            home_team,
            away_team,
            fixture,
        })
    }

    /// Find a fixture by a row id or a gallery document id
    pub async fn find_match_by_any_id(
        &self,
        id: &str,
        system: Option<System>,
        options: ResolveOptions,
    ) -> Option<AnyRecord<entity::matches::Model, MatchGallery>> {
        self.resolver
            .find_by_any_id::<entity::prelude::Match, MatchGallery>(id, system, options)
            .await
    }

    async fn resolve_team(
        &self,
        team_id: Option<&str>,
        options: ResolveOptions,
    ) -> Option<entity::teams::Model> {
        self.resolver
            .resolve_record::<entity::prelude::Teams, str>(team_id, options)
            .await
            .into_option()
    }
}

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{linked::RecordTable, team::TeamRepository},
    model::cms::TeamDocument,
    service::resolver::{
        key, AnyRecord, Linked, ReferenceCache, ReferenceResolver, Resolution, ResolveOptions,
        System,
    },
};

pub type TeamWithDocument = Linked<entity::teams::Model, TeamDocument>;

/// Resolves between `teams` rows and `team` documents linked by `supabaseId`
///
/// Also serves the team lists the site reads on most pages, which go through the same cache.
pub struct TeamResolver<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> TeamResolver<'a> {
    /// Creates a new instance of [`TeamResolver`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self {
            resolver: ReferenceResolver::new(db, cms, cache),
        }
    }

    pub async fn resolve_team_from_document(
        &self,
        document: Option<&TeamDocument>,
        options: ResolveOptions,
    ) -> Option<entity::teams::Model> {
        self.resolver
            .resolve_record::<entity::prelude::Teams, _>(document, options)
            .await
            .into_option()
    }

    pub async fn resolve_team_document_from_record(
        &self,
        team: Option<&entity::teams::Model>,
        options: ResolveOptions,
    ) -> Option<TeamDocument> {
        self.resolver
            .resolve_document::<TeamDocument, _>(team, options)
            .await
            .into_option()
    }

    /// Get a team by id with its CMS document, the row is read fresh
    pub async fn get_team_with_document(
        &self,
        team_id: &str,
        options: ResolveOptions,
    ) -> Option<TeamWithDocument> {
        self.resolver
            .with_counterpart::<entity::prelude::Teams, TeamDocument>(team_id, options)
            .await
    }

    /// Get every team with its CMS document, ordered by team name
    pub async fn get_all_teams_with_documents(
        &self,
        options: ResolveOptions,
    ) -> Vec<TeamWithDocument> {
        let teams = self.get_all_teams(options).await;

        self.resolver.with_counterparts(teams, options).await
    }

    /// Get every team ordered by name, cached under `db:teams:@all`
    ///
    /// A failed query is cached as an empty list.
    pub async fn get_all_teams(&self, options: ResolveOptions) -> Vec<entity::teams::Model> {
        let key = key::all_records(entity::prelude::Teams::TABLE);

        self.resolver
            .cache()
            .get_or_set(
                &key,
                || async {
                    TeamRepository::new(self.resolver.db())
                        .get_all()
                        .await
                        .unwrap_or_else(|err| {
                            tracing::error!("Failed to fetch teams: {}", err);

                            Vec::new()
                        })
                },
                options.skip_cache,
            )
            .await
    }

    /// Get the team with exactly `name`, cached under `db:teams:@name:{name}`
    pub async fn get_club_team(
        &self,
        name: &str,
        options: ResolveOptions,
    ) -> Option<entity::teams::Model> {
        let key = key::record_by_name(entity::prelude::Teams::TABLE, name);

        self.resolver
            .cache()
            .get_or_set(
                &key,
                || async {
                    let result = TeamRepository::new(self.resolver.db())
                        .get_by_name(name)
                        .await;

                    Resolution::from_lookup(result, &format!("Failed to fetch team {}", name))
                },
                options.skip_cache,
            )
            .await
            .into_option()
    }

    /// Find a team by a row id or a team document id
    pub async fn find_team_by_any_id(
        &self,
        id: &str,
        system: Option<System>,
        options: ResolveOptions,
    ) -> Option<AnyRecord<entity::teams::Model, TeamDocument>> {
        self.resolver
            .find_by_any_id::<entity::prelude::Teams, TeamDocument>(id, system, options)
            .await
    }
}

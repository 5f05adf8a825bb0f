use sea_orm::DatabaseConnection;

use crate::server::{
    data::{linked::LinkedRecordRepository, person::PersonRepository},
    model::cms::PlayerProfile,
    service::resolver::{
        AnyRecord, Linked, ReferenceCache, ReferenceResolver, Resolution, ResolveOptions, System,
    },
};

/// A `people` row with its `playerProfile` document
pub type PlayerWithProfile = Linked<entity::people::Model, PlayerProfile>;

/// Resolves between `people` rows and `playerProfile` documents linked by `supabaseId`
pub struct PlayerResolver<'a> {
    resolver: ReferenceResolver<'a>,
}

impl<'a> PlayerResolver<'a> {
    /// Creates a new instance of [`PlayerResolver`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self {
            resolver: ReferenceResolver::new(db, cms, cache),
        }
    }

    /// Resolve the `people` row a profile is linked to
    pub async fn resolve_player_from_profile(
        &self,
        profile: Option<&PlayerProfile>,
        options: ResolveOptions,
    ) -> Option<entity::people::Model> {
        let resolution = self
            .resolver
            .resolve_record::<entity::prelude::People, _>(profile, options)
            .await;

        if let (Some(profile), Resolution::NotLinked) = (profile, &resolution) {
            tracing::warn!("Player profile {} has no supabaseId", profile.id);
        }

        resolution.into_option()
    }

    /// Resolve the profile document of a `people` row
    pub async fn resolve_profile_from_player(
        &self,
        player: Option<&entity::people::Model>,
        options: ResolveOptions,
    ) -> Option<PlayerProfile> {
        self.resolver
            .resolve_document::<PlayerProfile, _>(player, options)
            .await
            .into_option()
    }

    /// Get a player by id together with their profile
    ///
    /// The row is always read fresh; `None` when it cannot be read, without querying the CMS.
    pub async fn get_player_with_profile(
        &self,
        player_id: &str,
        options: ResolveOptions,
    ) -> Option<PlayerWithProfile> {
        self.resolver
            .with_counterpart::<entity::prelude::People, PlayerProfile>(player_id, options)
            .await
    }

    /// Get every player with their profile, ordered by name
    pub async fn get_all_players_with_profiles(
        &self,
        options: ResolveOptions,
    ) -> Vec<PlayerWithProfile> {
        let players = match PersonRepository::new(self.resolver.db()).get_players().await {
            Ok(players) => players,
            Err(err) => {
                tracing::error!("Failed to fetch players: {}", err);

                return Vec::new();
            }
        };

        self.resolver.with_counterparts(players, options).await
    }

    /// Find a player by a row id or a profile document id
    pub async fn find_player_by_any_id(
        &self,
        id: &str,
        system: Option<System>,
        options: ResolveOptions,
    ) -> Option<AnyRecord<entity::people::Model, PlayerProfile>> {
        self.resolver
            .find_by_any_id::<entity::prelude::People, PlayerProfile>(id, system, options)
            .await
    }

    /// Get the player whose back-reference is `sanity_id`, bypassing the cache
    ///
    /// Draft ids resolve to the same row as their published document.
    pub async fn fetch_player_by_sanity_id(
        &self,
        sanity_id: &str,
    ) -> Option<entity::people::Model> {
        let result = LinkedRecordRepository::<_, entity::prelude::People>::new(self.resolver.db())
            .get_by_sanity_id(sanity_id)
            .await;

        Resolution::from_lookup(
            result,
            &format!("Failed to fetch player with sanity_id {}", sanity_id),
        )
        .into_option()
    }
}

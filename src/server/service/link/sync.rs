use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cms::DocumentRepository,
        linked::{LinkedRecordRepository, RecordTable},
        person::{PersonRepository, ProfileFields},
    },
    error::{link::LinkError, Error},
    model::cms::{CmsDocument, PlayerProfile},
    service::{
        link::document::DocumentLinkService,
        resolver::{key, source::non_empty, ReferenceCache},
    },
};

/// Nationality recorded when a profile does not state one
pub const DEFAULT_NATIONALITY: &str = "Scotland";

/// Writes player profile changes from the CMS into the `people` table
pub struct ProfileSyncService<'a> {
    db: &'a DatabaseConnection,
    cms: &'a sanity_client::Client,
    cache: &'a ReferenceCache,
}

impl<'a> ProfileSyncService<'a> {
    /// Creates a new instance of [`ProfileSyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self { db, cms, cache }
    }

    /// Create or update the `people` row for a profile and link both sides
    ///
    /// The row is found by the profile's `supabaseId`, then by back-reference; when neither
    /// matches a new row is created. A profile that had no `supabaseId` is patched with the
    /// row id afterwards. Failing to patch the CMS is logged, the row is still returned.
    ///
    /// # Returns
    /// - `Ok(Model)` - The row as stored
    /// - `Err(LinkError::ProfileMissingName)` - The profile has no usable name
    /// - `Err(DbErr)` - Reading or writing the row failed
    pub async fn sync_player_profile(
        &self,
        profile: &PlayerProfile,
    ) -> Result<entity::people::Model, Error> {
        let name = profile
            .display_name()
            .ok_or_else(|| LinkError::ProfileMissingName(profile.id.clone()))?;

        let sanity_id = sanity_client::published_id(&profile.id);
        let supabase_id = non_empty(profile.supabase_id.as_deref());

        let record_id = match supabase_id {
            Some(id) => Some(id.to_string()),
            None => LinkedRecordRepository::<_, entity::prelude::People>::new(self.db)
                .get_by_sanity_id(sanity_id)
                .await?
                .map(|person| person.id),
        };

        let position = match (&profile.player_position, &profile.staff_role) {
            (Some(_), _) => Some("player".to_string()),
            (None, Some(_)) => Some("staff".to_string()),
            (None, None) => None,
        };

        let fields = ProfileFields {
            name,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            position,
            player_position: profile.player_position.clone(),
            staff_role: profile.staff_role.clone(),
            nationality: profile
                .nationality
                .clone()
                .filter(|nationality| !nationality.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string()),
            jersey_number: profile.jersey_number,
            image_url: profile.image_url().map(str::to_string),
            sanity_id: sanity_id.to_string(),
        };

        let person = PersonRepository::new(self.db)
            .upsert_profile(record_id.as_deref(), fields)
            .await?;

        if supabase_id.is_none() {
            if let Err(err) = DocumentRepository::new(self.cms)
                .set_external_id::<PlayerProfile>(&profile.id, &person.id)
                .await
            {
                tracing::warn!(
                    "Failed to write supabaseId {} back to player profile {}: {}",
                    person.id,
                    profile.id,
                    err
                );
            }
        }

        self.invalidate();

        tracing::info!("Synced player profile {} to people row {}", profile.id, person.id);

        Ok(person)
    }

    /// Clear the back-reference of the row linked to a deleted profile
    ///
    /// The row itself is kept, match data still refers to it. Returns the id of the row that
    /// was unlinked, if any.
    pub async fn unlink_player_profile(&self, document_id: &str) -> Result<Option<String>, Error> {
        DocumentLinkService::new(self.db, self.cache)
            .unlink_document::<entity::prelude::People, PlayerProfile>(document_id)
            .await
    }

    fn invalidate(&self) {
        self.cache
            .delete_prefix(&key::table_prefix(entity::prelude::People::TABLE));
        self.cache
            .delete_prefix(&key::document_type_prefix(PlayerProfile::DOCUMENT_TYPE));
    }
}

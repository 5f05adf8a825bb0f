//! Sanity webhook handling.
//!
//! The webhook delivers the changed document itself plus an optional `operation`. Player
//! profiles are written through to the `people` table. For the other linked document types
//! only the row's back-reference follows the document.

use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::Value;

use crate::server::{
    data::linked::RecordTable,
    error::{link::LinkError, Error},
    model::cms::{CmsDocument, MatchGallery, PlayerProfile, SponsorDocument, TeamDocument},
    service::{
        link::{document::DocumentLinkService, sync::ProfileSyncService},
        resolver::ReferenceCache,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookOperation {
    Create,
    #[default]
    Update,
    Delete,
}

/// A document change reported by the CMS
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookEvent {
    pub document_id: String,
    pub doc_type: String,
    pub operation: WebhookOperation,
    /// The full payload, the document as it now reads
    pub document: Value,
}

#[derive(Deserialize)]
struct EventHeader {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_type", default)]
    doc_type: Option<String>,
    #[serde(default)]
    operation: Option<WebhookOperation>,
}

impl WebhookEvent {
    /// Read an event from a webhook body
    ///
    /// # Returns
    /// - `Ok(WebhookEvent)` - The body names a document id & type
    /// - `Err(LinkError::InvalidWebhookPayload)` - `_id` or `_type` is missing or empty, or
    ///   `operation` is not one of `create`, `update`, `delete`
    pub fn from_payload(payload: Value) -> Result<Self, LinkError> {
        let header = EventHeader::deserialize(&payload)
            .map_err(|err| LinkError::InvalidWebhookPayload(err.to_string()))?;

        let document_id = header
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| LinkError::InvalidWebhookPayload("missing _id".to_string()))?;
        let doc_type = header
            .doc_type
            .filter(|doc_type| !doc_type.trim().is_empty())
            .ok_or_else(|| LinkError::InvalidWebhookPayload("missing _type".to_string()))?;

        Ok(Self {
            document_id,
            doc_type,
            operation: header.operation.unwrap_or_default(),
            document: payload,
        })
    }
}

/// What handling an event did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookOutcome {
    /// `false` when no handler exists for the document type
    pub handled: bool,
    pub message: String,
}

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
    cms: &'a sanity_client::Client,
    cache: &'a ReferenceCache,
}

impl<'a> WebhookService<'a> {
    /// Creates a new instance of [`WebhookService`]
    pub fn new(
        db: &'a DatabaseConnection,
        cms: &'a sanity_client::Client,
        cache: &'a ReferenceCache,
    ) -> Self {
        Self { db, cms, cache }
    }

    /// Apply a document change
    ///
    /// # Returns
    /// - `Ok(WebhookOutcome)` - The change was applied, or there is nothing to apply for the type
    /// - `Err(LinkError::ProfileMissingName)` - A player profile without a name was saved
    /// - `Err(LinkError::InvalidWebhookPayload)` - The document does not match its type
    /// - `Err(Error)` - Writing the linked row failed
    pub async fn handle(&self, event: WebhookEvent) -> Result<WebhookOutcome, Error> {
        tracing::info!(
            "Received {:?} webhook for {} {}",
            event.operation,
            event.doc_type,
            event.document_id
        );

        let doc_type = event.doc_type.clone();
        match doc_type.as_str() {
            t if t == PlayerProfile::DOCUMENT_TYPE => self.handle_player_profile(event).await,
            t if t == MatchGallery::DOCUMENT_TYPE => {
                self.handle_linked::<entity::prelude::Match, MatchGallery>(event)
                    .await
            }
            t if t == SponsorDocument::DOCUMENT_TYPE => {
                self.handle_linked::<entity::prelude::Sponsors, SponsorDocument>(event)
                    .await
            }
            t if t == TeamDocument::DOCUMENT_TYPE => {
                self.handle_linked::<entity::prelude::Teams, TeamDocument>(event)
                    .await
            }
            _ => {
                tracing::debug!("No webhook handler for document type {}", doc_type);

                Ok(WebhookOutcome {
                    handled: false,
                    message: format!("No handler for document type {}", doc_type),
                })
            }
        }
    }

    async fn handle_player_profile(&self, event: WebhookEvent) -> Result<WebhookOutcome, Error> {
        let sync = ProfileSyncService::new(self.db, self.cms, self.cache);

        if event.operation == WebhookOperation::Delete {
            let message = match sync.unlink_player_profile(&event.document_id).await? {
                Some(person_id) => format!(
                    "Unlinked player {} from deleted profile {}",
                    person_id, event.document_id
                ),
                None => format!("No player linked to profile {}", event.document_id),
            };

            return Ok(WebhookOutcome {
                handled: true,
                message,
            });
        }

        let profile: PlayerProfile = serde_json::from_value(event.document)
            .map_err(|err| LinkError::InvalidWebhookPayload(err.to_string()))?;
        let person = sync.sync_player_profile(&profile).await?;

        Ok(WebhookOutcome {
            handled: true,
            message: format!("Synced profile {} to player {}", profile.id, person.id),
        })
    }

    async fn handle_linked<E: RecordTable, D: CmsDocument>(
        &self,
        event: WebhookEvent,
    ) -> Result<WebhookOutcome, Error> {
        let links = DocumentLinkService::new(self.db, self.cache);

        if event.operation == WebhookOperation::Delete {
            let message = match links.unlink_document::<E, D>(&event.document_id).await? {
                Some(record_id) => format!(
                    "Unlinked {} row {} from deleted {} {}",
                    E::TABLE,
                    record_id,
                    D::DOCUMENT_TYPE,
                    event.document_id
                ),
                None => format!(
                    "No {} row linked to {} {}",
                    E::TABLE,
                    D::DOCUMENT_TYPE,
                    event.document_id
                ),
            };

            return Ok(WebhookOutcome {
                handled: true,
                message,
            });
        }

        let document: D = serde_json::from_value(event.document)
            .map_err(|err| LinkError::InvalidWebhookPayload(err.to_string()))?;
        let message = match links.link_document::<E, D>(&document).await? {
            Some(record_id) => format!(
                "Linked {} row {} to {} {}",
                E::TABLE,
                record_id,
                D::DOCUMENT_TYPE,
                document.document_id()
            ),
            None => format!(
                "Dropped cached references for {} {}",
                D::DOCUMENT_TYPE,
                document.document_id()
            ),
        };

        Ok(WebhookOutcome {
            handled: true,
            message,
        })
    }
}

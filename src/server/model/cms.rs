//! Sanity document types that have a counterpart row in the database.
//!
//! Only the fields the site reads are modelled, anything else on a document is ignored on
//! deserialization. A document is linked to its row through an external-id field holding the
//! row's primary key; the field name differs per document type.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::service::resolver::RecordSource;

/// A Sanity document type that links to a database row
pub trait CmsDocument: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Value of the document's `_type`
    const DOCUMENT_TYPE: &'static str;
    /// Name of the field holding the linked row's id
    const EXTERNAL_ID_FIELD: &'static str;

    fn document_id(&self) -> &str;

    fn external_id(&self) -> Option<&str>;
}

macro_rules! cms_document {
    ($ty:ty, $doc_type:literal, $field:literal, $external:ident) => {
        impl CmsDocument for $ty {
            const DOCUMENT_TYPE: &'static str = $doc_type;
            const EXTERNAL_ID_FIELD: &'static str = $field;

            fn document_id(&self) -> &str {
                &self.id
            }

            fn external_id(&self) -> Option<&str> {
                self.$external.as_deref()
            }
        }

        impl RecordSource for $ty {
            fn external_id(&self) -> Option<&str> {
                CmsDocument::external_id(self)
            }
        }
    };
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageAsset {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageField {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
}

/// `playerProfile` document, linked to a `people` row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    /// `people.id` of the linked row
    #[serde(default)]
    pub supabase_id: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub player_position: Option<String>,
    #[serde(default)]
    pub staff_role: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub profile_image: Option<ImageField>,
}

impl PlayerProfile {
    /// Display name, `playerName` or else first & last name joined
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = self.player_name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }

        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.profile_image
            .as_ref()
            .and_then(|image| image.asset.as_ref())
            .and_then(|asset| asset.url.as_deref())
    }
}

/// `matchGallery` document, linked to a `match` row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchGallery {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    /// `match.id` of the linked row
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub match_date: Option<String>,
    #[serde(default)]
    pub folder_name: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SponsorDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub supabase_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub supabase_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

cms_document!(PlayerProfile, "playerProfile", "supabaseId", supabase_id);
cms_document!(MatchGallery, "matchGallery", "matchId", match_id);
cms_document!(SponsorDocument, "sponsor", "supabaseId", supabase_id);
cms_document!(TeamDocument, "team", "supabaseId", supabase_id);

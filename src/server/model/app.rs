use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::DEFAULT_CLUB_TEAM_NAME, service::resolver::ReferenceCache};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cms_client: sanity_client::Client,
    /// Process-wide reference cache, shared by every request and the scheduler
    pub cache: Arc<ReferenceCache>,
    pub club_team_name: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        cms_client: sanity_client::Client,
        club_team_name: &str,
    ) -> Self {
        Self {
            db,
            cms_client,
            cache: Arc::new(ReferenceCache::new()),
            club_team_name: club_team_name.to_string(),
        }
    }
}

/// State with an empty cache & the default club team
impl From<(DatabaseConnection, sanity_client::Client)> for AppState {
    fn from((db, cms_client): (DatabaseConnection, sanity_client::Client)) -> Self {
        Self::new(db, cms_client, DEFAULT_CLUB_TEAM_NAME)
    }
}

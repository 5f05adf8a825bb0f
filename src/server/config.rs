use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Name of the club's own team in the `teams` table
pub const DEFAULT_CLUB_TEAM_NAME: &str = "Banks o' Dee";

/// Link audit schedule, top of every hour
pub const DEFAULT_LINK_AUDIT_CRON: &str = "0 0 * * * *";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    /// Write token, link repair & profile sync need one
    pub sanity_api_token: Option<String>,
    /// Overrides the project API url
    pub sanity_api_url: Option<String>,
    pub club_team_name: String,
    pub link_audit_cron: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable lookup, empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require = |var: &str| get(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let sanity_api_url = get("SANITY_API_URL");
        let sanity_project_id = match sanity_api_url {
            Some(_) => get("SANITY_PROJECT_ID"),
            None => Some(require("SANITY_PROJECT_ID")?),
        };

        let bind_address = get("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            sanity_project_id,
            sanity_dataset: get("SANITY_DATASET")
                .unwrap_or_else(|| sanity_client::DEFAULT_DATASET.to_string()),
            sanity_api_version: get("SANITY_API_VERSION")
                .unwrap_or_else(|| sanity_client::DEFAULT_API_VERSION.to_string()),
            sanity_api_token: get("SANITY_API_TOKEN"),
            sanity_api_url,
            club_team_name: get("CLUB_TEAM_NAME")
                .unwrap_or_else(|| DEFAULT_CLUB_TEAM_NAME.to_string()),
            link_audit_cron: get("LINK_AUDIT_CRON")
                .unwrap_or_else(|| DEFAULT_LINK_AUDIT_CRON.to_string()),
            bind_address,
        })
    }
}

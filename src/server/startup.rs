use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Build the Sanity client from the configured project, dataset & token
///
/// Reads go to the live API rather than the CDN so link repairs see their own writes.
pub fn build_cms_client(config: &Config) -> Result<sanity_client::Client, Error> {
    let mut cms_config = sanity_client::Config::builder()
        .dataset(&config.sanity_dataset)
        .api_version(&config.sanity_api_version)
        .use_cdn(false);

    if let Some(api_url) = &config.sanity_api_url {
        cms_config = cms_config.api_url(api_url);
    }
    if let Some(project_id) = &config.sanity_project_id {
        cms_config = cms_config.project_id(project_id);
    }

    let mut client = sanity_client::Client::builder()
        .config(cms_config.build()?)
        .user_agent(concat!("crosslink/", env!("CARGO_PKG_VERSION")));

    match &config.sanity_api_token {
        Some(token) => client = client.token(token),
        None => tracing::warn!(
            "SANITY_API_TOKEN is not set, link repair & profile sync cannot write to the CMS"
        ),
    }

    Ok(client.build()?)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

use crosslink::server::{
    config::Config, model::app::AppState, router, scheduler::cron::start_scheduler, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), crosslink::server::error::Error> {
    let cms_client = startup::build_cms_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState::new(db, cms_client, &config.club_team_name);

    let _scheduler = start_scheduler(
        &config.link_audit_cron,
        &state.db,
        &state.cms_client,
        &state.cache,
    )
    .await?;

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}

use pitchside::{
    config::Config, model::app::AppState, router, scheduler::start_scheduler, startup,
    util::lock::TeamLocks,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), pitchside::error::Error> {
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

    let client = startup::build_football_data_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let state = AppState {
        db,
        client,
        team_locks: TeamLocks::default(),
    };

    let _scheduler = start_scheduler(&state, &config.sync_cron, &config.sync_competitions).await?;

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}

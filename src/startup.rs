use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error};

/// Build the football-data.org client from configuration
pub fn build_football_data_client(config: &Config) -> Result<football_data::Client, Error> {
    let client = football_data::Client::builder()
        .api_url(&config.football_data_api_url)
        .api_token(&config.football_data_api_token)
        .timeout(config.football_data_timeout)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
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

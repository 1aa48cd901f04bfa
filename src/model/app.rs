use sea_orm::DatabaseConnection;

use crate::util::lock::TeamLocks;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub client: football_data::Client,
    /// Serializes team writes across concurrent sync runs
    pub team_locks: TeamLocks,
}

impl From<(DatabaseConnection, football_data::Client)> for AppState {
    fn from((db, client): (DatabaseConnection, football_data::Client)) -> Self {
        Self {
            db,
            client,
            team_locks: TeamLocks::default(),
        }
    }
}

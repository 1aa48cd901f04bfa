pub use sea_orm_migration::prelude::*;

mod m20261001_000001_competition;
mod m20261001_000002_season;
mod m20261001_000003_team;
mod m20261001_000004_team_competition;
mod m20261001_000005_team_season;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_competition::Migration),
            Box::new(m20261001_000002_season::Migration),
            Box::new(m20261001_000003_team::Migration),
            Box::new(m20261001_000004_team_competition::Migration),
            Box::new(m20261001_000005_team_season::Migration),
        ]
    }
}

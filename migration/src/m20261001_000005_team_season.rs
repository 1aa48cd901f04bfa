use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261001_000002_season::Season, m20261001_000003_team::Team};

static IDX_TEAM_SEASON_SEASON_ID: &str = "idx-team_season-season_id";
static FK_TEAM_SEASON_TEAM_ID: &str = "fk-team_season-team_id";
static FK_TEAM_SEASON_SEASON_ID: &str = "fk-team_season-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamSeason::Table)
                    .if_not_exists()
                    .col(integer(TeamSeason::TeamId))
                    .col(integer(TeamSeason::SeasonId))
                    .col(integer(TeamSeason::Position))
                    .col(timestamp(TeamSeason::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(TeamSeason::TeamId)
                            .col(TeamSeason::SeasonId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_SEASON_SEASON_ID)
                    .table(TeamSeason::Table)
                    .col(TeamSeason::SeasonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_SEASON_TEAM_ID)
                    .from_tbl(TeamSeason::Table)
                    .from_col(TeamSeason::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_SEASON_SEASON_ID)
                    .from_tbl(TeamSeason::Table)
                    .from_col(TeamSeason::SeasonId)
                    .to_tbl(Season::Table)
                    .to_col(Season::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_SEASON_SEASON_ID)
                    .table(TeamSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_SEASON_TEAM_ID)
                    .table(TeamSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_SEASON_SEASON_ID)
                    .table(TeamSeason::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamSeason::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamSeason {
    Table,
    TeamId,
    SeasonId,
    Position,
    CreatedAt,
}

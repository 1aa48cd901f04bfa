use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261001_000001_competition::Competition, m20261001_000003_team::Team};

static IDX_TEAM_COMPETITION_COMPETITION_ID: &str = "idx-team_competition-competition_id";
static FK_TEAM_COMPETITION_TEAM_ID: &str = "fk-team_competition-team_id";
static FK_TEAM_COMPETITION_COMPETITION_ID: &str = "fk-team_competition-competition_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamCompetition::Table)
                    .if_not_exists()
                    .col(integer(TeamCompetition::TeamId))
                    .col(integer(TeamCompetition::CompetitionId))
                    .col(integer(TeamCompetition::Position))
                    .col(timestamp(TeamCompetition::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(TeamCompetition::TeamId)
                            .col(TeamCompetition::CompetitionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_COMPETITION_COMPETITION_ID)
                    .table(TeamCompetition::Table)
                    .col(TeamCompetition::CompetitionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_COMPETITION_TEAM_ID)
                    .from_tbl(TeamCompetition::Table)
                    .from_col(TeamCompetition::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_COMPETITION_COMPETITION_ID)
                    .from_tbl(TeamCompetition::Table)
                    .from_col(TeamCompetition::CompetitionId)
                    .to_tbl(Competition::Table)
                    .to_col(Competition::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_COMPETITION_COMPETITION_ID)
                    .table(TeamCompetition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_COMPETITION_TEAM_ID)
                    .table(TeamCompetition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_COMPETITION_COMPETITION_ID)
                    .table(TeamCompetition::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamCompetition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamCompetition {
    Table,
    TeamId,
    CompetitionId,
    Position,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(big_integer_uniq(Team::TeamId))
                    .col(string(Team::Name))
                    .col(string(Team::ShortName))
                    .col(string(Team::Tla))
                    .col(string_null(Team::LogoUrl))
                    .col(string_null(Team::Venue))
                    .col(integer_null(Team::Founded))
                    .col(string_null(Team::Website))
                    .col(string_null(Team::CoachName))
                    .col(string_null(Team::Address))
                    .col(string_null(Team::ClubColors))
                    .col(string_null(Team::PrimaryColor))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    TeamId,
    Name,
    ShortName,
    Tla,
    LogoUrl,
    Venue,
    Founded,
    Website,
    CoachName,
    Address,
    ClubColors,
    PrimaryColor,
    CreatedAt,
    UpdatedAt,
}

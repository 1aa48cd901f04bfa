use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(big_integer_uniq(Season::SeasonId))
                    .col(date(Season::StartDate))
                    .col(date(Season::EndDate))
                    .col(integer_null(Season::CurrentMatchday))
                    .col(string_null(Season::Winner))
                    .col(timestamp(Season::CreatedAt))
                    .col(timestamp(Season::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    SeasonId,
    StartDate,
    EndDate,
    CurrentMatchday,
    Winner,
    CreatedAt,
    UpdatedAt,
}

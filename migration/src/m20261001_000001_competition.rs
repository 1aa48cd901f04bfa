use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competition::Table)
                    .if_not_exists()
                    .col(pk_auto(Competition::Id))
                    .col(big_integer_uniq(Competition::CompetitionId))
                    .col(string(Competition::Name))
                    .col(string(Competition::Code))
                    .col(string(Competition::CompetitionType))
                    .col(string_null(Competition::Emblem))
                    .col(timestamp(Competition::CreatedAt))
                    .col(timestamp(Competition::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Competition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competition {
    Table,
    Id,
    CompetitionId,
    Name,
    Code,
    CompetitionType,
    Emblem,
    CreatedAt,
    UpdatedAt,
}

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::model::sync::CompetitionUpsert;

pub struct CompetitionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompetitionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a competition or overwrites every scalar column of the existing row
    pub async fn upsert(
        &self,
        competition: CompetitionUpsert,
    ) -> Result<entity::competition::Model, DbErr> {
        let competition = entity::competition::ActiveModel {
            competition_id: ActiveValue::Set(competition.competition_id),
            name: ActiveValue::Set(competition.name),
            code: ActiveValue::Set(competition.code),
            competition_type: ActiveValue::Set(competition.competition_type),
            emblem: ActiveValue::Set(competition.emblem),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Competition::insert(competition)
            .on_conflict(
                OnConflict::column(entity::competition::Column::CompetitionId)
                    .update_columns([
                        entity::competition::Column::Name,
                        entity::competition::Column::Code,
                        entity::competition::Column::CompetitionType,
                        entity::competition::Column::Emblem,
                        entity::competition::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Resolves football-data.org competition IDs to `(id, competition_id)` pairs
    ///
    /// IDs without a row are left out of the result.
    pub async fn get_entry_ids_by_competition_ids(
        &self,
        competition_ids: &[i64],
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Competition::find()
            .select_only()
            .column(entity::competition::Column::Id)
            .column(entity::competition::Column::CompetitionId)
            .filter(entity::competition::Column::CompetitionId.is_in(competition_ids.iter().copied()))
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    pub async fn find_by_competition_id(
        &self,
        competition_id: i64,
    ) -> Result<Option<entity::competition::Model>, DbErr> {
        entity::prelude::Competition::find()
            .filter(entity::competition::Column::CompetitionId.eq(competition_id))
            .one(self.db)
            .await
    }
}

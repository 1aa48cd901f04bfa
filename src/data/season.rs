use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::model::sync::SeasonUpsert;

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a season or overwrites every scalar column of the existing row
    ///
    /// A winner reported on an earlier sync is cleared if the latest payload has none.
    pub async fn upsert(&self, season: SeasonUpsert) -> Result<entity::season::Model, DbErr> {
        let season = entity::season::ActiveModel {
            season_id: ActiveValue::Set(season.season_id),
            start_date: ActiveValue::Set(season.start_date),
            end_date: ActiveValue::Set(season.end_date),
            current_matchday: ActiveValue::Set(season.current_matchday),
            winner: ActiveValue::Set(season.winner),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Season::insert(season)
            .on_conflict(
                OnConflict::column(entity::season::Column::SeasonId)
                    .update_columns([
                        entity::season::Column::StartDate,
                        entity::season::Column::EndDate,
                        entity::season::Column::CurrentMatchday,
                        entity::season::Column::Winner,
                        entity::season::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Resolves football-data.org season IDs to `(id, season_id)` pairs
    pub async fn get_entry_ids_by_season_ids(
        &self,
        season_ids: &[i64],
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Season::find()
            .select_only()
            .column(entity::season::Column::Id)
            .column(entity::season::Column::SeasonId)
            .filter(entity::season::Column::SeasonId.is_in(season_ids.iter().copied()))
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    pub async fn find_by_season_id(
        &self,
        season_id: i64,
    ) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::SeasonId.eq(season_id))
            .one(self.db)
            .await
    }
}

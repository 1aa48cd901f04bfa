use std::collections::HashMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::sync::TeamAssociations;

/// Repository for the `team_competition` and `team_season` join tables.
///
/// Association rows are only ever inserted. Inserting a pair that already exists is a
/// no-op, so a team's association lists can grow but never shrink.
pub struct TeamAssociationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamAssociationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the association lists of the given teams, keyed by football-data.org team ID
    ///
    /// Lists are returned as football-data.org IDs in position order. Teams without any
    /// association row are absent from the map.
    pub async fn find_by_team_ids(
        &self,
        team_ids: &[i64],
    ) -> Result<HashMap<i64, TeamAssociations>, DbErr> {
        let mut associations: HashMap<i64, TeamAssociations> = HashMap::new();

        if team_ids.is_empty() {
            return Ok(associations);
        }

        let competitions = entity::prelude::TeamCompetition::find()
            .select_only()
            .column(entity::team::Column::TeamId)
            .column(entity::competition::Column::CompetitionId)
            .inner_join(entity::prelude::Team)
            .inner_join(entity::prelude::Competition)
            .filter(entity::team::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::team_competition::Column::Position)
            .order_by_asc(entity::team_competition::Column::CreatedAt)
            .into_tuple::<(i64, i64)>()
            .all(self.db)
            .await?;

        let seasons = entity::prelude::TeamSeason::find()
            .select_only()
            .column(entity::team::Column::TeamId)
            .column(entity::season::Column::SeasonId)
            .inner_join(entity::prelude::Team)
            .inner_join(entity::prelude::Season)
            .filter(entity::team::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::team_season::Column::Position)
            .order_by_asc(entity::team_season::Column::CreatedAt)
            .into_tuple::<(i64, i64)>()
            .all(self.db)
            .await?;

        for (team_id, competition_id) in competitions {
            associations
                .entry(team_id)
                .or_default()
                .competition_ids
                .push(competition_id);
        }

        for (team_id, season_id) in seasons {
            associations
                .entry(team_id)
                .or_default()
                .season_ids
                .push(season_id);
        }

        Ok(associations)
    }

    /// Inserts `(team_id, competition_id, position)` rows, skipping pairs that already exist
    ///
    /// # Arguments
    /// - `team_id`: Table ID of the team
    /// - `competitions`: Tuples of competition table ID and list position
    pub async fn add_competitions(
        &self,
        team_id: i32,
        competitions: &[(i32, i32)],
    ) -> Result<(), DbErr> {
        if competitions.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let rows = competitions
            .iter()
            .map(|&(competition_id, position)| entity::team_competition::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                competition_id: ActiveValue::Set(competition_id),
                position: ActiveValue::Set(position),
                created_at: ActiveValue::Set(now),
            });

        entity::prelude::TeamCompetition::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::team_competition::Column::TeamId,
                    entity::team_competition::Column::CompetitionId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Inserts `(team_id, season_id, position)` rows, skipping pairs that already exist
    ///
    /// # Arguments
    /// - `team_id`: Table ID of the team
    /// - `seasons`: Tuples of season table ID and list position
    pub async fn add_seasons(&self, team_id: i32, seasons: &[(i32, i32)]) -> Result<(), DbErr> {
        if seasons.is_empty() {
            return Ok(());
        }

        let now = Utc::now().naive_utc();
        let rows = seasons
            .iter()
            .map(|&(season_id, position)| entity::team_season::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                season_id: ActiveValue::Set(season_id),
                position: ActiveValue::Set(position),
                created_at: ActiveValue::Set(now),
            });

        entity::prelude::TeamSeason::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    entity::team_season::Column::TeamId,
                    entity::team_season::Column::SeasonId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}

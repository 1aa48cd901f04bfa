//! Database insertion utilities for competitions, seasons, teams and their associations.
//!
//! Insert methods return the existing row when one with the same football-data.org ID is
//! already present, so fixtures can be declared more than once.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::{factory, FootballFixtures},
};

impl<'a> FootballFixtures<'a> {
    /// Insert a mock competition into the database.
    ///
    /// # Returns
    /// - `Ok(competition::Model)` - The created or existing competition row
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_competition(
        &self,
        competition_id: i64,
    ) -> Result<entity::competition::Model, TestError> {
        if let Some(existing) = entity::prelude::Competition::find()
            .filter(entity::competition::Column::CompetitionId.eq(competition_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let competition = factory::mock_competition(competition_id);

        Ok(
            entity::prelude::Competition::insert(entity::competition::ActiveModel {
                competition_id: ActiveValue::Set(competition.id),
                name: ActiveValue::Set(competition.name),
                code: ActiveValue::Set(competition.code),
                competition_type: ActiveValue::Set(competition.competition_type),
                emblem: ActiveValue::Set(competition.emblem),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock season into the database.
    ///
    /// # Returns
    /// - `Ok(season::Model)` - The created or existing season row
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_season(
        &self,
        season_id: i64,
    ) -> Result<entity::season::Model, TestError> {
        if let Some(existing) = entity::prelude::Season::find()
            .filter(entity::season::Column::SeasonId.eq(season_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let season = factory::mock_season(season_id);

        Ok(
            entity::prelude::Season::insert(entity::season::ActiveModel {
                season_id: ActiveValue::Set(season.id),
                start_date: ActiveValue::Set(season.start_date),
                end_date: ActiveValue::Set(season.end_date),
                current_matchday: ActiveValue::Set(season.current_matchday),
                winner: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock team into the database without any associations.
    ///
    /// # Returns
    /// - `Ok(team::Model)` - The created or existing team row
    /// - `Err(TestError::DbErr)` - Database query or insert failed
    pub async fn insert_mock_team(&self, team_id: i64) -> Result<entity::team::Model, TestError> {
        if let Some(existing) = entity::prelude::Team::find()
            .filter(entity::team::Column::TeamId.eq(team_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let team = factory::mock_team(team_id);

        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            name: ActiveValue::Set(team.name.unwrap_or_default()),
            short_name: ActiveValue::Set(team.short_name.unwrap_or_default()),
            tla: ActiveValue::Set(team.tla.unwrap_or_default()),
            logo_url: ActiveValue::Set(team.crest),
            venue: ActiveValue::Set(team.venue),
            founded: ActiveValue::Set(team.founded),
            website: ActiveValue::Set(team.website),
            coach_name: ActiveValue::Set(team.coach.and_then(|coach| coach.name)),
            address: ActiveValue::Set(team.address),
            club_colors: ActiveValue::Set(team.club_colors),
            primary_color: ActiveValue::Set(Some("#DC2626".to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock team associated with the given competitions and seasons.
    ///
    /// Missing competitions, seasons and the team itself are created automatically.
    /// Association positions follow the order of the provided IDs.
    ///
    /// # Arguments
    /// - `team_id` - football-data.org team ID
    /// - `competition_ids` - football-data.org competition IDs in list order
    /// - `season_ids` - football-data.org season IDs in list order
    pub async fn insert_mock_team_with_associations(
        &self,
        team_id: i64,
        competition_ids: &[i64],
        season_ids: &[i64],
    ) -> Result<entity::team::Model, TestError> {
        let team = self.insert_mock_team(team_id).await?;

        for (position, &competition_id) in competition_ids.iter().enumerate() {
            let competition = self.insert_mock_competition(competition_id).await?;

            entity::prelude::TeamCompetition::insert(entity::team_competition::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                competition_id: ActiveValue::Set(competition.id),
                position: ActiveValue::Set(position as i32),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        for (position, &season_id) in season_ids.iter().enumerate() {
            let season = self.insert_mock_season(season_id).await?;

            entity::prelude::TeamSeason::insert(entity::team_season::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                season_id: ActiveValue::Set(season.id),
                position: ActiveValue::Set(position as i32),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        Ok(team)
    }
}

//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are all
//! created during the final `build()` call.

use football_data::model::competition::CompetitionTeams;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use pitchside_test_utils::{fixtures::factory, TestBuilder};
///
/// # async fn example() -> Result<(), pitchside_test_utils::TestError> {
/// let payload = factory::mock_competition_teams(2021, 2403, &[57, 61]);
///
/// let test = TestBuilder::new()
///     .with_sync_tables()
///     .with_mock_team(57, &[2021], &[2402])
///     .with_teams_endpoint("PL", 2025, payload, 1)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_sync_tables: bool,

    // Database fixtures to insert
    competitions: Vec<i64>,
    seasons: Vec<i64>,
    teams: Vec<(i64, Vec<i64>, Vec<i64>)>, // (team_id, competition_ids, season_ids)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    teams_endpoints: Vec<(String, i32, CompetitionTeams, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_sync_tables: false,
            competitions: Vec::new(),
            seasons: Vec::new(),
            teams: Vec::new(),
            mock_builders: Vec::new(),
            teams_endpoints: Vec::new(),
        }
    }

    /// Add every table written by a sync run.
    ///
    /// Creates Competition, Season, Team, TeamCompetition and TeamSeason.
    pub fn with_sync_tables(mut self) -> Self {
        self.include_sync_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock competition into the database.
    pub fn with_mock_competition(mut self, competition_id: i64) -> Self {
        self.competitions.push(competition_id);
        self
    }

    /// Insert a mock season into the database.
    pub fn with_mock_season(mut self, season_id: i64) -> Self {
        self.seasons.push(season_id);
        self
    }

    /// Insert a mock team with existing associations.
    ///
    /// Referenced competitions and seasons are created automatically if they don't exist.
    ///
    /// # Arguments
    /// - `team_id` - football-data.org team ID
    /// - `competition_ids` - Competitions the team is already associated with, in order
    /// - `season_ids` - Seasons the team is already associated with, in order
    pub fn with_mock_team(mut self, team_id: i64, competition_ids: &[i64], season_ids: &[i64]) -> Self {
        self.teams
            .push((team_id, competition_ids.to_vec(), season_ids.to_vec()));
        self
    }

    /// Add a mock teams endpoint for a competition season.
    ///
    /// # Arguments
    /// - `competition_code` - Code in the endpoint path, e.g. `PL`
    /// - `season` - Value of the `season` query parameter
    /// - `payload` - Body returned by the endpoint
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_teams_endpoint(
        mut self,
        competition_code: &str,
        season: i32,
        payload: CompetitionTeams,
        expected_requests: usize,
    ) -> Self {
        self.teams_endpoints.push((
            competition_code.to_string(),
            season,
            payload,
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (sync tables if specified, then custom tables)
    /// 2. Inserts database fixtures (competitions, seasons, teams with associations)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then teams endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::FootballDataError)` - Client construction failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_sync_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Competition),
                schema.create_table_from_entity(entity::prelude::Season),
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::TeamCompetition),
                schema.create_table_from_entity(entity::prelude::TeamSeason),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for competition_id in self.competitions {
            setup.football().insert_mock_competition(competition_id).await?;
        }

        for season_id in self.seasons {
            setup.football().insert_mock_season(season_id).await?;
        }

        for (team_id, competition_ids, season_ids) in self.teams {
            setup
                .football()
                .insert_mock_team_with_associations(team_id, &competition_ids, &season_ids)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue an error response ahead of
        // a successful one for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (code, season, payload, expected) in self.teams_endpoints {
            mocks.push(
                setup
                    .football()
                    .create_teams_endpoint(&code, season, &payload, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

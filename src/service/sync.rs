use football_data::model::competition::CompetitionTeams;
use sea_orm::DatabaseConnection;

use crate::{
    error::{sync::EntityKind, Error},
    model::sync::SyncResult,
    service::{gateway::StoreGateway, reconcile::reconcile, retry::RetryContext},
    util::lock::TeamLocks,
};

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    client: &'a football_data::Client,
    team_locks: &'a TeamLocks,
}

impl<'a> SyncService<'a> {
    /// Creates a new instance of [`SyncService`]
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a football_data::Client,
        team_locks: &'a TeamLocks,
    ) -> Self {
        Self {
            db,
            client,
            team_locks,
        }
    }

    /// Syncs competition, season and teams for one competition season.
    ///
    /// Never fails: a run aborted before any write is reported as `success: false` with
    /// no counts or IDs, per entity failures are listed in `errors`.
    ///
    /// # Arguments
    /// - `competition_code`: football-data.org competition code, e.g. `PL`
    /// - `season`: Starting year of the season, e.g. `2025` for 2025/26
    pub async fn sync_competition_season(&self, competition_code: &str, season: i32) -> SyncResult {
        match self.try_sync(competition_code, season, &mut None).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    "Sync of {} {} season aborted: {}",
                    competition_code,
                    season,
                    e
                );

                SyncResult::aborted(e.to_string())
            }
        }
    }

    /// Syncs a competition season, retrying run level failures with backoff.
    ///
    /// The fetched payload is kept between attempts so a retry after a database
    /// connection failure does not fetch again.
    pub async fn sync_with_retry(
        &self,
        competition_code: &str,
        season: i32,
    ) -> Result<SyncResult, Error> {
        let mut ctx: RetryContext<Option<CompetitionTeams>> = RetryContext::new();

        let db = self.db.clone();
        let client = self.client.clone();
        let team_locks = self.team_locks.clone();
        let competition_code = competition_code.to_string();

        ctx.execute_with_retry(
            &format!("sync of {} {} season", competition_code, season),
            |cache| {
                let db = db.clone();
                let client = client.clone();
                let team_locks = team_locks.clone();
                let competition_code = competition_code.clone();

                Box::pin(async move {
                    let sync_service = SyncService::new(&db, &client, &team_locks);

                    sync_service
                        .try_sync(&competition_code, season, cache)
                        .await
                })
            },
        )
        .await
    }

    /// Runs fetch, reconcile and apply for a competition season.
    ///
    /// # Arguments
    /// - `competition_code`: football-data.org competition code
    /// - `season`: Starting year of the season
    /// - `cache`: Previously fetched payload to reuse, filled after a successful fetch
    ///
    /// # Returns
    /// - `Ok(SyncResult)`: Fetch succeeded, per entity failures are listed in `errors`
    /// - `Err(Error::FetchError)`: Request failed or payload was malformed, nothing written
    /// - `Err(Error::DbErr)`: Persisted associations could not be read, nothing written
    pub async fn try_sync(
        &self,
        competition_code: &str,
        season: i32,
        cache: &mut Option<CompetitionTeams>,
    ) -> Result<SyncResult, Error> {
        let fetched = match cache.take() {
            Some(payload) => payload,
            None => {
                tracing::info!("Starting sync for {} {} season", competition_code, season);

                self.client
                    .competitions()
                    .get_teams(competition_code, season)
                    .await?
            }
        };
        let payload: &CompetitionTeams = cache.insert(fetched);

        tracing::info!(
            "Found {} teams to sync for {} ({})",
            payload.teams.len(),
            payload.competition.name,
            payload.season.id
        );

        let gateway = StoreGateway::new(self.db, self.team_locks);

        let team_ids: Vec<i64> = payload.teams.iter().map(|team| team.id).collect();
        let existing = gateway.find_team_associations(&team_ids).await?;

        let plan = reconcile(payload, |team_id| existing.get(&team_id).cloned());

        let mut result = SyncResult::default();

        match gateway.apply_competition(&plan.competition).await {
            Ok(id) => {
                tracing::debug!("Synced competition {}", plan.competition.competition_id);
                result.competition_id = Some(id);
            }
            Err(e) => record_failure(
                &mut result,
                EntityKind::Competition,
                plan.competition.competition_id,
                &e,
            ),
        }

        match gateway.apply_season(&plan.season).await {
            Ok(id) => {
                tracing::debug!("Synced season {}", plan.season.season_id);
                result.season_id = Some(id);
            }
            Err(e) => record_failure(&mut result, EntityKind::Season, plan.season.season_id, &e),
        }

        for team in &plan.teams {
            match gateway.apply_team(team).await {
                Ok(_) => {
                    tracing::debug!("Synced team {}", team.team_id);
                    result.synced_count += 1;
                    result.synced_team_ids.push(team.team_id);
                }
                Err(e) => record_failure(&mut result, EntityKind::Team, team.team_id, &e),
            }
        }

        result.success = result.errors.is_empty();

        if result.success {
            tracing::info!(
                "Synced {} teams for {} {} season",
                result.synced_count,
                competition_code,
                season
            );
        } else {
            tracing::warn!(
                "Synced {} of {} teams for {} {} season with {} errors",
                result.synced_count,
                plan.teams.len(),
                competition_code,
                season,
                result.errors.len()
            );
        }

        Ok(result)
    }
}

fn record_failure(result: &mut SyncResult, kind: EntityKind, external_id: i64, error: &Error) {
    tracing::warn!("Failed to sync {} {}: {}", kind, external_id, error);

    result
        .errors
        .push(format!("{} {}: {}", kind, external_id, error));
}


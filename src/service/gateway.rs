use std::collections::HashMap;

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{
        association::TeamAssociationRepository, competition::CompetitionRepository,
        season::SeasonRepository, team::TeamRepository,
    },
    error::{
        sync::{EntityKind, SyncError},
        Error,
    },
    model::sync::{CompetitionUpsert, SeasonUpsert, TeamAssociations, TeamUpsert},
    service::reconcile::merge_associations,
    util::lock::TeamLocks,
};

/// Applies reconciliation plans to the database.
///
/// Every apply is idempotent: scalar rows are upserted by football-data.org ID and
/// association rows are insert-only, so applying the same plan twice leaves the same state.
pub struct StoreGateway<'a> {
    db: &'a DatabaseConnection,
    team_locks: &'a TeamLocks,
}

impl<'a> StoreGateway<'a> {
    /// Creates a new instance of [`StoreGateway`]
    pub fn new(db: &'a DatabaseConnection, team_locks: &'a TeamLocks) -> Self {
        Self { db, team_locks }
    }

    /// Upserts a competition and returns its table ID
    pub async fn apply_competition(&self, competition: &CompetitionUpsert) -> Result<i32, Error> {
        let competition_repo = CompetitionRepository::new(self.db);

        let model = competition_repo.upsert(competition.clone()).await?;

        Ok(model.id)
    }

    /// Upserts a season and returns its table ID
    pub async fn apply_season(&self, season: &SeasonUpsert) -> Result<i32, Error> {
        let season_repo = SeasonRepository::new(self.db);

        let model = season_repo.upsert(season.clone()).await?;

        Ok(model.id)
    }

    /// Upserts a team with its associations and returns its table ID.
    ///
    /// Runs in a single transaction while holding the lock for the team's
    /// football-data.org ID. The planned lists are merged onto the associations persisted
    /// at the time the lock is acquired, so a plan built from a stale read never drops an
    /// association written by a concurrent run.
    ///
    /// # Errors
    /// - `SyncError::MissingReference` if a planned competition or season has no row
    /// - `DbErr` if the team row or an association fails to write
    pub async fn apply_team(&self, team: &TeamUpsert) -> Result<i32, Error> {
        let _guard = self.team_locks.lock(team.team_id).await;

        let txn = self.db.begin().await?;

        let competition_ids = resolve_entry_ids(
            EntityKind::Competition,
            &team.competition_ids,
            CompetitionRepository::new(&txn)
                .get_entry_ids_by_competition_ids(&team.competition_ids)
                .await?,
        )?;
        let season_ids = resolve_entry_ids(
            EntityKind::Season,
            &team.season_ids,
            SeasonRepository::new(&txn)
                .get_entry_ids_by_season_ids(&team.season_ids)
                .await?,
        )?;

        let association_repo = TeamAssociationRepository::new(&txn);
        let persisted = association_repo
            .find_by_team_ids(&[team.team_id])
            .await?
            .remove(&team.team_id)
            .unwrap_or_default();

        let model = TeamRepository::new(&txn).upsert(team).await?;

        let competitions = positions(
            &persisted.competition_ids,
            &team.competition_ids,
            &competition_ids,
        );
        let seasons = positions(&persisted.season_ids, &team.season_ids, &season_ids);

        association_repo
            .add_competitions(model.id, &competitions)
            .await?;
        association_repo.add_seasons(model.id, &seasons).await?;

        txn.commit().await?;

        Ok(model.id)
    }

    /// Reads persisted association lists for a batch of football-data.org team IDs
    pub async fn find_team_associations(
        &self,
        team_ids: &[i64],
    ) -> Result<HashMap<i64, TeamAssociations>, DbErr> {
        TeamAssociationRepository::new(self.db)
            .find_by_team_ids(team_ids)
            .await
    }
}

/// Maps football-data.org IDs to table IDs, failing on the first ID without a row
fn resolve_entry_ids(
    kind: EntityKind,
    external_ids: &[i64],
    entries: Vec<(i32, i64)>,
) -> Result<HashMap<i64, i32>, SyncError> {
    let entry_ids: HashMap<i64, i32> = entries
        .into_iter()
        .map(|(entry_id, external_id)| (external_id, entry_id))
        .collect();

    if let Some(&missing) = external_ids.iter().find(|id| !entry_ids.contains_key(id)) {
        return Err(SyncError::MissingReference {
            kind,
            external_id: missing,
        });
    }

    Ok(entry_ids)
}

/// Merges planned IDs onto the persisted list and pairs each table ID with its position
///
/// Persisted IDs keep their place; their rows already exist and are skipped on insert.
fn positions(persisted: &[i64], planned: &[i64], entry_ids: &HashMap<i64, i32>) -> Vec<(i32, i32)> {
    let merged = planned
        .iter()
        .fold(persisted.to_vec(), |list, &id| merge_associations(&list, id));

    merged
        .iter()
        .enumerate()
        .filter_map(|(position, id)| {
            entry_ids
                .get(id)
                .map(|&entry_id| (entry_id, position as i32))
        })
        .collect()
}

//! Cron scheduler for periodic competition syncs.
//!
//! Every configured competition is synced for the current season year on the configured
//! cron expression. Competitions are synced concurrently; writes for a team shared between
//! competitions are serialized by the team locks in [`AppState`].

use chrono::Utc;
use futures::future::join_all;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::Error, model::app::AppState, model::sync::SyncResult, service::sync::SyncService,
    util::time::current_season_year,
};

/// Initialize and start the cron job scheduler
///
/// # Arguments
/// - `state`: Application state shared with the HTTP routes
/// - `cron_expression`: Six field cron expression, e.g. `0 0 6 * * *`
/// - `competition_codes`: football-data.org competition codes to sync
///
/// # Returns
/// The running scheduler, jobs stop when it is shut down or dropped with the runtime
pub async fn start_scheduler(
    state: &AppState,
    cron_expression: &str,
    competition_codes: &[String],
) -> Result<JobScheduler, Error> {
    let sched = JobScheduler::new().await?;

    let state_clone = state.clone();
    let codes_clone = competition_codes.to_vec();

    sched
        .add(Job::new_async(cron_expression, move |_, _| {
            let state = state_clone.clone();
            let codes = codes_clone.clone();

            Box::pin(async move {
                let season = current_season_year(Utc::now());

                sync_competitions(&state, &codes, season).await;
            })
        })?)
        .await?;

    sched.start().await?;

    tracing::info!(
        "Scheduled sync of {} on \"{}\"",
        competition_codes.join(", "),
        cron_expression
    );

    Ok(sched)
}

/// Syncs the given competitions concurrently for one season, retrying run level failures
///
/// Returns each competition code with the outcome of its sync, in input order.
pub async fn sync_competitions(
    state: &AppState,
    competition_codes: &[String],
    season: i32,
) -> Vec<(String, Result<SyncResult, Error>)> {
    let syncs = competition_codes.iter().map(|code| async move {
        let sync_service = SyncService::new(&state.db, &state.client, &state.team_locks);

        let result = sync_service.sync_with_retry(code, season).await;

        match &result {
            Ok(result) if result.success => tracing::info!(
                "Scheduled sync of {} {} season synced {} teams",
                code,
                season,
                result.synced_count
            ),
            Ok(result) => tracing::warn!(
                "Scheduled sync of {} {} season finished with errors: {:?}",
                code,
                season,
                result.errors
            ),
            Err(e) => tracing::error!(
                "Scheduled sync of {} {} season failed: {}",
                code,
                season,
                e
            ),
        }

        (code.clone(), result)
    });

    join_all(syncs).await
}

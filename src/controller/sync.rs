use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    config::normalize_competition_code,
    error::{sync::SyncError, Error},
    model::{api::ErrorDto, app::AppState, sync::SyncResult},
    service::sync::SyncService,
    util::time::current_season_year,
};

pub static SYNC_TAG: &str = "sync";

/// Oldest season football-data.org has data for
const MIN_SEASON: i32 = 1900;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SyncParams {
    /// Starting year of the season, defaults to the current season
    pub season: Option<i32>,
}

/// Sync a competition season from football-data.org
///
/// Fetches the competition's teams for the season and reconciles them into the
/// database. Teams that fail to store are listed in `errors` without affecting others.
#[utoipa::path(
    post,
    path = "/api/sync/{code}",
    tag = SYNC_TAG,
    params(
        ("code" = String, Path, description = "football-data.org competition code, e.g. PL"),
        SyncParams
    ),
    responses(
        (status = 200, description = "Every entity synced", body = SyncResult),
        (status = 207, description = "Some entities failed to sync", body = SyncResult),
        (status = 400, description = "Invalid competition code or season", body = ErrorDto),
        (status = 502, description = "football-data.org request failed, nothing was written", body = SyncResult),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_competition(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<SyncParams>,
) -> Result<impl IntoResponse, Error> {
    let code = normalize_competition_code(&code)
        .ok_or_else(|| SyncError::InvalidCompetitionCode(code.clone()))?;

    let latest_season = current_season_year(Utc::now());
    let season = params.season.unwrap_or(latest_season);
    if !(MIN_SEASON..=latest_season + 1).contains(&season) {
        return Err(SyncError::InvalidSeason(season).into());
    }

    let sync_service = SyncService::new(&state.db, &state.client, &state.team_locks);

    match sync_service.try_sync(&code, season, &mut None).await {
        Ok(result) if result.success => Ok((StatusCode::OK, Json(result))),
        Ok(result) => Ok((StatusCode::MULTI_STATUS, Json(result))),
        Err(Error::FetchError(e)) => {
            tracing::warn!("Sync of {} {} season aborted: {}", code, season, e);

            Ok((
                StatusCode::BAD_GATEWAY,
                Json(SyncResult::aborted(e.to_string())),
            ))
        }
        Err(e) => Err(e),
    }
}

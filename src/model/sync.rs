//! Reconciliation plans and sync results.
//!
//! Plans reference competitions and seasons by their football-data.org IDs so they can be
//! built without touching the database; the store gateway resolves them to table IDs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Competition row to insert or overwrite, keyed by `competition_id`
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionUpsert {
    pub competition_id: i64,
    pub name: String,
    pub code: String,
    pub competition_type: String,
    pub emblem: Option<String>,
}

/// Season row to insert or overwrite, keyed by `season_id`
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonUpsert {
    pub season_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub current_matchday: Option<i32>,
    pub winner: Option<String>,
}

/// Team row to insert or overwrite together with its merged association lists
#[derive(Debug, Clone, PartialEq)]
pub struct TeamUpsert {
    pub team_id: i64,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub logo_url: Option<String>,
    pub venue: Option<String>,
    pub founded: Option<i32>,
    pub website: Option<String>,
    pub coach_name: Option<String>,
    pub address: Option<String>,
    pub club_colors: Option<String>,
    pub primary_color: Option<String>,
    /// External competition IDs in order of first appearance
    pub competition_ids: Vec<i64>,
    /// External season IDs in order of first appearance
    pub season_ids: Vec<i64>,
}

/// Persisted association lists of a team, as external IDs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAssociations {
    pub competition_ids: Vec<i64>,
    pub season_ids: Vec<i64>,
}

/// Everything one sync run writes, in application order
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertPlan {
    pub competition: CompetitionUpsert,
    pub season: SeasonUpsert,
    pub teams: Vec<TeamUpsert>,
}

/// Outcome of syncing one competition season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SyncResult {
    /// True only when the fetch succeeded and no entity failed
    pub success: bool,
    /// Number of teams persisted
    pub synced_count: usize,
    /// football-data.org IDs of the persisted teams, in payload order
    pub synced_team_ids: Vec<i64>,
    /// Table ID of the synced competition, if it was persisted
    pub competition_id: Option<i32>,
    /// Table ID of the synced season, if it was persisted
    pub season_id: Option<i32>,
    /// One message per failure, formatted as `<entity> <external id>: <message>`
    pub errors: Vec<String>,
}

impl SyncResult {
    /// Result of a run that failed before anything was written
    pub fn aborted(message: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }
}

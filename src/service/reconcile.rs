//! Reconciliation of fetched competition data against persisted state.
//!
//! Everything here is pure: the caller supplies the persisted association lists through
//! a lookup and applies the resulting [`UpsertPlan`] itself. Scalars always come from the
//! payload while association lists only ever grow.

use football_data::model::{
    competition::{Competition, CompetitionTeams, Season},
    team::Team,
};

use crate::{
    model::sync::{CompetitionUpsert, SeasonUpsert, TeamAssociations, TeamUpsert, UpsertPlan},
    service::color::normalize_color,
};

/// Appends `incoming` to `existing` unless it is already present.
///
/// The order of `existing` is preserved, so lists stay in order of first appearance.
pub fn merge_associations(existing: &[i64], incoming: i64) -> Vec<i64> {
    let mut merged = existing.to_vec();

    if !merged.contains(&incoming) {
        merged.push(incoming);
    }

    merged
}

pub fn plan_competition(competition: &Competition) -> CompetitionUpsert {
    CompetitionUpsert {
        competition_id: competition.id,
        name: competition.name.clone(),
        code: competition.code.clone(),
        competition_type: competition.competition_type.clone(),
        emblem: competition.emblem.clone(),
    }
}

/// Winner is taken from `winner.name`; a winner without a name counts as none.
pub fn plan_season(season: &Season) -> SeasonUpsert {
    SeasonUpsert {
        season_id: season.id,
        start_date: season.start_date,
        end_date: season.end_date,
        current_matchday: season.current_matchday,
        winner: season
            .winner
            .as_ref()
            .and_then(|winner| winner.name.clone()),
    }
}

/// Plans the upsert of one team.
///
/// # Arguments
/// - `team`: Team as listed in the payload
/// - `existing`: Persisted association lists, `None` if the team is not stored yet
/// - `competition_id`: football-data.org ID of the competition being synced
/// - `season_id`: football-data.org ID of the season being synced
pub fn plan_team(
    team: &Team,
    existing: Option<&TeamAssociations>,
    competition_id: i64,
    season_id: i64,
) -> TeamUpsert {
    let (competition_ids, season_ids) = match existing {
        Some(existing) => (
            merge_associations(&existing.competition_ids, competition_id),
            merge_associations(&existing.season_ids, season_id),
        ),
        None => (vec![competition_id], vec![season_id]),
    };

    TeamUpsert {
        team_id: team.id,
        name: team.name.clone(),
        short_name: team.short_name.clone(),
        tla: team.tla.clone(),
        logo_url: team.crest.clone(),
        venue: team.venue.clone(),
        founded: team.founded,
        website: team.website.clone(),
        coach_name: team.coach.as_ref().and_then(|coach| coach.name.clone()),
        address: team.address.clone(),
        club_colors: team.club_colors.clone(),
        primary_color: normalize_color(team.club_colors.as_deref()).map(str::to_string),
        competition_ids,
        season_ids,
    }
}

/// Builds the full plan for a fetched payload.
///
/// Teams are planned in payload order. `lookup` returns the persisted association lists
/// for a football-data.org team ID, or `None` for a team not stored yet.
pub fn reconcile<F>(payload: &CompetitionTeams, lookup: F) -> UpsertPlan
where
    F: Fn(i64) -> Option<TeamAssociations>,
{
    let competition = plan_competition(&payload.competition);
    let season = plan_season(&payload.season);

    let teams = payload
        .teams
        .iter()
        .map(|team| {
            let existing = lookup(team.id);
            plan_team(
                team,
                existing.as_ref(),
                competition.competition_id,
                season.season_id,
            )
        })
        .collect();

    UpsertPlan {
        competition,
        season,
        teams,
    }
}

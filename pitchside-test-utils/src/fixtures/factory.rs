use chrono::NaiveDate;
use football_data::model::{
    competition::{Competition, CompetitionTeams, Season},
    team::{Area, Coach, Team},
};

/// Create a mock competition with default test values.
///
/// # Arguments
/// - `competition_id` - The football-data.org competition ID to use
pub fn mock_competition(competition_id: i64) -> Competition {
    Competition {
        id: competition_id,
        name: "Premier League".to_string(),
        code: "PL".to_string(),
        competition_type: "LEAGUE".to_string(),
        emblem: Some("https://crests.football-data.org/PL.png".to_string()),
    }
}

/// Create a mock 2025/26 season without a winner.
///
/// # Arguments
/// - `season_id` - The football-data.org season ID to use
pub fn mock_season(season_id: i64) -> Season {
    Season {
        id: season_id,
        start_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 5, 24).unwrap(),
        current_matchday: Some(8),
        winner: None,
    }
}

/// Create a mock team with every optional field populated.
///
/// Names and the three letter abbreviation are derived from the ID so teams in the same
/// payload are distinguishable.
///
/// # Arguments
/// - `team_id` - The football-data.org team ID to use
pub fn mock_team(team_id: i64) -> Team {
    Team {
        id: team_id,
        name: Some(format!("Team {} FC", team_id)),
        short_name: Some(format!("Team {}", team_id)),
        tla: Some(format!("T{:02}", team_id % 100)),
        crest: Some(format!("https://crests.football-data.org/{}.png", team_id)),
        address: Some(format!("{} Stadium Way London N5 1BU", team_id)),
        website: Some(format!("http://www.team{}.com", team_id)),
        founded: Some(1886),
        club_colors: Some("Red / White".to_string()),
        venue: Some(format!("Stadium {}", team_id)),
        coach: Some(Coach {
            id: Some(team_id * 1000),
            name: Some(format!("Coach {}", team_id)),
        }),
        area: Some(Area {
            id: Some(2072),
            name: Some("England".to_string()),
            code: Some("ENG".to_string()),
            flag: Some("https://crests.football-data.org/770.svg".to_string()),
        }),
    }
}

/// Create a mock teams payload for a competition season.
///
/// # Arguments
/// - `competition_id` - football-data.org competition ID
/// - `season_id` - football-data.org season ID
/// - `team_ids` - Teams to list, in payload order
pub fn mock_competition_teams(
    competition_id: i64,
    season_id: i64,
    team_ids: &[i64],
) -> CompetitionTeams {
    CompetitionTeams {
        count: Some(team_ids.len() as u32),
        competition: mock_competition(competition_id),
        season: mock_season(season_id),
        teams: team_ids.iter().map(|&id| mock_team(id)).collect(),
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::team::Team;

/// Competition descriptor, e.g. the Premier League
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub code: String,
    /// e.g. `LEAGUE` or `CUP`
    #[serde(rename = "type")]
    pub competition_type: String,
    #[serde(default)]
    pub emblem: Option<String>,
}

/// Season descriptor for a competition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub current_matchday: Option<i32>,
    #[serde(default)]
    pub winner: Option<SeasonWinner>,
}

/// Team that won a finished season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWinner {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `GET /competitions/{code}/teams?season={year}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeams {
    #[serde(default)]
    pub count: Option<u32>,
    pub competition: Competition,
    pub season: Season,
    pub teams: Vec<Team>,
}

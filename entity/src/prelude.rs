pub use super::competition::Entity as Competition;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::team_competition::Entity as TeamCompetition;
pub use super::team_season::Entity as TeamSeason;

//! sea-orm entities for persisted football data.

pub mod prelude;

pub mod competition;
pub mod season;
pub mod team;
pub mod team_competition;
pub mod team_season;

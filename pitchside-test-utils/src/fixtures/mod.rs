//! Fixtures for database rows and mock football-data.org endpoints.
//!
//! - `factory` - football-data.org payload structs with standard test values
//! - `data` - competition, season, team and association rows
//! - `mockito` - mock HTTP endpoints for the football-data.org API

pub mod data;
pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn football<'a>(&'a mut self) -> FootballFixtures<'a> {
        FootballFixtures { setup: self }
    }
}

pub struct FootballFixtures<'a> {
    pub setup: &'a mut TestContext,
}

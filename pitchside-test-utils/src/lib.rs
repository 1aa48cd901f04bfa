//! Shared test utilities for the pitchside workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, database fixtures
//! and mock football-data.org endpoints, and `build()` returns a [`TestContext`] holding
//! an in-memory SQLite database, the mock server and a client pointed at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}

//! Data access layer repositories.
//!
//! Each repository wraps one table and is generic over `ConnectionTrait` so it can run
//! against either a pooled connection or a transaction. Rows are keyed by their
//! football-data.org ID; upserts overwrite scalar columns and never delete.

pub mod association;
pub mod competition;
pub mod season;
pub mod team;

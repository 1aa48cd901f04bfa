//! Response models for the football-data.org v4 API.
//!
//! Field names follow the API's camelCase JSON. Only the fields the API guarantees are
//! required; everything else deserializes to `None` when absent or null.

pub mod competition;
pub mod team;

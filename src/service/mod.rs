//! Service layer for business logic and orchestration.
//!
//! A sync run fetches a competition season from football-data.org, reconciles it
//! against persisted associations and applies the plan through the store gateway.

pub mod color;
pub mod gateway;
pub mod reconcile;
pub mod retry;
pub mod sync;

//! Utility functions and helpers shared by services, schedulers and controllers.
//!
//! Covers season year calculation and the keyed lock registry used to serialize
//! writes for the same team across concurrent sync runs.

pub mod lock;
pub mod time;

//! Football competition data sync for the pitchside predictor.
//!
//! Fetches competitions, seasons and teams from football-data.org and reconciles them into
//! a relational store. Scalar attributes always follow the latest payload while a team's
//! competition and season associations accumulate across syncs. Syncs run on a cron
//! schedule and can be triggered over HTTP.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;

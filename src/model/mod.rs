//! Data models shared between the service, data and controller layers.

pub mod api;
pub mod app;
pub mod sync;

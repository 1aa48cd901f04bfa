//! HTTP request handlers.

pub mod sync;

//! Error types for the pitchside server.
//!
//! Domain specific errors live in submodules and are aggregated into [`Error`] so the `?`
//! operator works across repositories, services and controllers. All errors implement
//! `IntoResponse` for Axum handlers and use `thiserror` for their `Display` output.

pub mod config;
pub mod retry;
pub mod sync;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, sync::SyncError},
    model::api::ErrorDto,
};

/// Main error type for the pitchside server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables), fatal at startup
/// - Fetch errors from the football-data.org API, abort a sync run before any write
/// - Sync errors (unresolvable references), reported per entity
/// - External library errors (database, scheduler, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Error raised while reconciling or applying fetched data.
    #[error(transparent)]
    SyncError(#[from] SyncError),
    /// football-data.org request failed or returned a malformed payload.
    #[error(transparent)]
    FetchError(#[from] football_data::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// IO error (binding the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid sync request (unknown competition code format, bad season)
/// - 502 Bad Gateway - football-data.org failed or returned something unusable
/// - 500 Internal Server Error - Everything else, logged with full detail
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::SyncError(err) => err.into_response(),
            Self::FetchError(err) => {
                tracing::warn!("football-data.org request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to fetch data from football-data.org".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

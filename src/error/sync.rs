use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

/// Kind of entity a sync step operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Competition,
    Season,
    Team,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Competition => write!(f, "competition"),
            Self::Season => write!(f, "season"),
            Self::Team => write!(f, "team"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SyncError {
    /// A team references a competition or season that has not been persisted.
    ///
    /// Happens when the competition or season upsert of the same run failed; the team is
    /// skipped rather than stored without the association.
    #[error("{kind} with external ID {external_id} is not persisted")]
    MissingReference { kind: EntityKind, external_id: i64 },
    #[error("Invalid competition code {0:?}")]
    InvalidCompetitionCode(String),
    #[error("Invalid season year {0}")]
    InvalidSeason(i32),
}

impl IntoResponse for SyncError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCompetitionCode(_) | Self::InvalidSeason(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

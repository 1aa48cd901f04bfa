use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors, transport failures)
    Retry,
    /// Failed permanently (bad request, bad data)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::FetchError(err) => {
                if err.is_transport() {
                    // Network error, connection issue or timeout
                    return ErrorRetryStrategy::Retry;
                }

                match err.status() {
                    // football-data.org is temporarily unavailable
                    Some(status) if status >= 500 => ErrorRetryStrategy::Retry,
                    // Free tier allows 10 requests per minute, backoff and try again
                    Some(429) => ErrorRetryStrategy::Retry,
                    // Invalid token, unknown competition, restricted resource
                    Some(_) => ErrorRetryStrategy::Fail,
                    // Malformed payloads and client construction errors won't fix themselves
                    None => ErrorRetryStrategy::Fail,
                }
            }

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Query errors, constraint violations, type conversion errors
                _ => ErrorRetryStrategy::Fail,
            },

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::SyncError(_) => ErrorRetryStrategy::Fail,
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

//! Tests for the start_scheduler function.

use pitchside::{error::Error, scheduler::start_scheduler};

use super::*;

/// Expect the scheduler to start with a six field cron expression
#[tokio::test]
async fn starts_with_valid_cron() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sync_tables().build().await?;
    let state = test.to_app_state::<AppState>();

    let result = start_scheduler(&state, "0 0 6 * * *", &["PL".to_string()]).await;

    assert!(result.is_ok());
    let mut scheduler = result.unwrap();
    scheduler.shutdown().await.unwrap();

    Ok(())
}

/// Expect SchedulerError for an unparseable cron expression
#[tokio::test]
async fn fails_with_invalid_cron() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sync_tables().build().await?;
    let state = test.to_app_state::<AppState>();

    let result = start_scheduler(&state, "every morning", &["PL".to_string()]).await;

    assert!(matches!(result, Err(Error::SchedulerError(_))));

    Ok(())
}

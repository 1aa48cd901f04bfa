//! Tests for SyncService::sync_with_retry method.
//!
//! This module verifies that temporary football-data.org failures are retried while
//! permanent failures are returned to the caller after a single attempt.

use pitchside::error::Error;

use super::*;

/// Tests recovery from a temporary football-data.org outage.
///
/// Verifies that a 503 response is retried and the following successful response is
/// synced normally.
///
/// Expected: Ok with a successful result after two requests
#[tokio::test]
async fn retries_on_server_error() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[57, 61]);

    // First request fails with 503, retry hits the payload endpoint
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/competitions/PL/teams")
                .match_query(mockito::Matcher::Any)
                .with_status(503)
                .with_body("Service Unavailable")
                .expect(1)
                .create()
        })
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_with_retry("PL", 2025).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let result = result.unwrap();
    assert!(result.success);
    assert_eq!(result.synced_count, 2);
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 2);

    test.assert_mocks();

    Ok(())
}

/// Tests that client errors are not retried.
///
/// Verifies that a 404 for an unknown competition is returned after one request
/// without writing anything.
///
/// Expected: Err(Error::FetchError) with status 404
#[tokio::test]
async fn fails_without_retry_on_client_error() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_sync_tables().build().await?;
    let endpoint = test.football().create_teams_endpoint_with_body(
        "XX",
        2025,
        404,
        r#"{"message": "The resource you are looking for does not exist.", "errorCode": 404}"#,
        1,
    );

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_with_retry("XX", 2025).await;

    assert!(matches!(result, Err(Error::FetchError(ref e)) if e.status() == Some(404)));
    assert_eq!(count_rows(&test.db, entity::prelude::Competition).await?, 0);

    endpoint.assert();

    Ok(())
}

/// Tests that a malformed payload is not retried.
///
/// Expected: Err(Error::FetchError) after a single request
#[tokio::test]
async fn fails_without_retry_on_malformed_payload() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_sync_tables().build().await?;
    let endpoint =
        test.football()
            .create_teams_endpoint_with_body("PL", 2025, 200, r#"{"teams": "none"}"#, 1);

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_with_retry("PL", 2025).await;

    assert!(matches!(
        result,
        Err(Error::FetchError(football_data::Error::MalformedPayload { .. }))
    ));

    endpoint.assert();

    Ok(())
}

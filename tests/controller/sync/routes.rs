//! Tests for the sync route registered on the application router.

use axum::{body::Body, http::Request};
use pitchside::router::routes;
use tower::ServiceExt;

use super::*;

/// Tests the sync route through the router.
///
/// Verifies the path parameter and season query are extracted.
///
/// Expected: 200 from `POST /api/sync/PL?season=2025`
#[tokio::test]
async fn routes_sync_request() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[57]);

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;

    let app = routes().with_state(test.to_app_state::<AppState>());
    let request = Request::builder()
        .method("POST")
        .uri("/api/sync/PL?season=2025")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = sync_result(response).await;
    assert_eq!(body.synced_count, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests that a non-numeric season is rejected by the query extractor.
///
/// Expected: 400
#[tokio::test]
async fn rejects_non_numeric_season() -> Result<(), TestError> {
    let test = TestBuilder::new().with_sync_tables().build().await?;

    let app = routes().with_state(test.to_app_state::<AppState>());
    let request = Request::builder()
        .method("POST")
        .uri("/api/sync/PL?season=latest")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the sync path listed
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let app = routes().with_state(test.to_app_state::<AppState>());
    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(document["paths"]["/api/sync/{code}"]["post"].is_object());

    Ok(())
}

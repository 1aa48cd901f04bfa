//! Tests for SeasonRepository::find_by_season_id method.

use super::*;

/// Tests finding stored seasons by football-data.org ID.
///
/// Verifies that only the requested season is returned when several are stored.
///
/// Expected: Ok(Some) for stored seasons, Ok(None) otherwise
#[tokio::test]
async fn finds_season_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Season)
        .build()
        .await?;

    let season_repo = SeasonRepository::new(&test.db);
    season_repo.upsert(season_upsert(2402)).await?;
    let current = season_repo.upsert(season_upsert(2403)).await?;

    let result = season_repo.find_by_season_id(2403).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), Some(current));
    assert!(season_repo.find_by_season_id(2404).await?.is_none());

    Ok(())
}

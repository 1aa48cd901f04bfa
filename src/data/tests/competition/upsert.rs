//! Tests for CompetitionRepository::upsert method.

use super::*;

/// Tests inserting a new competition.
///
/// Verifies that a competition not yet in the table is created with every
/// scalar column taken from the upsert.
///
/// Expected: Ok with the created competition
#[tokio::test]
async fn inserts_new_competition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Competition)
        .build()
        .await?;

    let competition_repo = CompetitionRepository::new(&test.db);
    let result = competition_repo.upsert(competition_upsert(2021)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.competition_id, 2021);
    assert_eq!(created.code, "PL");
    assert_eq!(created.competition_type, "LEAGUE");

    Ok(())
}

/// Tests overwriting an existing competition.
///
/// Verifies that upserting the same competition ID updates scalar columns in
/// place, keeps the table ID and created_at, and advances updated_at.
///
/// Expected: Ok with one row carrying the new name and emblem
#[tokio::test]
async fn overwrites_existing_competition() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Competition)
        .build()
        .await?;

    let competition_repo = CompetitionRepository::new(&test.db);
    let initial = competition_repo.upsert(competition_upsert(2021)).await?;

    let mut update = competition_upsert(2021);
    update.name = "English Premier League".to_string();
    update.emblem = None;
    let latest = competition_repo.upsert(update).await?;

    assert_eq!(latest.id, initial.id);
    assert_eq!(latest.created_at, initial.created_at);
    assert!(latest.updated_at > initial.updated_at);
    assert_eq!(latest.name, "English Premier League");
    assert_eq!(latest.emblem, None);

    let rows = entity::prelude::Competition::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests error when the competition table is missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let competition_repo = CompetitionRepository::new(&test.db);
    let result = competition_repo.upsert(competition_upsert(2021)).await;

    assert!(result.is_err());

    Ok(())
}

//! Tests for StoreGateway::apply_team method.
//!
//! This module verifies reference resolution, rollback on failure and that concurrent
//! applies for the same team never lose an association.

use pitchside::error::{
    sync::{EntityKind, SyncError},
    Error,
};

use super::*;

/// Tests applying a new team.
///
/// Expected: Ok with the team persisted and associated at position 0
#[tokio::test]
async fn applies_new_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_competition(2021)
        .with_mock_season(2403)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let gateway = StoreGateway::new(&test.db, &team_locks);
    let result = gateway.apply_team(&team_plan(57, 2021, 2403)).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    let associations = associations_of(&test.db, 57).await?;
    assert_eq!(associations.competition_ids, vec![2021]);
    assert_eq!(associations.season_ids, vec![2403]);

    let row = entity::prelude::TeamCompetition::find().one(&test.db).await?.unwrap();
    assert_eq!(row.position, 0);
    assert_eq!(row.team_id, result.unwrap());

    Ok(())
}

/// Tests applying a team referencing a competition without a row.
///
/// Verifies that nothing of the team is written when a reference cannot be resolved.
///
/// Expected: Err(SyncError::MissingReference) naming the competition
#[tokio::test]
async fn fails_on_missing_reference() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_season(2403)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let gateway = StoreGateway::new(&test.db, &team_locks);
    let result = gateway.apply_team(&team_plan(57, 2021, 2403)).await;

    assert!(matches!(
        result,
        Err(Error::SyncError(SyncError::MissingReference {
            kind: EntityKind::Competition,
            external_id: 2021
        }))
    ));
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 0);
    assert_eq!(count_rows(&test.db, entity::prelude::TeamSeason).await?, 0);

    Ok(())
}

/// Tests that a plan built from a stale read keeps persisted associations.
///
/// Verifies that a plan missing a competition the team was associated with after the
/// plan was built does not remove it.
///
/// Expected: both competitions kept with the persisted one first
#[tokio::test]
async fn merges_onto_persisted_associations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_season(2403)
        .with_mock_competition(2001)
        .with_mock_team(57, &[2021], &[2403])
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let gateway = StoreGateway::new(&test.db, &team_locks);
    let result = gateway.apply_team(&team_plan(57, 2001, 2403)).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    let associations = associations_of(&test.db, 57).await?;
    assert_eq!(associations.competition_ids, vec![2021, 2001]);
    assert_eq!(associations.season_ids, vec![2403]);
    assert_eq!(count_rows(&test.db, entity::prelude::TeamSeason).await?, 1);

    Ok(())
}

/// Tests concurrent applies for the same team from two competitions.
///
/// Both plans are built as if the team were new, as two overlapping runs would.
///
/// Expected: both succeed and the team ends with both competitions
#[tokio::test]
async fn serializes_concurrent_applies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_competition(2021)
        .with_mock_competition(2001)
        .with_mock_season(2403)
        .with_mock_season(2404)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let gateway = StoreGateway::new(&test.db, &team_locks);
    let premier_league = team_plan(57, 2021, 2403);
    let champions_league = team_plan(57, 2001, 2404);

    let (first, second) = tokio::join!(
        gateway.apply_team(&premier_league),
        gateway.apply_team(&champions_league)
    );

    assert!(first.is_ok(), "Error: {:?}", first);
    assert!(second.is_ok(), "Error: {:?}", second);
    assert_eq!(first.unwrap(), second.unwrap());

    let mut associations = associations_of(&test.db, 57).await?;
    associations.competition_ids.sort();
    associations.season_ids.sort();
    assert_eq!(associations.competition_ids, vec![2001, 2021]);
    assert_eq!(associations.season_ids, vec![2403, 2404]);
    assert!(team_locks.is_empty());

    Ok(())
}

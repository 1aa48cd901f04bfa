//! Tests for SyncService::sync_competition_season method.
//!
//! This module verifies the full fetch, reconcile and apply pipeline, including
//! idempotence, monotonic association lists, scalar overwrites, per team failure
//! isolation and aborting on fetch failures before any write.

use super::*;

/// Tests syncing a competition season into an empty database.
///
/// Verifies that the competition, season and every team are persisted and each
/// team is associated with exactly the synced competition and season.
///
/// Expected: success with 3 teams synced and both table IDs set
#[tokio::test]
async fn syncs_new_competition_season() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[57, 61, 65]);

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(result.success, "Errors: {:?}", result.errors);
    assert_eq!(result.synced_count, 3);
    assert_eq!(result.synced_team_ids, vec![57, 61, 65]);
    assert!(result.competition_id.is_some());
    assert!(result.season_id.is_some());
    assert!(result.errors.is_empty());

    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 3);
    for team_id in [57, 61, 65] {
        let associations = associations_of(&test.db, team_id).await?;
        assert_eq!(associations.competition_ids, vec![2021]);
        assert_eq!(associations.season_ids, vec![2403]);
    }

    let team = entity::prelude::Team::find_by_id(1).one(&test.db).await?.unwrap();
    assert_eq!(team.primary_color.as_deref(), Some("#DC2626"));

    test.assert_mocks();

    Ok(())
}

/// Tests that syncing the same payload twice changes nothing.
///
/// Verifies that the second run reports the same result and leaves exactly one
/// row per competition, season, team and association.
///
/// Expected: identical results and no duplicate rows
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[57, 61]);

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, payload, 2)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let first = sync_service.sync_competition_season("PL", 2025).await;
    let second = sync_service.sync_competition_season("PL", 2025).await;

    assert_eq!(first, second);
    assert_eq!(count_rows(&test.db, entity::prelude::Competition).await?, 1);
    assert_eq!(count_rows(&test.db, entity::prelude::Season).await?, 1);
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 2);
    assert_eq!(count_rows(&test.db, entity::prelude::TeamCompetition).await?, 2);
    assert_eq!(count_rows(&test.db, entity::prelude::TeamSeason).await?, 2);

    test.assert_mocks();

    Ok(())
}

/// Tests that associations accumulate across competitions.
///
/// Verifies that a team synced for the Premier League and then the Champions
/// League keeps both competitions and both seasons in order of first appearance.
///
/// Expected: lists [2021, 2001] and [2403, 2404]
#[tokio::test]
async fn accumulates_associations_across_competitions() -> Result<(), TestError> {
    let premier_league = factory::mock_competition_teams(2021, 2403, &[57, 61]);
    let mut champions_league = factory::mock_competition_teams(2001, 2404, &[57]);
    champions_league.competition.code = "CL".to_string();
    champions_league.competition.name = "UEFA Champions League".to_string();

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, premier_league, 1)
        .with_teams_endpoint("CL", 2025, champions_league, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let first = sync_service.sync_competition_season("PL", 2025).await;
    let second = sync_service.sync_competition_season("CL", 2025).await;

    assert!(first.success && second.success);

    let arsenal = associations_of(&test.db, 57).await?;
    assert_eq!(arsenal.competition_ids, vec![2021, 2001]);
    assert_eq!(arsenal.season_ids, vec![2403, 2404]);

    // Team only listed in the first payload keeps its single association
    let chelsea = associations_of(&test.db, 61).await?;
    assert_eq!(chelsea.competition_ids, vec![2021]);
    assert_eq!(chelsea.season_ids, vec![2403]);

    test.assert_mocks();

    Ok(())
}

/// Tests the transition from an unknown to a known team across seasons.
///
/// Verifies that syncing C1/S1 creates the team with [C1]/[S1] and a later
/// C1/S2 sync only appends the new season.
///
/// Expected: [2021]/[2402] after the first sync, [2021]/[2402, 2403] after the second
#[tokio::test]
async fn appends_new_season_for_known_team() -> Result<(), TestError> {
    let previous_season = factory::mock_competition_teams(2021, 2402, &[57]);
    let current_season = factory::mock_competition_teams(2021, 2403, &[57]);

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2024, previous_season, 1)
        .with_teams_endpoint("PL", 2025, current_season, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);

    sync_service.sync_competition_season("PL", 2024).await;
    let associations = associations_of(&test.db, 57).await?;
    assert_eq!(associations.competition_ids, vec![2021]);
    assert_eq!(associations.season_ids, vec![2402]);

    sync_service.sync_competition_season("PL", 2025).await;
    let associations = associations_of(&test.db, 57).await?;
    assert_eq!(associations.competition_ids, vec![2021]);
    assert_eq!(associations.season_ids, vec![2402, 2403]);

    test.assert_mocks();

    Ok(())
}

/// Tests that scalar attributes follow the latest payload.
///
/// Verifies that a team already stored with one venue ends up with the venue
/// from the payload while keeping its table ID and prior associations.
///
/// Expected: venue overwritten, competition and season lists merged
#[tokio::test]
async fn overwrites_team_scalars() -> Result<(), TestError> {
    let mut payload = factory::mock_competition_teams(2021, 2403, &[57]);
    payload.teams[0].venue = Some("Emirates Stadium".to_string());
    payload.teams[0].club_colors = Some("Navy / Gold".to_string());

    let mut test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_team(57, &[2021], &[2402])
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;
    let existing = test.football().insert_mock_team(57).await?;
    assert_eq!(existing.venue.as_deref(), Some("Stadium 57"));

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(result.success, "Errors: {:?}", result.errors);

    let team = entity::prelude::Team::find_by_id(existing.id)
        .one(&test.db)
        .await?
        .expect("team not found");
    assert_eq!(team.venue.as_deref(), Some("Emirates Stadium"));
    assert_eq!(team.primary_color.as_deref(), Some("#1E293B"));
    assert_eq!(team.created_at, existing.created_at);

    let associations = associations_of(&test.db, 57).await?;
    assert_eq!(associations.competition_ids, vec![2021]);
    assert_eq!(associations.season_ids, vec![2402, 2403]);

    test.assert_mocks();

    Ok(())
}

/// Tests that a failing team does not affect the others.
///
/// Verifies that when the second of three teams is missing its required three
/// letter abbreviation, the first and third are still persisted with their
/// associations and the failure is reported by team ID.
///
/// Expected: synced_count 2, one error naming team 61, success false
#[tokio::test]
async fn isolates_team_failures() -> Result<(), TestError> {
    let mut payload = factory::mock_competition_teams(2021, 2403, &[57, 61, 65]);
    payload.teams[1].tla = None;

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(!result.success);
    assert_eq!(result.synced_count, 2);
    assert_eq!(result.synced_team_ids, vec![57, 65]);
    assert!(result.competition_id.is_some());
    assert!(result.season_id.is_some());
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("team 61: "),
        "unexpected error: {}",
        result.errors[0]
    );
    assert!(result.errors[0].contains("tla"));

    for team_id in [57, 65] {
        let associations = associations_of(&test.db, team_id).await?;
        assert_eq!(associations.competition_ids, vec![2021]);
        assert_eq!(associations.season_ids, vec![2403]);
    }
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 2);
    assert_eq!(count_rows(&test.db, entity::prelude::TeamCompetition).await?, 2);

    test.assert_mocks();

    Ok(())
}

/// Tests that an incomplete team descriptor only fails that team.
///
/// Verifies that a team whose area lacks an ID is still synced and a team with a null
/// name is reported on its own while the rest of the payload is persisted.
///
/// Expected: teams 57 and 61 synced, one error naming team 65
#[tokio::test]
async fn isolates_incomplete_team_descriptor() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[57, 61, 65]);
    let mut body = serde_json::to_value(&payload).unwrap();
    body["teams"][1]["area"] = serde_json::json!({ "name": "England" });
    body["teams"][2]["name"] = serde_json::Value::Null;

    let mut test = TestBuilder::new().with_sync_tables().build().await?;
    let endpoint = test.football().create_teams_endpoint_with_body(
        "PL",
        2025,
        200,
        &body.to_string(),
        1,
    );

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(!result.success);
    assert!(result.competition_id.is_some());
    assert_eq!(result.synced_team_ids, vec![57, 61]);
    assert_eq!(result.errors.len(), 1);
    assert!(
        result.errors[0].starts_with("team 65: "),
        "unexpected error: {}",
        result.errors[0]
    );
    assert!(result.errors[0].contains("name"));
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 2);

    endpoint.assert();

    Ok(())
}

/// Tests that a failed fetch aborts the run before any write.
///
/// Expected: success false, no counts or IDs, empty tables
#[tokio::test]
async fn aborts_on_fetch_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/competitions/PL/teams")
                .match_query(mockito::Matcher::Any)
                .with_status(403)
                .with_body(r#"{"message": "The resource you are looking for is restricted."}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(!result.success);
    assert_eq!(result.synced_count, 0);
    assert_eq!(result.competition_id, None);
    assert_eq!(result.season_id, None);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("403"));

    assert_eq!(count_rows(&test.db, entity::prelude::Competition).await?, 0);
    assert_eq!(count_rows(&test.db, entity::prelude::Season).await?, 0);
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 0);

    test.assert_mocks();

    Ok(())
}

/// Tests that a payload missing required fields aborts the run.
///
/// Expected: success false and nothing written
#[tokio::test]
async fn aborts_on_malformed_payload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_sync_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/competitions/PL/teams")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"count": 0, "teams": []}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(!result.success);
    assert_eq!(result.competition_id, None);
    assert!(result.errors[0].contains("Malformed"));
    assert_eq!(count_rows(&test.db, entity::prelude::Competition).await?, 0);

    test.assert_mocks();

    Ok(())
}

/// Tests syncing a competition season without teams.
///
/// Expected: success with competition and season persisted and no teams
#[tokio::test]
async fn syncs_empty_team_list() -> Result<(), TestError> {
    let payload = factory::mock_competition_teams(2021, 2403, &[]);

    let test = TestBuilder::new()
        .with_sync_tables()
        .with_teams_endpoint("PL", 2025, payload, 1)
        .build()
        .await?;

    let team_locks = TeamLocks::default();
    let sync_service = SyncService::new(&test.db, &test.client, &team_locks);
    let result = sync_service.sync_competition_season("PL", 2025).await;

    assert!(result.success);
    assert_eq!(result.synced_count, 0);
    assert!(result.competition_id.is_some());
    assert_eq!(count_rows(&test.db, entity::prelude::Team).await?, 0);

    test.assert_mocks();

    Ok(())
}

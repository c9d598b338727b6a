//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::search::Filter;

fn create_test_db() -> StatsDatabase {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut db = StatsDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn test_player(player_id: i64, year: &str) -> Player {
    Player {
        player_id: PlayerId::new(player_id),
        year: year.to_string(),
        name: "Test Player".to_string(),
        team_id: TeamId::new(1),
        position: "QB".to_string(),
        jersey_number: 12,
        age: 25,
        games_played: 16,
        award: 0,
    }
}

#[test]
fn test_schema_is_idempotent() {
    let mut db = create_test_db();
    assert!(db.initialize_schema().is_ok());
}

#[test]
fn test_upsert_and_select_player() {
    let mut db = create_test_db();
    let player = test_player(12345, "2000");

    db.upsert(&player).unwrap();
    let players: Vec<Player> = db.select(&Filter::new()).unwrap();

    assert_eq!(players, vec![player]);
}

#[test]
fn test_upsert_replaces_on_compound_key() {
    let mut db = create_test_db();
    db.upsert(&test_player(1, "2000")).unwrap();

    let mut updated = test_player(1, "2000");
    updated.games_played = 3;
    db.upsert(&updated).unwrap();

    // Same key in a different year is a separate row
    db.upsert(&test_player(1, "2001")).unwrap();

    assert_eq!(db.count::<Player>().unwrap(), 2);
    let rows: Vec<Player> = db
        .select(&Filter::new().eq("year", Some("2000".to_string())))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].games_played, 3);
}

#[test]
fn test_upsert_many_returns_count() {
    let mut db = create_test_db();
    let players = vec![
        test_player(1, "2000"),
        test_player(2, "2000"),
        test_player(3, "2000"),
    ];

    assert_eq!(db.upsert_many(&players).unwrap(), 3);
    assert_eq!(db.count::<Player>().unwrap(), 3);
}

#[test]
fn test_injury_notes_round_trip_null() {
    let mut db = create_test_db();
    let injury = Injury {
        player_id: PlayerId::new(3),
        game_id: GameId::new(10),
        team_id: TeamId::new(1),
        year: "2000".to_string(),
        week: 2,
        body_part: "Hamstring".to_string(),
        status: 3,
        notes: None,
    };

    db.upsert(&injury).unwrap();
    let rows: Vec<Injury> = db.select(&Filter::new()).unwrap();
    assert_eq!(rows[0].notes, None);
}

#[test]
fn test_clear_all_data() {
    let mut db = create_test_db();
    db.upsert(&test_player(1, "2000")).unwrap();
    db.upsert(&TeamDefenseSummary {
        team_id: TeamId::new(1),
        year: "2000".to_string(),
        games: 16,
        points_allowed: 250,
        yards_allowed: 4800,
        sacks: 41.5,
        interceptions: 17,
        fumbles_recovered: 9,
        defensive_touchdowns: 3,
    })
    .unwrap();

    db.clear_all_data().unwrap();

    assert_eq!(db.count::<Player>().unwrap(), 0);
    assert_eq!(db.count::<TeamDefenseSummary>().unwrap(), 0);
}

#[test]
fn test_select_propagates_storage_errors() {
    let db = create_test_db();
    db.conn.execute("DROP TABLE players", []).unwrap();

    let result: crate::Result<Vec<Player>> = db.select(&Filter::new());
    match result {
        Err(crate::StatsError::Database(_)) => (),
        other => panic!("Expected Database error, got {:?}", other),
    }
}

#[test]
fn test_import_dataset_counts() {
    let mut db = create_test_db();
    let dataset = StatsDataset {
        players: vec![test_player(1, "2000"), test_player(2, "2000")],
        ..Default::default()
    };

    let summary = db.import_dataset(&dataset, false).unwrap();
    assert_eq!(summary.players, 2);
    assert_eq!(summary.team_games, 0);
    assert_eq!(summary.total(), 2);
}

fn test_team_game(game_id: i64) -> TeamGame {
    TeamGame {
        game_id: GameId::new(game_id),
        year: "2000".to_string(),
        date: "2000-09-03".to_string(),
        game_type: 1,
        team_id: TeamId::new(1),
        opponent: TeamId::new(2),
        home: true,
        points_scored: 21,
        points_allowed: 14,
        total_yards: 342,
        turnovers: 1,
    }
}

fn reject_team_game_inserts(db: &StatsDatabase) {
    db.conn
        .execute_batch(
            "CREATE TRIGGER reject_team_games BEFORE INSERT ON team_games
             BEGIN SELECT RAISE(ABORT, 'team_games is read-only'); END;",
        )
        .unwrap();
}

#[test]
fn test_failed_import_with_clear_keeps_existing_rows() {
    let mut db = create_test_db();
    let mut kept = test_player(1, "1999");
    kept.name = "Keep".to_string();
    db.upsert(&kept).unwrap();
    reject_team_game_inserts(&db);

    let mut incoming = test_player(2, "2000");
    incoming.name = "New".to_string();
    let dataset = StatsDataset {
        players: vec![incoming],
        team_games: vec![test_team_game(1)],
        ..Default::default()
    };

    assert!(db.import_dataset(&dataset, true).is_err());

    // Neither the clear nor the player insert may survive the failure
    let players: Vec<Player> = db.select(&Filter::new()).unwrap();
    assert_eq!(players, vec![kept]);
}

#[test]
fn test_failed_import_without_clear_commits_nothing() {
    let mut db = create_test_db();
    reject_team_game_inserts(&db);

    let dataset = StatsDataset {
        players: vec![test_player(1, "2000")],
        team_games: vec![test_team_game(1)],
        ..Default::default()
    };

    assert!(db.import_dataset(&dataset, false).is_err());
    assert_eq!(db.count::<Player>().unwrap(), 0);
}

#[test]
fn test_import_with_clear_replaces_contents() {
    let mut db = create_test_db();
    db.upsert(&test_player(1, "1999")).unwrap();
    db.upsert(&test_team_game(9)).unwrap();

    let dataset = StatsDataset {
        players: vec![test_player(2, "2000")],
        ..Default::default()
    };
    db.import_dataset(&dataset, true).unwrap();

    let players: Vec<Player> = db.select(&Filter::new()).unwrap();
    assert_eq!(players, vec![test_player(2, "2000")]);
    assert_eq!(db.count::<TeamGame>().unwrap(), 0);
}

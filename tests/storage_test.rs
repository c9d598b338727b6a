//! Integration tests for file-backed storage and dataset import

use stats_search::{search::*, storage::*, GameType, TeamId};
use std::io::Write;

const DATASET: &str = r#"{
    "team_games": [
        {"game_id": 1, "year": "2000", "date": "2000-09-03", "game_type": 1,
         "team_id": 1, "opponent": 2, "home": true, "points_scored": 21,
         "points_allowed": 14, "total_yards": 342, "turnovers": 1},
        {"game_id": 1, "year": "2000", "date": "2000-09-03", "game_type": 1,
         "team_id": 2, "opponent": 1, "home": false, "points_scored": 14,
         "points_allowed": 21, "total_yards": 280, "turnovers": 3}
    ],
    "players": [
        {"player_id": 10, "year": "2000", "name": "Sam Example", "team_id": 1,
         "position": "QB", "jersey_number": 7, "age": 29, "games_played": 16,
         "award": 1}
    ],
    "injuries": [
        {"player_id": 10, "game_id": 1, "team_id": 1, "year": "2000", "week": 1,
         "body_part": "Shoulder", "status": 1, "notes": "limited"}
    ],
    "team_defense_summaries": [
        {"team_id": 1, "year": "2000", "games": 16, "points_allowed": 250,
         "yards_allowed": 4800, "sacks": 44.5, "interceptions": 20,
         "fumbles_recovered": 11, "defensive_touchdowns": 4}
    ]
}"#;

#[test]
fn test_open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stats.db");

    let db = StatsDatabase::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(db.count::<TeamGame>().unwrap(), 0);
}

#[test]
fn test_data_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.db");

    {
        let mut db = StatsDatabase::open(&path).unwrap();
        let dataset: StatsDataset = serde_json::from_str(DATASET).unwrap();
        db.import_dataset(&dataset, false).unwrap();
    }

    let db = StatsDatabase::open(&path).unwrap();
    let games = db
        .fetch_team_games(&TeamGameSearchRequest::default().with_team_id(TeamId::new(2)))
        .unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].game_type, GameType::RegularSeason);
    assert!(!games[0].home);
}

#[test]
fn test_dataset_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();

    let dataset = StatsDataset::from_path(file.path()).unwrap();
    assert_eq!(dataset.team_games.len(), 2);
    assert_eq!(dataset.players.len(), 1);
    assert_eq!(dataset.injuries[0].notes.as_deref(), Some("limited"));
    assert_eq!(dataset.team_defense_summaries[0].sacks, 44.5);

    let mut db = StatsDatabase::new_in_memory().unwrap();
    let summary = db.import_dataset(&dataset, false).unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            injuries: 1,
            players: 1,
            team_games: 2,
            team_defense_summaries: 1,
        }
    );
}

#[test]
fn test_dataset_missing_sections_default_to_empty() {
    let dataset: StatsDataset = serde_json::from_str(r#"{"players": []}"#).unwrap();
    assert_eq!(dataset, StatsDataset::default());
}

#[test]
fn test_dataset_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    match StatsDataset::from_path(file.path()) {
        Err(stats_search::StatsError::Json(_)) => (),
        other => panic!("Expected Json error, got {:?}", other),
    }
}

#[test]
fn test_reimport_replaces_rows() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let mut dataset: StatsDataset = serde_json::from_str(DATASET).unwrap();
    db.import_dataset(&dataset, false).unwrap();

    dataset.players[0].games_played = 12;
    db.import_dataset(&dataset, false).unwrap();

    let players = db.fetch_players(&PlayerSearchRequest::default()).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].games_played, 12);
}

//! Tests for writing, reading and replaying save files.

use chrono::{TimeZone, Utc};
use strictly_fifteen::{
    Digit, GameConfig, GameInProgress, GameResult, Mark, Move, Outcome, Position, read_history,
    write_history,
};
use tempfile::NamedTempFile;

fn mv(player: &str, mark: Mark, row: usize, col: usize, value: u8) -> Move {
    Move::at(
        player,
        mark,
        Position::new(row, col).unwrap(),
        Digit::new(value).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    )
}

#[test]
fn test_saved_game_replays_to_same_outcome() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let moves = vec![
        mv("Ada", Mark::X, 0, 0, 8),
        mv("Bob", Mark::O, 0, 1, 2),
        mv("Ada", Mark::X, 1, 1, 4),
        mv("Bob", Mark::O, 1, 0, 2),
        mv("Ada", Mark::X, 2, 2, 3),
    ];

    write_history(file.path(), &moves).expect("Write failed");
    let content = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(content.lines().next(), Some("Ada,0,0,8,2024-01-02T03:04:05+00:00"));
    assert_eq!(content.lines().count(), 5);

    let loaded = read_history(file.path(), Mark::X).expect("Read failed");
    assert_eq!(loaded, moves);

    match GameInProgress::replay(Mark::X, &loaded).unwrap() {
        GameResult::Finished(finished) => {
            assert_eq!(finished.outcome(), &Outcome::Winner(Mark::X));
            assert_eq!(finished.winner_name(), Some("Ada"));
        }
        GameResult::InProgress(_) => panic!("Saved game was won"),
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let path = file.path().to_path_buf();
    drop(file);
    assert!(read_history(&path, Mark::X).is_err());
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_such_dir").join("game.txt");
    let err = write_history(&path, &[mv("Ada", Mark::X, 0, 0, 1)]).unwrap_err();
    assert!(err.message.contains("Cannot create"));
}

#[test]
fn test_name_with_line_break_is_refused() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("game.txt");
    let moves = vec![
        mv("Ada\nLovelace", Mark::X, 0, 0, 1),
        mv("Bob", Mark::O, 1, 1, 2),
    ];

    let err = write_history(&path, &moves).unwrap_err();
    assert!(err.message.contains("line break"));
    assert!(!path.exists());

    let carriage = vec![mv("Ada\rLovelace", Mark::X, 0, 0, 1)];
    assert!(write_history(&path, &carriage).is_err());
}

#[test]
fn test_config_with_multiline_name_fails_to_load() {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(file.path(), "computer_name = \"Deep\\r\\nThought\"\n").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("computer_name"));
}

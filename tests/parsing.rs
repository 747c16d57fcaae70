use std::fs;
use std::path::PathBuf;

use mini_leaderboard::leaderboard_fetch::parse_leaderboard_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_leaderboard_fixture() {
    let raw = read_fixture("leaderboard.json");
    let record = parse_leaderboard_json(&raw).expect("fixture should parse");
    assert_eq!(record.entries.len(), 5);

    let alice = &record.entries[0];
    assert_eq!(alice.user_id, Some(901));
    assert_eq!(alice.rank, Some(1));
    assert_eq!(alice.solve_time(), Some(("alice", 42)));
}

#[test]
fn entries_without_a_time_are_invalid() {
    let raw = read_fixture("leaderboard.json");
    let record = parse_leaderboard_json(&raw).expect("fixture should parse");

    // no score object at all
    assert!(record.entries[2].solve_time().is_none());
    // score object without secondsSpentSolving
    assert!(record.entries[3].solve_time().is_none());
    // time but no name
    assert!(record.entries[4].solve_time().is_none());
}

#[test]
fn missing_data_field_parses_to_empty_entries() {
    let raw = read_fixture("leaderboard_no_data.json");
    let record = parse_leaderboard_json(&raw).expect("fixture should parse");
    assert!(record.entries.is_empty());
}

#[test]
fn null_and_empty_bodies_are_empty_records() {
    assert!(parse_leaderboard_json("null").unwrap().entries.is_empty());
    assert!(parse_leaderboard_json("").unwrap().entries.is_empty());
    assert!(parse_leaderboard_json("  \n ").unwrap().entries.is_empty());
}

#[test]
fn malformed_body_is_an_error() {
    assert!(parse_leaderboard_json("{not json").is_err());
}

use std::io::Cursor;

use grind_cli::commands::handle_play_command;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = grind_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).expect("stdout is utf8"),
        String::from_utf8(err).expect("stderr is utf8"),
    )
}

#[test]
fn missing_subcommand_exits_with_code_2() {
    let (code, _out, err) = run_cli(&["grind"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn help_prints_to_stdout_and_exits_zero() {
    let (code, out, _err) = run_cli(&["grind", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));
    assert!(out.contains("sim"));
}

#[test]
fn tricks_lists_the_catalog() {
    let (code, out, _err) = run_cli(&["grind", "tricks"]);
    assert_eq!(code, 0);
    assert!(out.contains("Kickflip"));
    assert!(out.contains("Laser Flip"));
    assert!(out.contains("pts"));
    // every tier gets its own section, easiest first
    let beginner = out.find("Beginner:").expect("beginner section");
    let pro = out.find("Pro:").expect("pro section");
    assert!(beginner < pro);
}

#[test]
fn sim_rejects_zero_games() {
    let (code, _out, err) = run_cli(&["grind", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("games must be >= 1"));
}

#[test]
fn sim_reports_each_game_and_the_win_table() {
    let (code, out, _err) = run_cli(&[
        "grind", "sim", "--games", "3", "--seed", "9", "--players", "Alice,Bob",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("sim: games=3 seed=9"));
    assert!(out.contains("game 1: winner="));
    assert!(out.contains("game 3: winner="));
    assert!(out.contains("Wins:"));
}

#[test]
fn sim_is_reproducible_for_a_fixed_seed() {
    let args = &[
        "grind", "sim", "--games", "2", "--seed", "1234", "--players", "Alice,Bob,Carol",
    ];
    let (code_a, out_a, _) = run_cli(args);
    let (code_b, out_b, _) = run_cli(args);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
}

#[test]
fn sim_writes_history_and_stats_reads_it_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.jsonl");
    let path_str = path.to_str().expect("utf8 path");

    let (code, out, _err) = run_cli(&[
        "grind", "sim", "--games", "4", "--seed", "77", "--players", "Alice,Bob",
        "--output", path_str,
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("History written to"));

    let contents = std::fs::read_to_string(&path).expect("history readable");
    assert_eq!(contents.lines().count(), 4, "one JSONL line per game");

    let (code, out, err) = run_cli(&["grind", "stats", "--input", path_str]);
    assert_eq!(code, 0, "stats failed: {}", err);
    assert!(out.contains("Games: 4"));
    assert!(out.contains("Wins:"));
}

#[test]
fn stats_on_a_missing_file_fails_cleanly() {
    let (code, _out, err) = run_cli(&["grind", "stats", "--input", "/no/such/history.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.contains("cannot read"));
}

#[test]
fn play_rejects_a_single_player() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new("");
    let result = handle_play_command(
        vec!["Alice".to_string()],
        Some(1),
        None,
        None,
        &mut out,
        &mut err,
        &mut input,
    );
    assert!(result.is_err());
}

#[test]
fn scripted_session_plays_to_a_winner() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    // one-letter word: Alice bails her first trick and Bob takes the match
    let mut input = Cursor::new("f\n");
    handle_play_command(
        vec!["Alice".to_string(), "Bob".to_string()],
        Some(42),
        Some("G".to_string()),
        None,
        &mut out,
        &mut err,
        &mut input,
    )
    .expect("session ok");

    let text = String::from_utf8(out).expect("stdout is utf8");
    assert!(text.contains("Alice (leader)"));
    assert!(text.contains("Bob wins with 0 points!"));
    assert!(text.contains("Final standings:"));
}

#[test]
fn quitting_abandons_the_match() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new("q\n");
    handle_play_command(
        vec!["Alice".to_string(), "Bob".to_string()],
        Some(42),
        None,
        None,
        &mut out,
        &mut err,
        &mut input,
    )
    .expect("session ok");

    let text = String::from_utf8(out).expect("stdout is utf8");
    assert!(text.contains("Match abandoned"));
}

#[test]
fn scripted_session_can_log_the_finished_game() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("play.jsonl");
    let path_str = path.to_str().expect("utf8 path").to_string();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new("f\n");
    handle_play_command(
        vec!["Alice".to_string(), "Bob".to_string()],
        Some(42),
        Some("G".to_string()),
        Some(path_str),
        &mut out,
        &mut err,
        &mut input,
    )
    .expect("session ok");

    let contents = std::fs::read_to_string(&path).expect("record readable");
    let record: serde_json::Value =
        serde_json::from_str(contents.lines().next().expect("one line")).expect("valid json");
    assert_eq!(record["winner_name"], "Bob");
    assert_eq!(record["word"], "G");
}

#[test]
fn a_second_session_appends_to_the_history_instead_of_replacing_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("play.jsonl");
    let path_str = path.to_str().expect("utf8 path").to_string();

    for _ in 0..2 {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new("f\n");
        handle_play_command(
            vec!["Alice".to_string(), "Bob".to_string()],
            Some(42),
            Some("G".to_string()),
            Some(path_str.clone()),
            &mut out,
            &mut err,
            &mut input,
        )
        .expect("session ok");
    }

    let contents = std::fs::read_to_string(&path).expect("history readable");
    let ids: Vec<String> = contents
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).expect("valid json");
            record["game_id"].as_str().expect("id is a string").to_string()
        })
        .collect();
    assert_eq!(ids.len(), 2, "both sessions kept their record");
    assert_ne!(ids[0], ids[1], "ids keep counting across sessions");
}

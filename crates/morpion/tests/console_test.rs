//! End-to-end tests: console rounds persisted through the score file.

use morpion::{Console, ScoreFile, Settings};
use morpion_core::{Difficulty, Mark, Session};
use std::io::Cursor;

fn play_script(scores: ScoreFile, difficulty: Difficulty, script: &str) -> (String, ScoreFile) {
    let mut session = Session::seeded(scores, difficulty, 0);
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    console.run(&mut session).expect("console run");
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (output, session.into_sink())
}

#[test]
fn test_finished_rounds_are_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let scores = ScoreFile::load(&path).unwrap();
    let (output, _) = play_script(scores, Difficulty::Strong, "2\n3\n6\nq\n");
    assert!(output.contains("The computer (O) wins!"));

    let reloaded = ScoreFile::load(&path).unwrap();
    assert_eq!(reloaded.tally().wins(Mark::O), 1);
    assert_eq!(reloaded.tally().total(), 1);

    // A second session adds to the same file.
    let (_, scores) = play_script(reloaded, Difficulty::Strong, "2\n3\n6\n");
    assert_eq!(scores.tally().wins(Mark::O), 2);
    assert_eq!(ScoreFile::load(&path).unwrap().tally().wins(Mark::O), 2);
}

#[test]
fn test_unfinished_round_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let scores = ScoreFile::load(&path).unwrap();
    let (_, scores) = play_script(scores, Difficulty::Weak, "5\nq\n");
    assert_eq!(scores.tally().total(), 0);
    assert!(!path.exists());
}

#[test]
fn test_settings_drive_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("morpion.toml");
    let score_path = dir.path().join("results.json");
    std::fs::write(
        &config,
        format!(
            "difficulty = \"strong\"\nscore_file = {:?}\nseed = 4\n",
            score_path.display().to_string()
        ),
    )
    .unwrap();

    let settings = Settings::load(Some(&config)).unwrap();
    assert_eq!(*settings.difficulty(), Difficulty::Strong);
    assert_eq!(settings.score_file(), &score_path);

    let scores = ScoreFile::load(settings.score_file()).unwrap();
    let (output, _) = play_script(scores, *settings.difficulty(), "2\n3\n6\n");
    assert!(output.contains("The computer (O) wins!"));
    assert!(score_path.exists());
}

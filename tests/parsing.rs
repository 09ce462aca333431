use std::path::PathBuf;

use wc_analytics::dataset::{MatchOutcome, StageCategory, WorldCupData};

fn fixture_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path
}

#[test]
fn loads_both_tables_with_derived_columns() {
    let data = WorldCupData::load(&fixture_dir()).expect("fixture tables should load");
    assert_eq!(data.matches.len(), 4);
    assert_eq!(data.tournaments.len(), 2);

    let opener = &data.matches[0];
    assert_eq!(opener.year, 1930);
    assert_eq!(opener.home_team, "Uruguay");
    assert_eq!(opener.total_goals, 4);
    assert_eq!(opener.winner(), Some("Uruguay"));
    assert_eq!(opener.stage_category, StageCategory::Group);

    let drawn = &data.matches[2];
    assert_eq!(drawn.outcome, MatchOutcome::Draw);
    assert!(drawn.is_draw());
    assert_eq!(drawn.winner(), None);

    let decider = &data.matches[3];
    assert_eq!(decider.stage_category, StageCategory::Knockout);

    assert_eq!(data.tournaments[0].year, 1930);
    assert_eq!(data.tournaments[0].host, "Uruguay");
    assert_eq!(data.tournaments[1].runner_up, "Czechoslovakia");
}

#[test]
fn missing_directory_is_a_load_error() {
    let err =
        WorldCupData::load(&fixture_dir().join("no_such_dir")).expect_err("load should fail");
    assert!(err.to_string().contains("matches.csv"));
}

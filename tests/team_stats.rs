use std::path::PathBuf;

use wc_analytics::continents::Continent;
use wc_analytics::dataset::WorldCupData;
use wc_analytics::team_stats::{
    RankMetric, TeamRanking, available_teams, compare_teams, goals_by_continent, team_totals,
    top_teams,
};

fn load_fixture() -> WorldCupData {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    WorldCupData::load(&path).expect("fixture tables should load")
}

#[test]
fn top_teams_by_wins_sorted_descending() {
    let data = load_fixture();
    let TeamRanking::Wins(rows) = top_teams(&data, RankMetric::Wins, 10) else {
        panic!("wins metric should produce wins records");
    };
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].team, "Uruguay");
    assert_eq!(rows[0].wins, 2);
    assert_eq!(rows[1].team, "Italy");
    assert_eq!(rows[1].wins, 1);
    for pair in rows.windows(2) {
        assert!(pair[0].wins >= pair[1].wins);
    }
    // Zero-win teams tie; first appearance in the match table breaks it.
    assert_eq!(rows[2].team, "Brazil");
}

#[test]
fn top_teams_limit_truncates() {
    let data = load_fixture();
    let TeamRanking::Goals(rows) = top_teams(&data, RankMetric::Goals, 2) else {
        panic!("goals metric should produce goals records");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team, "Uruguay");
    assert_eq!(rows[0].goals, 7);
    assert_eq!(rows[1].team, "Italy");
    assert_eq!(rows[1].goals, 4);
}

#[test]
fn top_teams_metric_is_first_field_after_team() {
    let data = load_fixture();
    let wins = serde_json::to_string(&top_teams(&data, RankMetric::Wins, 1)).expect("serialize");
    assert_eq!(wins, r#"[{"team":"Uruguay","wins":2,"goals":7,"matches":2}]"#);

    let goals = serde_json::to_string(&top_teams(&data, RankMetric::Goals, 1)).expect("serialize");
    assert_eq!(goals, r#"[{"team":"Uruguay","goals":7,"wins":2,"matches":2}]"#);

    let apps = serde_json::to_string(&top_teams(&data, RankMetric::Appearances, 1))
        .expect("serialize");
    assert_eq!(apps, r#"[{"team":"Uruguay","matches":2,"wins":2,"goals":7}]"#);

    let titles = serde_json::to_string(&top_teams(&data, RankMetric::Titles, 1))
        .expect("serialize");
    assert_eq!(titles, r#"[{"team":"Uruguay","titles":1}]"#);
}

#[test]
fn titles_count_tournament_winners() {
    let data = load_fixture();
    let TeamRanking::Titles(rows) = top_teams(&data, RankMetric::Titles, 10) else {
        panic!("titles metric should produce titles records");
    };
    assert_eq!(rows.len(), 2);
    // One title each; tournament-table order breaks the tie.
    assert_eq!(rows[0].team, "Uruguay");
    assert_eq!(rows[0].titles, 1);
    assert_eq!(rows[1].team, "Italy");
    assert_eq!(rows[1].titles, 1);
}

#[test]
fn wins_never_exceed_non_draw_matches() {
    let data = load_fixture();
    let totals = team_totals(&data.matches);
    let total_wins: u32 = totals.iter().map(|t| t.wins).sum();
    let non_draws = data.matches.iter().filter(|m| !m.is_draw()).count() as u32;
    assert!(total_wins <= non_draws);
    assert_eq!(total_wins, 3);
}

#[test]
fn continent_goals_cover_every_goal_once() {
    let data = load_fixture();
    let rows = goals_by_continent(&data.matches);
    let continent_total: u32 = rows.iter().map(|r| r.goals).sum();
    let match_total: u32 = data.matches.iter().map(|m| u32::from(m.total_goals)).sum();
    assert_eq!(continent_total, match_total);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].continent, Continent::SouthAmerica);
    assert_eq!(rows[0].goals, 12);
    assert_eq!(rows[1].continent, Continent::Europe);
    assert_eq!(rows[1].goals, 5);
}

#[test]
fn team_comparison_full_stats() {
    let data = load_fixture();
    let cmp = compare_teams(&data, "Uruguay", "Brazil");

    assert_eq!(cmp.team1.team, "Uruguay");
    assert_eq!(cmp.team1.matches, 2);
    assert_eq!(cmp.team1.wins, 2);
    assert_eq!(cmp.team1.goals_scored, 7);
    assert_eq!(cmp.team1.goals_conceded, 3);
    assert_eq!(cmp.team1.titles, 1);
    assert_eq!(cmp.team1.finals, 1);
    assert_eq!(cmp.team1.win_rate, 100.0);

    assert_eq!(cmp.team2.matches, 2);
    assert_eq!(cmp.team2.wins, 0);
    assert_eq!(cmp.team2.goals_scored, 3);
    assert_eq!(cmp.team2.goals_conceded, 5);
    assert_eq!(cmp.team2.titles, 0);
    assert_eq!(cmp.team2.finals, 0);
    assert_eq!(cmp.team2.win_rate, 0.0);

    assert_eq!(cmp.head_to_head.matches, 1);
    assert_eq!(cmp.head_to_head.team1_wins, 1);
    assert_eq!(cmp.head_to_head.team2_wins, 0);
    assert_eq!(cmp.head_to_head.draws, 0);
}

#[test]
fn head_to_head_counts_add_up() {
    let data = load_fixture();
    let cmp = compare_teams(&data, "Italy", "Brazil");
    assert_eq!(cmp.head_to_head.matches, 1);
    assert_eq!(cmp.head_to_head.draws, 1);
    assert_eq!(
        cmp.head_to_head.team1_wins + cmp.head_to_head.team2_wins + cmp.head_to_head.draws,
        cmp.head_to_head.matches
    );
}

#[test]
fn unknown_team_compares_as_zeros() {
    let data = load_fixture();
    let cmp = compare_teams(&data, "Atlantis", "Brazil");
    assert_eq!(cmp.team1.matches, 0);
    assert_eq!(cmp.team1.wins, 0);
    assert_eq!(cmp.team1.goals_scored, 0);
    assert_eq!(cmp.team1.goals_conceded, 0);
    assert_eq!(cmp.team1.titles, 0);
    assert_eq!(cmp.team1.finals, 0);
    assert_eq!(cmp.team1.win_rate, 0.0);
    assert_eq!(cmp.head_to_head.matches, 0);
    assert_eq!(cmp.team2.matches, 2);
}

// A side cannot meet itself, so the unordered-pair filter finds nothing.
#[test]
fn same_team_head_to_head_is_empty() {
    let data = load_fixture();
    let cmp = compare_teams(&data, "Brazil", "Brazil");
    assert_eq!(cmp.head_to_head.matches, 0);
    assert_eq!(cmp.head_to_head.draws, 0);
    assert_eq!(cmp.team1.matches, 2);
    assert_eq!(cmp.team2.matches, 2);
}

#[test]
fn available_teams_sorted_distinct() {
    let data = load_fixture();
    assert_eq!(
        available_teams(&data.matches),
        vec!["Argentina", "Brazil", "Czechoslovakia", "Italy", "Uruguay"]
    );
}

#[test]
fn rankings_are_deterministic() {
    let data = load_fixture();
    let first = serde_json::to_string(&top_teams(&data, RankMetric::Wins, 10)).expect("serialize");
    let second =
        serde_json::to_string(&top_teams(&data, RankMetric::Wins, 10)).expect("serialize");
    assert_eq!(first, second);

    let first = serde_json::to_string(&goals_by_continent(&data.matches)).expect("serialize");
    let second = serde_json::to_string(&goals_by_continent(&data.matches)).expect("serialize");
    assert_eq!(first, second);
}

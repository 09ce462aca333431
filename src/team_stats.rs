use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::continents::{Continent, continent_for};
use crate::dataset::{MatchRow, TournamentRow, WorldCupData};

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    Wins,
    Goals,
    Appearances,
    Titles,
}

impl RankMetric {
    /// Unrecognized text lands on Appearances, the catch-all ranking.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wins" => Self::Wins,
            "goals" => Self::Goals,
            "titles" => Self::Titles,
            _ => Self::Appearances,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Wins => "wins",
            Self::Goals => "goals",
            Self::Appearances => "appearances",
            Self::Titles => "titles",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamTotals {
    pub team: String,
    pub goals: u32,
    pub matches: u32,
    pub wins: u32,
}

/// Per-team goals/appearances/wins in one pass over the match table. Rows
/// keep first-appearance order so stable sorts downstream give reproducible
/// tie-breaks. Draws credit no team's win count.
pub fn team_totals(matches: &[MatchRow]) -> Vec<TeamTotals> {
    let mut rows: Vec<TeamTotals> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for m in matches {
        {
            let home = slot_for(&mut rows, &mut index, &m.home_team);
            home.goals += u32::from(m.home_score);
            home.matches += 1;
        }
        {
            let away = slot_for(&mut rows, &mut index, &m.away_team);
            away.goals += u32::from(m.away_score);
            away.matches += 1;
        }
        if let Some(winner) = m.winner() {
            slot_for(&mut rows, &mut index, winner).wins += 1;
        }
    }
    rows
}

fn slot_for<'a>(
    rows: &'a mut Vec<TeamTotals>,
    index: &mut HashMap<String, usize>,
    team: &str,
) -> &'a mut TeamTotals {
    let idx = match index.get(team) {
        Some(&idx) => idx,
        None => {
            index.insert(team.to_string(), rows.len());
            rows.push(TeamTotals {
                team: team.to_string(),
                ..TeamTotals::default()
            });
            rows.len() - 1
        }
    };
    &mut rows[idx]
}

// The ranking metric is always the first serialized field after the team
// name, so one record struct per metric fixes the field order.

#[derive(Debug, Clone, Serialize)]
pub struct TeamWins {
    pub team: String,
    pub wins: u32,
    pub goals: u32,
    pub matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamGoals {
    pub team: String,
    pub goals: u32,
    pub wins: u32,
    pub matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamAppearances {
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub goals: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamTitles {
    pub team: String,
    pub titles: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TeamRanking {
    Wins(Vec<TeamWins>),
    Goals(Vec<TeamGoals>),
    Appearances(Vec<TeamAppearances>),
    Titles(Vec<TeamTitles>),
}

/// Top `limit` teams by the requested metric, descending. Equal values keep
/// first-appearance order (titles: tournament-table order).
pub fn top_teams(data: &WorldCupData, metric: RankMetric, limit: usize) -> TeamRanking {
    if metric == RankMetric::Titles {
        return TeamRanking::Titles(title_counts(&data.tournaments, limit));
    }

    let mut rows = team_totals(&data.matches);
    match metric {
        RankMetric::Wins => {
            rows.sort_by(|a, b| b.wins.cmp(&a.wins));
            TeamRanking::Wins(
                rows.into_iter()
                    .take(limit)
                    .map(|r| TeamWins {
                        team: r.team,
                        wins: r.wins,
                        goals: r.goals,
                        matches: r.matches,
                    })
                    .collect(),
            )
        }
        RankMetric::Goals => {
            rows.sort_by(|a, b| b.goals.cmp(&a.goals));
            TeamRanking::Goals(
                rows.into_iter()
                    .take(limit)
                    .map(|r| TeamGoals {
                        team: r.team,
                        goals: r.goals,
                        wins: r.wins,
                        matches: r.matches,
                    })
                    .collect(),
            )
        }
        _ => {
            rows.sort_by(|a, b| b.matches.cmp(&a.matches));
            TeamRanking::Appearances(
                rows.into_iter()
                    .take(limit)
                    .map(|r| TeamAppearances {
                        team: r.team,
                        matches: r.matches,
                        wins: r.wins,
                        goals: r.goals,
                    })
                    .collect(),
            )
        }
    }
}

fn title_counts(tournaments: &[TournamentRow], limit: usize) -> Vec<TeamTitles> {
    let mut rows: Vec<TeamTitles> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for t in tournaments {
        match index.get(t.winner.as_str()) {
            Some(&idx) => rows[idx].titles += 1,
            None => {
                index.insert(t.winner.clone(), rows.len());
                rows.push(TeamTitles {
                    team: t.winner.clone(),
                    titles: 1,
                });
            }
        }
    }
    rows.sort_by(|a, b| b.titles.cmp(&a.titles));
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct ContinentGoals {
    pub continent: Continent,
    pub goals: u32,
}

/// Goals attributed to each confederation: home goals to the home side, away
/// goals to the away side, summed per team and folded per continent. The fold
/// visits teams in first-appearance order, which fixes tie-break order.
pub fn goals_by_continent(matches: &[MatchRow]) -> Vec<ContinentGoals> {
    let totals = team_totals(matches);
    let mut rows: Vec<ContinentGoals> = Vec::new();
    let mut index: HashMap<Continent, usize> = HashMap::new();
    for t in &totals {
        let continent = continent_for(&t.team);
        match index.get(&continent) {
            Some(&idx) => rows[idx].goals += t.goals,
            None => {
                index.insert(continent, rows.len());
                rows.push(ContinentGoals {
                    continent,
                    goals: t.goals,
                });
            }
        }
    }
    rows.sort_by(|a, b| b.goals.cmp(&a.goals));
    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamRecord {
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub titles: u32,
    pub finals: u32,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadToHead {
    pub matches: u32,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamComparison {
    pub team1: TeamRecord,
    pub team2: TeamRecord,
    pub head_to_head: HeadToHead,
}

/// Side-by-side record of two teams plus their direct meetings. Teams absent
/// from the dataset compare as all zeros rather than erroring.
pub fn compare_teams(data: &WorldCupData, team1: &str, team2: &str) -> TeamComparison {
    let mut h2h = HeadToHead {
        matches: 0,
        team1_wins: 0,
        team2_wins: 0,
        draws: 0,
    };
    for m in &data.matches {
        let direct = (m.home_team == team1 && m.away_team == team2)
            || (m.home_team == team2 && m.away_team == team1);
        if !direct {
            continue;
        }
        h2h.matches += 1;
        match m.winner() {
            Some(w) if w == team1 => h2h.team1_wins += 1,
            Some(w) if w == team2 => h2h.team2_wins += 1,
            Some(_) => {}
            None => h2h.draws += 1,
        }
    }

    TeamComparison {
        team1: team_record(data, team1),
        team2: team_record(data, team2),
        head_to_head: h2h,
    }
}

fn team_record(data: &WorldCupData, team: &str) -> TeamRecord {
    let mut matches = 0u32;
    let mut wins = 0u32;
    let mut goals_scored = 0u32;
    let mut goals_conceded = 0u32;
    for m in &data.matches {
        if m.home_team == team {
            goals_scored += u32::from(m.home_score);
            goals_conceded += u32::from(m.away_score);
        } else if m.away_team == team {
            goals_scored += u32::from(m.away_score);
            goals_conceded += u32::from(m.home_score);
        } else {
            continue;
        }
        matches += 1;
        if m.winner() == Some(team) {
            wins += 1;
        }
    }

    let mut titles = 0u32;
    let mut finals = 0u32;
    for t in &data.tournaments {
        if t.winner == team {
            titles += 1;
        }
        if t.winner == team || t.runner_up == team {
            finals += 1;
        }
    }

    let win_rate = if matches > 0 {
        round1(wins as f64 / matches as f64 * 100.0)
    } else {
        0.0
    };

    TeamRecord {
        team: team.to_string(),
        matches,
        wins,
        goals_scored,
        goals_conceded,
        titles,
        finals,
        win_rate,
    }
}

/// Every team name seen in the match table, sorted.
pub fn available_teams(matches: &[MatchRow]) -> Vec<String> {
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    for m in matches {
        teams.insert(&m.home_team);
        teams.insert(&m.away_team);
    }
    teams.into_iter().map(String::from).collect()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_metric_parse_falls_back_to_appearances() {
        assert_eq!(RankMetric::parse("wins"), RankMetric::Wins);
        assert_eq!(RankMetric::parse(" Goals "), RankMetric::Goals);
        assert_eq!(RankMetric::parse("titles"), RankMetric::Titles);
        assert_eq!(RankMetric::parse("appearances"), RankMetric::Appearances);
        assert_eq!(RankMetric::parse("no-such-metric"), RankMetric::Appearances);
    }

    #[test]
    fn round1_rounds_percentages() {
        assert_eq!(round1(2.0 / 3.0 * 100.0), 66.7);
        assert_eq!(round1(100.0), 100.0);
    }
}

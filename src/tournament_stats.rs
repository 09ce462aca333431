use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::{MatchRow, StageCategory, TournamentRow};

#[derive(Debug, Clone, Serialize)]
pub struct WorldCupGoals {
    pub year: u16,
    pub total_goals: u32,
    pub total_matches: u32,
    pub host: String,
    pub winner: String,
    pub avg_goals_per_match: f64,
}

/// Goals scored in each edition, tournament-table order (year ascending).
/// The loader guarantees `total_matches > 0` for every row.
pub fn goals_per_worldcup(tournaments: &[TournamentRow]) -> Vec<WorldCupGoals> {
    tournaments
        .iter()
        .map(|t| WorldCupGoals {
            year: t.year,
            total_goals: t.total_goals,
            total_matches: t.total_matches,
            host: t.host.clone(),
            winner: t.winner.clone(),
            avg_goals_per_match: round2(t.total_goals as f64 / t.total_matches as f64),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct YearlyMatches {
    pub year: u16,
    pub total_matches: u32,
    pub total_goals: u32,
    pub host: String,
    pub winner: String,
}

/// Straight projection of the tournament table, no computation.
pub fn matches_per_year(tournaments: &[TournamentRow]) -> Vec<YearlyMatches> {
    tournaments
        .iter()
        .map(|t| YearlyMatches {
            year: t.year,
            total_matches: t.total_matches,
            total_goals: t.total_goals,
            host: t.host.clone(),
            winner: t.winner.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct StageGoals {
    pub years: Vec<u16>,
    pub group_avg: Vec<f64>,
    pub knockout_avg: Vec<f64>,
    pub overall: StageOverall,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageOverall {
    pub group: f64,
    pub knockout: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    goals: u32,
    matches: u32,
}

impl Tally {
    fn push(&mut self, goals: u8) {
        self.goals += u32::from(goals);
        self.matches += 1;
    }

    fn mean(self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            round2(self.goals as f64 / self.matches as f64)
        }
    }
}

/// Group vs knockout scoring per year. `group_avg[i]` and `knockout_avg[i]`
/// are aligned to `years[i]`; a category missing in a year reports 0.
pub fn goals_by_stage(matches: &[MatchRow]) -> StageGoals {
    let mut years: Vec<u16> = matches.iter().map(|m| m.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut group: HashMap<u16, Tally> = HashMap::new();
    let mut knockout: HashMap<u16, Tally> = HashMap::new();
    let mut overall_group = Tally::default();
    let mut overall_knockout = Tally::default();
    for m in matches {
        match m.stage_category {
            StageCategory::Group => {
                group.entry(m.year).or_default().push(m.total_goals);
                overall_group.push(m.total_goals);
            }
            StageCategory::Knockout => {
                knockout.entry(m.year).or_default().push(m.total_goals);
                overall_knockout.push(m.total_goals);
            }
            StageCategory::Other => {}
        }
    }

    let group_avg = years
        .iter()
        .map(|year| group.get(year).copied().unwrap_or_default().mean())
        .collect();
    let knockout_avg = years
        .iter()
        .map(|year| knockout.get(year).copied().unwrap_or_default().mean())
        .collect();

    StageGoals {
        years,
        group_avg,
        knockout_avg,
        overall: StageOverall {
            group: overall_group.mean(),
            knockout: overall_knockout.mean(),
        },
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(70.0 / 26.0), 2.69);
        assert_eq!(round2(140.0 / 26.0), 5.38);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn empty_tally_means_zero() {
        assert_eq!(Tally::default().mean(), 0.0);
    }
}

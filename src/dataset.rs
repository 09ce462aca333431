use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

pub const MATCHES_FILE: &str = "matches.csv";
pub const TOURNAMENTS_FILE: &str = "tournaments.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageCategory {
    Group,
    Knockout,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Home,
    Away,
    Draw,
}

#[derive(Debug, Clone)]
pub struct MatchRow {
    pub year: u16,
    pub stage: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub total_goals: u8,
    pub outcome: MatchOutcome,
    pub stage_category: StageCategory,
}

impl MatchRow {
    pub fn new(
        year: u16,
        stage: String,
        home_team: String,
        away_team: String,
        home_score: u8,
        away_score: u8,
    ) -> Self {
        let outcome = if home_score > away_score {
            MatchOutcome::Home
        } else if away_score > home_score {
            MatchOutcome::Away
        } else {
            MatchOutcome::Draw
        };
        Self {
            year,
            stage_category: classify_stage(&stage),
            stage,
            home_team,
            away_team,
            home_score,
            away_score,
            total_goals: home_score + away_score,
            outcome,
        }
    }

    /// Winning team name, or `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            MatchOutcome::Home => Some(&self.home_team),
            MatchOutcome::Away => Some(&self.away_team),
            MatchOutcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == MatchOutcome::Draw
    }
}

#[derive(Debug, Clone)]
pub struct TournamentRow {
    pub year: u16,
    pub host: String,
    pub winner: String,
    pub runner_up: String,
    pub total_matches: u32,
    pub total_goals: u32,
}

/// Both historical tables, loaded once and never mutated afterwards.
/// Queries borrow it; no query touches disk.
#[derive(Debug, Clone)]
pub struct WorldCupData {
    pub matches: Vec<MatchRow>,
    pub tournaments: Vec<TournamentRow>,
}

impl WorldCupData {
    pub fn load(dir: &Path) -> Result<Self> {
        let matches = load_matches(&dir.join(MATCHES_FILE))?;
        let tournaments = load_tournaments(&dir.join(TOURNAMENTS_FILE))?;
        Ok(Self {
            matches,
            tournaments,
        })
    }
}

const KNOCKOUT_NEEDLES: &[&str] = &["final", "semi", "quarter", "round of", "second round"];

/// "group" is checked first and wins over the knockout needles when a stage
/// label somehow carries both.
pub fn classify_stage(stage: &str) -> StageCategory {
    let s = stage.to_lowercase();
    if s.contains("group") {
        StageCategory::Group
    } else if KNOCKOUT_NEEDLES.iter().any(|needle| s.contains(needle)) {
        StageCategory::Knockout
    } else {
        StageCategory::Other
    }
}

pub fn load_matches(path: &Path) -> Result<Vec<MatchRow>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read match table {}", path.display()))?;
    parse_matches(&raw).with_context(|| format!("parse match table {}", path.display()))
}

pub fn load_tournaments(path: &Path) -> Result<Vec<TournamentRow>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read tournament table {}", path.display()))?;
    parse_tournaments(&raw).with_context(|| format!("parse tournament table {}", path.display()))
}

pub fn parse_matches(raw: &str) -> Result<Vec<MatchRow>> {
    let mut lines = raw.lines();
    let header = Header::parse(lines.next().ok_or_else(|| anyhow!("empty table"))?);
    let year = header.column("year")?;
    let stage = header.column("stage")?;
    let home_team = header.column("home_team")?;
    let away_team = header.column("away_team")?;
    let home_score = header.column("home_score")?;
    let away_score = header.column("away_score")?;

    let mut out = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 2;
        let fields = split_fields(line);
        out.push(MatchRow::new(
            parse_field(&fields, year, "year", line_no)?,
            text_field(&fields, stage, "stage", line_no)?,
            text_field(&fields, home_team, "home_team", line_no)?,
            text_field(&fields, away_team, "away_team", line_no)?,
            parse_field(&fields, home_score, "home_score", line_no)?,
            parse_field(&fields, away_score, "away_score", line_no)?,
        ));
    }
    Ok(out)
}

pub fn parse_tournaments(raw: &str) -> Result<Vec<TournamentRow>> {
    let mut lines = raw.lines();
    let header = Header::parse(lines.next().ok_or_else(|| anyhow!("empty table"))?);
    let year = header.column("year")?;
    let host = header.column("host")?;
    let winner = header.column("winner")?;
    let runner_up = header.column("runner_up")?;
    let total_matches = header.column("total_matches")?;
    let total_goals = header.column("total_goals")?;

    let mut out = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 2;
        let fields = split_fields(line);
        let row = TournamentRow {
            year: parse_field(&fields, year, "year", line_no)?,
            host: text_field(&fields, host, "host", line_no)?,
            winner: text_field(&fields, winner, "winner", line_no)?,
            runner_up: text_field(&fields, runner_up, "runner_up", line_no)?,
            total_matches: parse_field(&fields, total_matches, "total_matches", line_no)?,
            total_goals: parse_field(&fields, total_goals, "total_goals", line_no)?,
        };
        // A tournament with no matches cannot exist; rejecting it here keeps
        // every downstream average division-safe.
        if row.total_matches == 0 {
            return Err(anyhow!(
                "line {line_no}: tournament {} has zero total_matches",
                row.year
            ));
        }
        out.push(row);
    }
    Ok(out)
}

struct Header {
    columns: Vec<String>,
}

impl Header {
    fn parse(line: &str) -> Self {
        Self {
            columns: split_fields(line)
                .into_iter()
                .map(|c| c.trim().to_string())
                .collect(),
        }
    }

    fn column(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| anyhow!("missing required column '{name}'"))
    }
}

// Minimal quoted-field CSV: commas inside double quotes stay in the field,
// a doubled quote inside a quoted field is a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => out.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    out.push(field);
    out
}

fn text_field(fields: &[String], idx: usize, name: &str, line_no: usize) -> Result<String> {
    let raw = fields
        .get(idx)
        .ok_or_else(|| anyhow!("line {line_no}: truncated row, no '{name}' field"))?;
    Ok(raw.trim().to_string())
}

fn parse_field<T: FromStr>(fields: &[String], idx: usize, name: &str, line_no: usize) -> Result<T> {
    let raw = text_field(fields, idx, name, line_no)?;
    raw.parse::<T>()
        .map_err(|_| anyhow!("line {line_no}: invalid '{name}' value '{raw}'"))
}

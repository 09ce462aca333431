use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde_json::{Value, json};

use wc_analytics::dataset::WorldCupData;
use wc_analytics::team_stats::{self, RankMetric};
use wc_analytics::tournament_stats;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_TEAM1: &str = "Brazil";
const DEFAULT_TEAM2: &str = "Germany";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let Some(query) = args.first().filter(|arg| !arg.starts_with("--")) else {
        print_usage();
        return Ok(());
    };

    let data = WorldCupData::load(&resolve_data_dir(&args))?;
    let envelope = dispatch(&data, query, &args[1..])?;
    println!(
        "{}",
        serde_json::to_string_pretty(&envelope).context("serialize response")?
    );
    Ok(())
}

fn dispatch(data: &WorldCupData, query: &str, args: &[String]) -> Result<Value> {
    let envelope = match query {
        "goals-per-worldcup" => json!({
            "success": true,
            "data": tournament_stats::goals_per_worldcup(&data.tournaments),
            "insight": "The 1954 World Cup in Switzerland holds the record for highest goals \
                        per match (5.38), while modern tournaments average around 2.5-2.7 goals \
                        per game.",
        }),
        "top-teams" => {
            let metric = arg_value(args, "--metric")
                .map(RankMetric::parse)
                .unwrap_or(RankMetric::Wins);
            // Bad limit text degrades to the default instead of failing the query.
            let limit = arg_value(args, "--limit")
                .and_then(|raw| raw.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(team_stats::DEFAULT_LIMIT);
            json!({
                "success": true,
                "data": team_stats::top_teams(data, metric, limit),
                "metric": metric.label(),
                "insight": metric_insight(metric),
            })
        }
        "goals-by-stage" => {
            let stats = tournament_stats::goals_by_stage(&data.matches);
            let diff = tournament_stats::round2(stats.overall.group - stats.overall.knockout);
            let insight = format!(
                "Group stage matches average {} goals, while knockout rounds average {} goals. \
                 The pressure of elimination does reduce scoring by approximately {} goals per \
                 match.",
                stats.overall.group, stats.overall.knockout, diff
            );
            json!({ "success": true, "data": stats, "insight": insight })
        }
        "goals-by-continent" => json!({
            "success": true,
            "data": team_stats::goals_by_continent(&data.matches),
            "insight": "Europe leads with the most goals scored, followed by South America. \
                        Together, these two continents account for over 80% of all World Cup \
                        goals.",
        }),
        "team-comparison" => {
            let team1 = arg_value(args, "--team1").unwrap_or(DEFAULT_TEAM1);
            let team2 = arg_value(args, "--team2").unwrap_or(DEFAULT_TEAM2);
            let comparison = team_stats::compare_teams(data, team1, team2);
            let insight = format!(
                "{} has {} World Cup titles vs {}'s {}. In head-to-head meetings ({} matches), \
                 {} has won {} times and {} has won {} times.",
                comparison.team1.team,
                comparison.team1.titles,
                comparison.team2.team,
                comparison.team2.titles,
                comparison.head_to_head.matches,
                comparison.team1.team,
                comparison.head_to_head.team1_wins,
                comparison.team2.team,
                comparison.head_to_head.team2_wins,
            );
            json!({ "success": true, "data": comparison, "insight": insight })
        }
        "matches-per-year" => json!({
            "success": true,
            "data": tournament_stats::matches_per_year(&data.tournaments),
            "insight": "The tournament has grown from 17-18 matches in the 1930s to 64 matches \
                        since 1998, with 2026 expanding to 104 matches.",
        }),
        "available-teams" => json!({
            "success": true,
            "data": team_stats::available_teams(&data.matches),
        }),
        other => return Err(anyhow!("unknown query '{other}'")),
    };
    Ok(envelope)
}

fn metric_insight(metric: RankMetric) -> &'static str {
    match metric {
        RankMetric::Wins => {
            "Brazil leads with the most World Cup match wins, followed by Germany and Argentina."
        }
        RankMetric::Goals => {
            "Brazil and Germany are the highest-scoring nations in World Cup history."
        }
        RankMetric::Titles => {
            "Brazil holds the record with 5 World Cup titles, followed by Germany and Italy with \
             4 each."
        }
        RankMetric::Appearances => {
            "Brazil is the only team to have participated in every World Cup since 1930."
        }
    }
}

fn resolve_data_dir(args: &[String]) -> PathBuf {
    if let Some(dir) = arg_value(args, "--data-dir") {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("WC_DATA_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir.trim());
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(flag)
            && let Some(value) = value.strip_prefix('=')
        {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
    }
    None
}

fn print_usage() {
    println!("World Cup analytics");
    println!("Usage: wc_analytics <query> [options]");
    println!();
    println!("Queries:");
    println!("  goals-per-worldcup");
    println!("  top-teams            --metric wins|goals|appearances|titles --limit N");
    println!("  goals-by-stage");
    println!("  goals-by-continent");
    println!("  team-comparison      --team1 NAME --team2 NAME");
    println!("  matches-per-year");
    println!("  available-teams");
    println!();
    println!("Options:");
    println!("  --data-dir DIR       table directory (default: data, env: WC_DATA_DIR)");
}

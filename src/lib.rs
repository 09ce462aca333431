pub mod continents;
pub mod dataset;
pub mod team_stats;
pub mod tournament_stats;

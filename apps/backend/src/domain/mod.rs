//! Domain layer: pure tournament logic, no I/O.
//!
//! Everything in here is synchronous and deterministic; persistence and
//! transport live in the repos/services/ws layers.

pub mod fixtures;
pub mod scoring;
pub mod standings;

#[cfg(test)]
mod tests_fixtures;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_standings;

// Re-exports for ergonomics
pub use fixtures::{
    advance_double_elimination, advance_knockout_round, generate_fixtures, next_swiss_round,
    Bracket, Fixture, FixtureConfig, RoundResult, RoundSummary, TournamentFormat,
};
pub use scoring::{
    compute_match_outcome, goal_winner, sum_sub_match_goals, MatchOutcome, ScoringSystem, Side,
    SubMatchScore,
};
pub use standings::{compute_standings, PlayedMatch, TeamStanding};

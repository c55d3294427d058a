//! Fixture generation and round advancement orchestration.
//!
//! Bridges the pure bracket logic in `domain::fixtures` with tournament
//! state in the database: loads participants, persists generated
//! matches, and derives the inputs each advance function needs from
//! match history.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time};
use tracing::info;

use crate::domain::{
    advance_double_elimination, advance_knockout_round, generate_fixtures, next_swiss_round,
    Fixture, FixtureConfig, RoundResult, RoundSummary, TournamentFormat,
};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::errors::ErrorCode;
use crate::repos::matches::{self, Match, MatchCreate};
use crate::repos::teams;
use crate::repos::tournaments::{self, Tournament};
use crate::services::standings;

/// Caller-supplied generation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureOptions {
    /// Shuffle seed; omitted means teams stay in registration order
    pub seed: Option<u64>,
    /// Teams per group for group stages (defaults to 4)
    pub group_size: Option<usize>,
}

/// Generate the initial fixtures for a tournament and persist them.
///
/// Conflicts if any matches already exist; fixtures are generated once.
pub async fn generate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    options: FixtureOptions,
) -> Result<Vec<Match>, AppError> {
    let tournament = tournaments::require_tournament(conn, tournament_id).await?;

    let existing = matches::count_by_tournament(conn, tournament_id).await?;
    if existing > 0 {
        return Err(DomainError::conflict(
            ConflictKind::FixturesAlreadyGenerated,
            "Fixtures have already been generated for this tournament",
        )
        .into());
    }

    let team_list = teams::list_by_tournament(conn, tournament_id).await?;
    let team_ids: Vec<i64> = team_list.iter().map(|t| t.id).collect();
    ensure_enough_teams(team_ids.len())?;

    let config = FixtureConfig {
        group_size: options.group_size.unwrap_or_else(|| FixtureConfig::default().group_size),
        seed: options.seed,
    };
    let fixtures = generate_fixtures(tournament.format, &team_ids, &config)?;

    let creates = to_match_creates(&tournament, &fixtures);
    matches::insert_fixtures(conn, creates).await?;

    let created = matches::list_by_tournament(conn, tournament_id).await?;
    info!(
        tournament_id,
        format = tournament.format.as_str(),
        match_count = created.len(),
        "Fixtures generated"
    );
    Ok(created)
}

/// Generate the next round for a multi-round format.
///
/// Fails with a state error (409) while the current round still has
/// unfinished matches. Returns the newly created matches.
pub async fn advance_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<Match>, AppError> {
    let tournament = tournaments::require_tournament(conn, tournament_id).await?;

    if matches!(
        tournament.format,
        TournamentFormat::RoundRobin | TournamentFormat::GroupStage
    ) {
        return Err(AppError::bad_request(
            ErrorCode::InvalidState,
            "This format is fully scheduled up front and has no rounds to advance",
        ));
    }

    let all = matches::list_by_tournament(conn, tournament_id).await?;
    if all.is_empty() {
        return Err(DomainError::state("No fixtures have been generated yet").into());
    }

    let current_round = all.iter().map(|m| m.round).max().unwrap_or(1);
    let current: Vec<&Match> = all.iter().filter(|m| m.round == current_round).collect();

    let unfinished = current.iter().filter(|m| !m.is_completed()).count();
    if unfinished > 0 {
        return Err(DomainError::state(format!(
            "Round {current_round} still has {unfinished} unfinished match(es)"
        ))
        .into());
    }

    let team_list = teams::list_by_tournament(conn, tournament_id).await?;
    let next_match_number = all.iter().map(|m| m.match_number).max().unwrap_or(0) as u32 + 1;
    let next_round = current_round + 1;

    let fixtures = match tournament.format {
        TournamentFormat::Knockout => {
            let results = round_results(&current)?;
            let byes = if current_round == 1 {
                first_round_byes(&team_list, &current)
            } else {
                Vec::new()
            };
            advance_knockout_round(&RoundSummary {
                round: current_round as u32,
                total_teams: team_list.len(),
                results,
                byes,
                next_match_number,
            })?
        }

        TournamentFormat::DoubleElimination => {
            let losses = loss_counts(&team_list, &all)?;
            let alive_winners: Vec<i64> = team_list
                .iter()
                .filter(|t| losses.get(&t.id).copied().unwrap_or(0) == 0)
                .map(|t| t.id)
                .collect();
            let alive_losers: Vec<i64> = team_list
                .iter()
                .filter(|t| losses.get(&t.id).copied().unwrap_or(0) == 1)
                .map(|t| t.id)
                .collect();
            advance_double_elimination(
                current_round as u32,
                &alive_winners,
                &alive_losers,
                team_list.len(),
                next_match_number,
            )?
        }

        TournamentFormat::Swiss => {
            let total_rounds = swiss_round_count(team_list.len());
            if current_round as u32 >= total_rounds {
                return Err(DomainError::state(format!(
                    "All {total_rounds} Swiss rounds have been played"
                ))
                .into());
            }
            let order: Vec<i64> = standings::standings_for_tournament(conn, tournament_id)
                .await?
                .into_iter()
                .map(|row| row.team_id)
                .collect();
            let prior: Vec<(i64, i64)> =
                all.iter().map(|m| (m.team1_id, m.team2_id)).collect();
            next_swiss_round(next_round as u32, &order, &prior, next_match_number)?
        }

        TournamentFormat::RoundRobin | TournamentFormat::GroupStage => unreachable!(),
    };

    let creates = to_match_creates(&tournament, &fixtures);
    matches::insert_fixtures(conn, creates).await?;

    let created = matches::list_by_round(conn, tournament_id, next_round).await?;
    info!(
        tournament_id,
        round = next_round,
        match_count = created.len(),
        "Round advanced"
    );
    Ok(created)
}

fn round_results(current: &[&Match]) -> Result<Vec<RoundResult>, AppError> {
    Ok(current
        .iter()
        .map(|m| RoundResult {
            team1_id: m.team1_id,
            team2_id: m.team2_id,
            winner_id: m.winner_id,
        })
        .collect())
}

/// Teams that sat out round 1 because the entrant count was not a
/// power of two.
fn first_round_byes(team_list: &[teams::Team], current: &[&Match]) -> Vec<i64> {
    team_list
        .iter()
        .map(|t| t.id)
        .filter(|id| {
            !current
                .iter()
                .any(|m| m.team1_id == *id || m.team2_id == *id)
        })
        .collect()
}

/// Completed-match loss counts per team. A drawn elimination match is
/// unresolvable and must be corrected before advancing.
fn loss_counts(
    team_list: &[teams::Team],
    all: &[Match],
) -> Result<HashMap<i64, u32>, AppError> {
    let mut losses: HashMap<i64, u32> = team_list.iter().map(|t| (t.id, 0)).collect();
    for m in all.iter().filter(|m| m.is_completed()) {
        let Some(winner_id) = m.winner_id else {
            return Err(DomainError::validation(format!(
                "Match {} ended in a draw; elimination brackets need a decisive result",
                m.id
            ))
            .into());
        };
        let loser = if winner_id == m.team1_id {
            m.team2_id
        } else {
            m.team1_id
        };
        *losses.entry(loser).or_insert(0) += 1;
    }
    Ok(losses)
}

/// Standard Swiss length: enough rounds to separate a single leader.
fn swiss_round_count(team_count: usize) -> u32 {
    team_count.max(2).next_power_of_two().trailing_zeros()
}

/// A tournament with fewer than two registered teams is a client error,
/// not a scheduling problem.
fn ensure_enough_teams(count: usize) -> Result<(), AppError> {
    if count < 2 {
        return Err(AppError::bad_request(
            ErrorCode::NotEnoughTeams,
            "At least two teams are required to generate fixtures",
        ));
    }
    Ok(())
}

fn to_match_creates(tournament: &Tournament, fixtures: &[Fixture]) -> Vec<MatchCreate> {
    fixtures
        .iter()
        .map(|f| MatchCreate {
            tournament_id: tournament.id,
            round: f.round as i16,
            round_name: f.round_name.clone(),
            match_number: f.match_number as i32,
            bracket: f.bracket.into(),
            team1_id: f.team1_id,
            team2_id: f.team2_id,
            scheduled_date: schedule_for(tournament.start_date, f.match_number),
            venue: tournament.location.clone(),
        })
        .collect()
}

/// Spread matches out from the tournament start date: two days apart,
/// afternoon kickoff slots cycling 14:00-19:00.
fn schedule_for(start_date: Option<Date>, match_number: u32) -> Option<OffsetDateTime> {
    let start = start_date?;
    let offset = match_number.saturating_sub(1);
    let date = start.checked_add(Duration::days(offset as i64 * 2))?;
    let hour = 14 + (offset % 6) as u8;
    let time = Time::from_hms(hour, 0, 0).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_utc())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn fixture_generation_needs_two_teams() {
        let err = ensure_enough_teams(1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotEnoughTeams);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(ensure_enough_teams(2).is_ok());
    }
}

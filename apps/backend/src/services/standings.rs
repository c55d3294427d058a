//! Standings view assembly: joins the pure aggregation with team names.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::domain::{compute_standings, PlayedMatch};
use crate::error::AppError;
use crate::repos::{matches, teams};

/// One row of the standings table as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: u32,
    pub team_id: i64,
    pub team_name: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: i64,
}

/// Recompute the full standings table from completed matches.
///
/// Always derived from stored results, never incrementally updated, so
/// a corrected match result flows through on the next read.
pub async fn standings_for_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Vec<StandingsRow>, AppError> {
    let team_list = teams::list_by_tournament(conn, tournament_id).await?;
    let team_ids: Vec<i64> = team_list.iter().map(|t| t.id).collect();

    let played: Vec<PlayedMatch> = matches::list_by_tournament(conn, tournament_id)
        .await?
        .into_iter()
        .filter(matches::Match::is_completed)
        .map(|m| {
            let (team1_goals, team2_goals) = m.goals();
            PlayedMatch {
                team1_id: m.team1_id,
                team2_id: m.team2_id,
                team1_goals,
                team2_goals,
                team1_score: m.team1_score,
                team2_score: m.team2_score,
            }
        })
        .collect();

    let table = compute_standings(&team_ids, &played);

    let rows = table
        .into_iter()
        .enumerate()
        .map(|(idx, s)| {
            let team_name = team_list
                .iter()
                .find(|t| t.id == s.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            StandingsRow {
                position: idx as u32 + 1,
                team_id: s.team_id,
                team_name,
                matches_played: s.matches_played,
                wins: s.wins,
                draws: s.draws,
                losses: s.losses,
                goals_for: s.goals_for,
                goals_against: s.goals_against,
                goal_difference: s.goal_difference,
                points: s.points,
            }
        })
        .collect();

    Ok(rows)
}

//! Match result submission: validation, scoring policy, persistence.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::{compute_match_outcome, sum_sub_match_goals, Side, SubMatchScore};
use crate::entities::matches::MatchStatus;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::matches::{self, Match, MatchResultUpdate};
use crate::repos::sub_matches::{self, SubMatchCreate};
use crate::repos::tournaments;

/// One player-vs-player breakdown entry in a result submission.
#[derive(Debug, Clone)]
pub struct SubMatchInput {
    pub team1_player_id: i64,
    pub team2_player_id: i64,
    pub team1_goals: i32,
    pub team2_goals: i32,
}

/// A submitted result. Exactly one of the three shapes is used:
/// a sub-match breakdown, per-team player-goal totals, or plain scores.
#[derive(Debug, Clone, Default)]
pub struct SubmitResultInput {
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub team1_player_goals: Option<i32>,
    pub team2_player_goals: Option<i32>,
    pub sub_matches: Option<Vec<SubMatchInput>>,
}

/// Record a result for one match and mark it completed.
///
/// Raw goals are established first (sub-matches are summed, never scored
/// individually), then the tournament's scoring policy is applied once
/// to the totals. Resubmission overwrites the previous result.
pub async fn submit_result<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    input: SubmitResultInput,
) -> Result<Match, AppError> {
    let m = matches::require_match(conn, match_id).await?;
    let tournament = tournaments::require_tournament(conn, m.tournament_id).await?;
    let system = tournament.scoring_system;

    let (team1_goals, team2_goals) = if let Some(subs) = &input.sub_matches {
        if subs.is_empty() {
            return Err(AppError::bad_request(
                ErrorCode::ValidationError,
                "Sub-match breakdown must not be empty",
            ));
        }
        for sub in subs {
            ensure_non_negative(sub.team1_goals)?;
            ensure_non_negative(sub.team2_goals)?;
        }

        let scores: Vec<SubMatchScore> = subs
            .iter()
            .map(|s| SubMatchScore {
                team1_goals: s.team1_goals as u32,
                team2_goals: s.team2_goals as u32,
            })
            .collect();

        let creates: Vec<SubMatchCreate> = subs
            .iter()
            .enumerate()
            .map(|(idx, s)| SubMatchCreate {
                parent_match_id: match_id,
                match_order: idx as i16 + 1,
                team1_player_id: s.team1_player_id,
                team2_player_id: s.team2_player_id,
                team1_player_goals: s.team1_goals,
                team2_player_goals: s.team2_goals,
            })
            .collect();
        sub_matches::replace_for_match(conn, match_id, creates).await?;

        sum_sub_match_goals(&scores)
    } else if let (Some(g1), Some(g2)) = (input.team1_player_goals, input.team2_player_goals) {
        ensure_non_negative(g1)?;
        ensure_non_negative(g2)?;
        (g1 as u32, g2 as u32)
    } else if let (Some(g1), Some(g2)) = (input.team1_score, input.team2_score) {
        ensure_non_negative(g1)?;
        ensure_non_negative(g2)?;
        (g1 as u32, g2 as u32)
    } else {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "A result needs both scores, both player-goal totals, or a sub-match breakdown",
        ));
    };

    let outcome = compute_match_outcome(system, team1_goals, team2_goals);
    let winner_id = outcome.winner.map(|side| match side {
        Side::Team1 => m.team1_id,
        Side::Team2 => m.team2_id,
    });

    let updated = matches::update_result(
        conn,
        match_id,
        MatchResultUpdate {
            team1_score: outcome.team1_score,
            team2_score: outcome.team2_score,
            team1_player_goals: Some(team1_goals as i32),
            team2_player_goals: Some(team2_goals as i32),
            winner_id,
            status: MatchStatus::Completed,
        },
    )
    .await?;

    info!(
        match_id,
        tournament_id = m.tournament_id,
        team1_goals,
        team2_goals,
        winner_id,
        "Match result recorded"
    );

    Ok(updated)
}

fn ensure_non_negative(goals: i32) -> Result<(), AppError> {
    if goals < 0 {
        return Err(AppError::invalid(
            ErrorCode::NegativeGoals,
            "Goals must be zero or positive",
        ));
    }
    Ok(())
}

//! Standings aggregation: fold completed matches into a ranked table.

use serde::{Deserialize, Serialize};

/// One completed match, reduced to what standings need.
///
/// `goals` are actual goals scored (from player-goal tracking, or the
/// aggregate score when no player data exists); `score` is the value the
/// scoring policy stored for each side (goals under goal-based, match
/// points under win-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMatch {
    pub team1_id: i64,
    pub team2_id: i64,
    pub team1_goals: u32,
    pub team2_goals: u32,
    pub team1_score: i32,
    pub team2_score: i32,
}

/// Aggregate standings row for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: i64,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: i64,
}

impl TeamStanding {
    fn zero(team_id: i64) -> Self {
        Self {
            team_id,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}

/// Fold every completed match into a ranked table.
///
/// Pure and idempotent: same input, same output, nothing mutated.
/// Teams with no completed matches keep an all-zero row. Matches
/// referencing a team not in `team_ids` are skipped rather than
/// aborting the computation.
///
/// Ranking: points desc, then goal difference desc, then goals for
/// desc; the sort is stable so team insertion order breaks remaining
/// ties.
pub fn compute_standings(team_ids: &[i64], played: &[PlayedMatch]) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = team_ids.iter().map(|id| TeamStanding::zero(*id)).collect();

    for m in played {
        let Some(i1) = rows.iter().position(|r| r.team_id == m.team1_id) else {
            continue;
        };
        let Some(i2) = rows.iter().position(|r| r.team_id == m.team2_id) else {
            continue;
        };

        rows[i1].matches_played += 1;
        rows[i2].matches_played += 1;

        rows[i1].goals_for += m.team1_goals;
        rows[i1].goals_against += m.team2_goals;
        rows[i2].goals_for += m.team2_goals;
        rows[i2].goals_against += m.team1_goals;

        rows[i1].points += m.team1_score as i64;
        rows[i2].points += m.team2_score as i64;

        match m.team1_goals.cmp(&m.team2_goals) {
            std::cmp::Ordering::Greater => {
                rows[i1].wins += 1;
                rows[i2].losses += 1;
            }
            std::cmp::Ordering::Less => {
                rows[i2].wins += 1;
                rows[i1].losses += 1;
            }
            std::cmp::Ordering::Equal => {
                rows[i1].draws += 1;
                rows[i2].draws += 1;
            }
        }
    }

    for row in &mut rows {
        row.goal_difference = row.goals_for as i64 - row.goals_against as i64;
    }

    // Vec::sort_by is stable, so insertion order survives full ties
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    rows
}

//! Scoring policy: maps raw match goals to per-team scores and a winner.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Points awarded under win-based scoring.
pub const WIN_POINTS: i32 = 3;
pub const DRAW_POINTS: i32 = 1;

/// Tournament-wide rule converting match goals into team scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringSystem {
    /// Score equals goals scored
    GoalBased,
    /// Winner gets 3, loser 0, draw 1 apiece
    #[default]
    WinBased,
}

impl ScoringSystem {
    /// Parse the stored configuration value. Unknown values are a
    /// configuration error and must be rejected at tournament creation,
    /// never at scoring time.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "goal_based" => Ok(Self::GoalBased),
            "win_based" => Ok(Self::WinBased),
            other => Err(DomainError::config(format!(
                "unknown scoring system: {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalBased => "goal_based",
            Self::WinBased => "win_based",
        }
    }
}

/// Which side of a match something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Team1,
    Team2,
}

/// Result of applying the scoring policy to one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub team1_score: i32,
    pub team2_score: i32,
    /// Side with strictly more goals; `None` on a goal-tie,
    /// regardless of scoring system.
    pub winner: Option<Side>,
}

/// Goals scored in one sub-match (individual player-vs-player matchup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMatchScore {
    pub team1_goals: u32,
    pub team2_goals: u32,
}

/// The side with strictly more goals wins; equal goals is a draw.
pub fn goal_winner(team1_goals: u32, team2_goals: u32) -> Option<Side> {
    match team1_goals.cmp(&team2_goals) {
        std::cmp::Ordering::Greater => Some(Side::Team1),
        std::cmp::Ordering::Less => Some(Side::Team2),
        std::cmp::Ordering::Equal => None,
    }
}

/// Apply the tournament's scoring policy to one match's raw goals.
pub fn compute_match_outcome(
    system: ScoringSystem,
    team1_goals: u32,
    team2_goals: u32,
) -> MatchOutcome {
    let winner = goal_winner(team1_goals, team2_goals);

    let (team1_score, team2_score) = match system {
        ScoringSystem::GoalBased => (team1_goals as i32, team2_goals as i32),
        ScoringSystem::WinBased => match winner {
            Some(Side::Team1) => (WIN_POINTS, 0),
            Some(Side::Team2) => (0, WIN_POINTS),
            None => (DRAW_POINTS, DRAW_POINTS),
        },
    };

    MatchOutcome {
        team1_score,
        team2_score,
        winner,
    }
}

/// Sum each side's goals across a match's sub-matches. The policy is
/// applied once to the sums, not per sub-match.
pub fn sum_sub_match_goals(sub_matches: &[SubMatchScore]) -> (u32, u32) {
    sub_matches.iter().fold((0, 0), |(t1, t2), sm| {
        (t1 + sm.team1_goals, t2 + sm.team2_goals)
    })
}

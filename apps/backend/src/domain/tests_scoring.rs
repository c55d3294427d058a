use super::scoring::{
    compute_match_outcome, goal_winner, sum_sub_match_goals, ScoringSystem, Side, SubMatchScore,
    DRAW_POINTS, WIN_POINTS,
};

#[test]
fn goal_based_score_equals_goals() {
    let outcome = compute_match_outcome(ScoringSystem::GoalBased, 3, 1);
    assert_eq!(outcome.team1_score, 3);
    assert_eq!(outcome.team2_score, 1);
    assert_eq!(outcome.winner, Some(Side::Team1));
}

#[test]
fn win_based_awards_three_and_zero() {
    let outcome = compute_match_outcome(ScoringSystem::WinBased, 3, 1);
    assert_eq!(outcome.team1_score, WIN_POINTS);
    assert_eq!(outcome.team2_score, 0);
    assert_eq!(outcome.winner, Some(Side::Team1));
}

#[test]
fn win_based_draw_awards_one_each() {
    let outcome = compute_match_outcome(ScoringSystem::WinBased, 2, 2);
    assert_eq!(outcome.team1_score, DRAW_POINTS);
    assert_eq!(outcome.team2_score, DRAW_POINTS);
    assert_eq!(outcome.winner, None);
}

#[test]
fn goal_based_draw_has_no_winner() {
    let outcome = compute_match_outcome(ScoringSystem::GoalBased, 2, 2);
    assert_eq!(outcome.team1_score, 2);
    assert_eq!(outcome.team2_score, 2);
    assert_eq!(outcome.winner, None);
}

#[test]
fn winner_needs_strictly_more_goals() {
    assert_eq!(goal_winner(1, 0), Some(Side::Team1));
    assert_eq!(goal_winner(0, 1), Some(Side::Team2));
    assert_eq!(goal_winner(0, 0), None);
    assert_eq!(goal_winner(4, 4), None);
}

#[test]
fn zero_zero_win_based_is_a_draw() {
    let outcome = compute_match_outcome(ScoringSystem::WinBased, 0, 0);
    assert_eq!(outcome.team1_score, DRAW_POINTS);
    assert_eq!(outcome.team2_score, DRAW_POINTS);
    assert_eq!(outcome.winner, None);
}

#[test]
fn sub_match_goals_are_summed_before_scoring() {
    // Team 1 wins two sub-matches narrowly, team 2 wins one big.
    // The totals (3 vs 4) decide the match, not the sub-match tally.
    let subs = [
        SubMatchScore {
            team1_goals: 1,
            team2_goals: 0,
        },
        SubMatchScore {
            team1_goals: 2,
            team2_goals: 1,
        },
        SubMatchScore {
            team1_goals: 0,
            team2_goals: 3,
        },
    ];
    let (t1, t2) = sum_sub_match_goals(&subs);
    assert_eq!((t1, t2), (3, 4));

    let outcome = compute_match_outcome(ScoringSystem::WinBased, t1, t2);
    assert_eq!(outcome.winner, Some(Side::Team2));
    assert_eq!(outcome.team1_score, 0);
    assert_eq!(outcome.team2_score, WIN_POINTS);
}

#[test]
fn empty_sub_match_list_sums_to_zero() {
    assert_eq!(sum_sub_match_goals(&[]), (0, 0));
}

#[test]
fn parse_accepts_known_systems() {
    assert_eq!(
        ScoringSystem::parse("goal_based").unwrap(),
        ScoringSystem::GoalBased
    );
    assert_eq!(
        ScoringSystem::parse("win_based").unwrap(),
        ScoringSystem::WinBased
    );
}

#[test]
fn parse_rejects_unknown_system() {
    let err = ScoringSystem::parse("elo").unwrap_err();
    assert!(err.to_string().contains("unknown scoring system"));
}

use super::standings::{compute_standings, PlayedMatch};

fn played(
    team1_id: i64,
    team2_id: i64,
    goals: (u32, u32),
    scores: (i32, i32),
) -> PlayedMatch {
    PlayedMatch {
        team1_id,
        team2_id,
        team1_goals: goals.0,
        team2_goals: goals.1,
        team1_score: scores.0,
        team2_score: scores.1,
    }
}

#[test]
fn no_matches_yields_zero_rows_in_input_order() {
    let table = compute_standings(&[10, 20, 30], &[]);
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.iter().map(|r| r.team_id).collect::<Vec<_>>(),
        vec![10, 20, 30]
    );
    for row in &table {
        assert_eq!(row.matches_played, 0);
        assert_eq!(row.points, 0);
        assert_eq!(row.goal_difference, 0);
    }
}

#[test]
fn accumulates_wins_draws_losses_and_goals() {
    // Win-based scores: 1 beats 2, draws with 3
    let matches = [
        played(1, 2, (3, 1), (3, 0)),
        played(1, 3, (2, 2), (1, 1)),
    ];
    let table = compute_standings(&[1, 2, 3], &matches);

    let one = table.iter().find(|r| r.team_id == 1).unwrap();
    assert_eq!(one.matches_played, 2);
    assert_eq!(one.wins, 1);
    assert_eq!(one.draws, 1);
    assert_eq!(one.losses, 0);
    assert_eq!(one.goals_for, 5);
    assert_eq!(one.goals_against, 3);
    assert_eq!(one.goal_difference, 2);
    assert_eq!(one.points, 4);

    let two = table.iter().find(|r| r.team_id == 2).unwrap();
    assert_eq!(two.losses, 1);
    assert_eq!(two.points, 0);
}

#[test]
fn orders_by_points_then_goal_difference_then_goals_for() {
    // All three finish on 3 points; goal difference separates A from B,
    // goals-for separates B from C.
    let matches = [
        played(1, 2, (4, 0), (3, 0)), // A +4
        played(2, 3, (3, 1), (3, 0)), // B +2 after the A loss
        played(3, 1, (6, 4), (3, 0)), // C wins big but concedes a lot
    ];
    let table = compute_standings(&[1, 2, 3], &matches);
    let order: Vec<i64> = table.iter().map(|r| r.team_id).collect();

    // A: gd +2; C: gd 0; B: gd -2
    assert_eq!(table[0].points, 3);
    assert_eq!(table[1].points, 3);
    assert_eq!(table[2].points, 3);
    assert_eq!(order, vec![1, 3, 2]);
}

#[test]
fn full_tie_preserves_input_order() {
    let matches = [played(1, 2, (1, 1), (1, 1))];
    let table = compute_standings(&[2, 1], &matches);
    // Identical records, so the input order (2 before 1) stands
    assert_eq!(
        table.iter().map(|r| r.team_id).collect::<Vec<_>>(),
        vec![2, 1]
    );
}

#[test]
fn goal_based_points_are_goals() {
    let matches = [played(1, 2, (3, 1), (3, 1))];
    let table = compute_standings(&[1, 2], &matches);
    assert_eq!(table[0].team_id, 1);
    assert_eq!(table[0].points, 3);
    assert_eq!(table[1].points, 1);
}

#[test]
fn skips_matches_with_unknown_teams() {
    let matches = [
        played(1, 99, (5, 0), (3, 0)),
        played(1, 2, (1, 0), (3, 0)),
    ];
    let table = compute_standings(&[1, 2], &matches);
    let one = table.iter().find(|r| r.team_id == 1).unwrap();
    assert_eq!(one.matches_played, 1);
    assert_eq!(one.goals_for, 1);
    assert_eq!(one.points, 3);
}

#[test]
fn recomputation_is_idempotent() {
    let matches = [
        played(1, 2, (2, 0), (3, 0)),
        played(2, 3, (1, 1), (1, 1)),
        played(3, 1, (0, 4), (0, 3)),
    ];
    let first = compute_standings(&[1, 2, 3], &matches);
    let second = compute_standings(&[1, 2, 3], &matches);
    assert_eq!(first, second);
}

//! End-to-end domain flows: generate fixtures, play rounds, advance the
//! bracket and aggregate standings. Pure (no DB, no HTTP) and deterministic.

use backend::domain::{
    advance_knockout_round, compute_match_outcome, compute_standings, generate_fixtures,
    FixtureConfig, PlayedMatch, RoundResult, RoundSummary, ScoringSystem, TournamentFormat,
};

#[test]
fn knockout_six_teams_to_champion() {
    let teams = vec![1, 2, 3, 4, 5, 6];
    let round1 = generate_fixtures(TournamentFormat::Knockout, &teams, &FixtureConfig::default())
        .expect("fixtures");

    // Bracket size 8 means two byes for the top seeds
    assert_eq!(round1.len(), 2);
    assert_eq!(round1[0].round, 1);
    let playing: Vec<i64> = round1
        .iter()
        .flat_map(|f| [f.team1_id, f.team2_id])
        .collect();
    assert_eq!(playing, vec![3, 4, 5, 6]);

    // Round 1: 3 beats 4, 5 beats 6
    let summary = RoundSummary {
        round: 1,
        total_teams: teams.len(),
        results: vec![
            RoundResult {
                team1_id: 3,
                team2_id: 4,
                winner_id: Some(3),
            },
            RoundResult {
                team1_id: 5,
                team2_id: 6,
                winner_id: Some(5),
            },
        ],
        byes: vec![1, 2],
        next_match_number: 3,
    };
    let round2 = advance_knockout_round(&summary).expect("round 2");

    // Byes re-enter first, then round winners
    assert_eq!(round2.len(), 2);
    assert!(round2.iter().all(|f| f.round_name == "Semi-Final"));
    assert_eq!((round2[0].team1_id, round2[0].team2_id), (1, 2));
    assert_eq!((round2[1].team1_id, round2[1].team2_id), (3, 5));
    assert_eq!(round2[0].match_number, 3);

    // Semi-finals: 1 and 5 win
    let summary = RoundSummary {
        round: 2,
        total_teams: teams.len(),
        results: vec![
            RoundResult {
                team1_id: 1,
                team2_id: 2,
                winner_id: Some(1),
            },
            RoundResult {
                team1_id: 3,
                team2_id: 5,
                winner_id: Some(5),
            },
        ],
        byes: vec![],
        next_match_number: 5,
    };
    let final_round = advance_knockout_round(&summary).expect("final");
    assert_eq!(final_round.len(), 1);
    assert_eq!(final_round[0].round_name, "Final");
    assert_eq!(
        (final_round[0].team1_id, final_round[0].team2_id),
        (1, 5)
    );

    // Once the final is decided there is nothing left to advance
    let summary = RoundSummary {
        round: 3,
        total_teams: teams.len(),
        results: vec![RoundResult {
            team1_id: 1,
            team2_id: 5,
            winner_id: Some(1),
        }],
        byes: vec![],
        next_match_number: 6,
    };
    assert!(advance_knockout_round(&summary).is_err());
}

#[test]
fn round_robin_league_standings() {
    let teams = vec![10, 20, 30];
    let fixtures = generate_fixtures(
        TournamentFormat::RoundRobin,
        &teams,
        &FixtureConfig::default(),
    )
    .expect("fixtures");
    assert_eq!(fixtures.len(), 3);

    // 10 beats 20 2-0, 20 draws 30 1-1, 10 beats 30 3-1
    let results: [(i64, i64, u32, u32); 3] = [(10, 20, 2, 0), (20, 30, 1, 1), (10, 30, 3, 1)];
    let played: Vec<PlayedMatch> = results
        .iter()
        .map(|&(t1, t2, g1, g2)| {
            let outcome = compute_match_outcome(ScoringSystem::WinBased, g1, g2);
            PlayedMatch {
                team1_id: t1,
                team2_id: t2,
                team1_goals: g1,
                team2_goals: g2,
                team1_score: outcome.team1_score,
                team2_score: outcome.team2_score,
            }
        })
        .collect();

    let table = compute_standings(&teams, &played);

    assert_eq!(table[0].team_id, 10);
    assert_eq!(table[0].points, 6);
    assert_eq!(table[0].wins, 2);

    // 20 and 30 both have one point and -2 goal difference; 30 is ahead
    // on goals scored (2 vs 1)
    assert_eq!(table[1].team_id, 30);
    assert_eq!(table[2].team_id, 20);
    assert_eq!(table[1].points, 1);
    assert_eq!(table[2].points, 1);
    assert_eq!(table[1].goal_difference, -2);
    assert_eq!(table[2].goal_difference, -2);
}

#[test]
fn goal_based_league_awards_goals_as_points() {
    let teams = vec![1, 2];
    let outcome = compute_match_outcome(ScoringSystem::GoalBased, 4, 2);
    let played = [PlayedMatch {
        team1_id: 1,
        team2_id: 2,
        team1_goals: 4,
        team2_goals: 2,
        team1_score: outcome.team1_score,
        team2_score: outcome.team2_score,
    }];

    let table = compute_standings(&teams, &played);
    assert_eq!(table[0].team_id, 1);
    assert_eq!(table[0].points, 4);
    assert_eq!(table[1].points, 2);
}

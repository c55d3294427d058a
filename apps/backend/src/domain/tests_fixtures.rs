use super::fixtures::{
    advance_double_elimination, advance_knockout_round, generate_fixtures, next_swiss_round,
    Bracket, FixtureConfig, RoundResult, RoundSummary, TournamentFormat,
};

fn cfg() -> FixtureConfig {
    FixtureConfig::default()
}

fn result(team1_id: i64, team2_id: i64, winner_id: i64) -> RoundResult {
    RoundResult {
        team1_id,
        team2_id,
        winner_id: Some(winner_id),
    }
}

#[test]
fn fewer_than_two_teams_is_rejected() {
    for format in [
        TournamentFormat::RoundRobin,
        TournamentFormat::Knockout,
        TournamentFormat::DoubleElimination,
        TournamentFormat::GroupStage,
        TournamentFormat::Swiss,
    ] {
        assert!(generate_fixtures(format, &[1], &cfg()).is_err());
        assert!(generate_fixtures(format, &[], &cfg()).is_err());
    }
}

#[test]
fn round_robin_pairs_everyone_once() {
    let teams = [1, 2, 3, 4, 5];
    let fixtures = generate_fixtures(TournamentFormat::RoundRobin, &teams, &cfg()).unwrap();
    assert_eq!(fixtures.len(), 10); // n(n-1)/2

    for (idx, f) in fixtures.iter().enumerate() {
        assert_eq!(f.round, 1);
        assert_eq!(f.round_name, "Round Robin");
        assert_eq!(f.match_number, idx as u32 + 1);
        assert_ne!(f.team1_id, f.team2_id);
    }

    // Every unordered pair appears exactly once
    for a in teams {
        for b in teams {
            if a >= b {
                continue;
            }
            let count = fixtures
                .iter()
                .filter(|f| {
                    (f.team1_id == a && f.team2_id == b) || (f.team1_id == b && f.team2_id == a)
                })
                .count();
            assert_eq!(count, 1, "pair ({a},{b}) appeared {count} times");
        }
    }
}

#[test]
fn knockout_power_of_two_has_no_byes() {
    let fixtures = generate_fixtures(TournamentFormat::Knockout, &[1, 2, 3, 4], &cfg()).unwrap();
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0].round_name, "Semi-Final");
    assert_eq!(fixtures[0].team1_id, 1);
    assert_eq!(fixtures[0].team2_id, 2);
    assert_eq!(fixtures[1].team1_id, 3);
    assert_eq!(fixtures[1].team2_id, 4);
}

#[test]
fn knockout_byes_go_to_top_seeds() {
    // 6 entrants: bracket of 8, so the top 2 seeds sit out round 1
    let fixtures =
        generate_fixtures(TournamentFormat::Knockout, &[1, 2, 3, 4, 5, 6], &cfg()).unwrap();
    assert_eq!(fixtures.len(), 2);
    let playing: Vec<i64> = fixtures
        .iter()
        .flat_map(|f| [f.team1_id, f.team2_id])
        .collect();
    assert!(!playing.contains(&1));
    assert!(!playing.contains(&2));
    assert_eq!(playing, vec![3, 4, 5, 6]);
}

#[test]
fn knockout_two_teams_is_the_final() {
    let fixtures = generate_fixtures(TournamentFormat::Knockout, &[1, 2], &cfg()).unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].round_name, "Final");
}

#[test]
fn advance_knockout_pairs_winners_and_byes() {
    // 6 entrants, seeds 1 and 2 had byes; 3 and 5 won their matches
    let summary = RoundSummary {
        round: 1,
        total_teams: 6,
        results: vec![result(3, 4, 3), result(5, 6, 5)],
        byes: vec![1, 2],
        next_match_number: 3,
    };
    let next = advance_knockout_round(&summary).unwrap();
    assert_eq!(next.len(), 2);
    assert_eq!(next[0].round, 2);
    assert_eq!(next[0].round_name, "Semi-Final");
    assert_eq!(next[0].match_number, 3);
    assert_eq!((next[0].team1_id, next[0].team2_id), (1, 2));
    assert_eq!((next[1].team1_id, next[1].team2_id), (3, 5));
}

#[test]
fn advance_four_team_knockout_produces_final() {
    let summary = RoundSummary {
        round: 1,
        total_teams: 4,
        results: vec![result(1, 2, 1), result(3, 4, 4)],
        byes: vec![],
        next_match_number: 3,
    };
    let next = advance_knockout_round(&summary).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].round_name, "Final");
    assert_eq!((next[0].team1_id, next[0].team2_id), (1, 4));
}

#[test]
fn advance_after_final_is_a_state_error() {
    let summary = RoundSummary {
        round: 2,
        total_teams: 4,
        results: vec![result(1, 4, 4)],
        byes: vec![],
        next_match_number: 4,
    };
    let err = advance_knockout_round(&summary).unwrap_err();
    assert!(err.to_string().contains("complete"));
}

#[test]
fn drawn_knockout_result_is_rejected() {
    let summary = RoundSummary {
        round: 1,
        total_teams: 4,
        results: vec![
            RoundResult {
                team1_id: 1,
                team2_id: 2,
                winner_id: None,
            },
            result(3, 4, 3),
        ],
        byes: vec![],
        next_match_number: 3,
    };
    assert!(advance_knockout_round(&summary).is_err());
}

#[test]
fn double_elimination_round_one_is_winners_bracket() {
    let fixtures =
        generate_fixtures(TournamentFormat::DoubleElimination, &[1, 2, 3, 4], &cfg()).unwrap();
    assert_eq!(fixtures.len(), 2);
    for f in &fixtures {
        assert_eq!(f.bracket, Bracket::Winners);
        assert_eq!(f.round_name, "Winners Semi-Final");
    }
}

#[test]
fn double_elimination_pairs_both_brackets() {
    // After round 1 of four teams: 1 and 3 alive in winners, 2 and 4 in losers
    let next = advance_double_elimination(1, &[1, 3], &[2, 4], 4, 3).unwrap();
    assert_eq!(next.len(), 2);

    let wb = &next[0];
    assert_eq!(wb.bracket, Bracket::Winners);
    assert_eq!(wb.round_name, "Winners Final");
    assert_eq!((wb.team1_id, wb.team2_id), (1, 3));
    assert_eq!(wb.match_number, 3);

    let lb = &next[1];
    assert_eq!(lb.bracket, Bracket::Losers);
    assert_eq!(lb.round_name, "Losers Round 2");
    assert_eq!((lb.team1_id, lb.team2_id), (2, 4));
    assert_eq!(lb.match_number, 4);
}

#[test]
fn double_elimination_grand_final() {
    let next = advance_double_elimination(2, &[1], &[4], 4, 5).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].round_name, "Grand Final");
    assert_eq!((next[0].team1_id, next[0].team2_id), (1, 4));
}

#[test]
fn double_elimination_complete_is_a_state_error() {
    assert!(advance_double_elimination(3, &[1], &[], 4, 6).is_err());
}

#[test]
fn double_elimination_upset_grand_final_ends_tournament() {
    // The losers-bracket champion won the grand final, so both finalists
    // carry one loss and nobody is unbeaten. No rematch is scheduled.
    let err = advance_double_elimination(3, &[], &[1, 4], 4, 6).unwrap_err();
    assert!(err.to_string().contains("complete"));
}

#[test]
fn group_stage_is_round_robin_within_groups() {
    let teams: Vec<i64> = (1..=8).collect();
    let fixtures = generate_fixtures(TournamentFormat::GroupStage, &teams, &cfg()).unwrap();
    // Two groups of four, each a 6-match round robin
    assert_eq!(fixtures.len(), 12);
    assert!(fixtures[..6].iter().all(|f| f.round_name == "Group A"));
    assert!(fixtures[6..].iter().all(|f| f.round_name == "Group B"));

    // No cross-group fixtures
    for f in &fixtures[..6] {
        assert!(f.team1_id <= 4 && f.team2_id <= 4);
    }
    for f in &fixtures[6..] {
        assert!(f.team1_id > 4 && f.team2_id > 4);
    }

    // Match numbers run contiguously across groups
    let numbers: Vec<u32> = fixtures.iter().map(|f| f.match_number).collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
}

#[test]
fn group_stage_uneven_split() {
    let teams: Vec<i64> = (1..=6).collect();
    let fixtures = generate_fixtures(TournamentFormat::GroupStage, &teams, &cfg()).unwrap();
    // Group A: 4 teams (6 matches), group B: 2 teams (1 match)
    assert_eq!(fixtures.len(), 7);
    assert_eq!(fixtures[6].round_name, "Group B");
}

#[test]
fn group_names_continue_past_z() {
    let teams: Vec<i64> = (1..=54).collect();
    let config = FixtureConfig {
        group_size: 2,
        ..FixtureConfig::default()
    };
    let fixtures = generate_fixtures(TournamentFormat::GroupStage, &teams, &config).unwrap();
    // 27 groups of two, one match each
    assert_eq!(fixtures.len(), 27);
    assert_eq!(fixtures[0].round_name, "Group A");
    assert_eq!(fixtures[25].round_name, "Group Z");
    assert_eq!(fixtures[26].round_name, "Group AA");
}

#[test]
fn swiss_round_one_pairs_adjacent_seeds() {
    let fixtures =
        generate_fixtures(TournamentFormat::Swiss, &[1, 2, 3, 4, 5, 6], &cfg()).unwrap();
    assert_eq!(fixtures.len(), 3);
    assert_eq!((fixtures[0].team1_id, fixtures[0].team2_id), (1, 2));
    assert_eq!((fixtures[1].team1_id, fixtures[1].team2_id), (3, 4));
    assert_eq!((fixtures[2].team1_id, fixtures[2].team2_id), (5, 6));
    assert!(fixtures.iter().all(|f| f.round_name == "Round 1"));
}

#[test]
fn swiss_next_round_avoids_repeat_pairings() {
    // Standings after round 1: 1, 3, 5 won; order 1,3,5,2,4,6
    let standings = [1, 3, 5, 2, 4, 6];
    let prior = [(1, 2), (3, 4), (5, 6)];
    let next = next_swiss_round(2, &standings, &prior, 4).unwrap();
    assert_eq!(next.len(), 3);
    assert_eq!((next[0].team1_id, next[0].team2_id), (1, 3));
    assert_eq!((next[1].team1_id, next[1].team2_id), (5, 2));
    assert_eq!((next[2].team1_id, next[2].team2_id), (4, 6));
    assert!(next.iter().all(|f| f.round_name == "Round 2"));
    assert_eq!(next[0].match_number, 4);
}

#[test]
fn swiss_falls_back_to_repeat_when_unavoidable() {
    // Two teams who have already met must still be paired
    let next = next_swiss_round(3, &[1, 2], &[(1, 2)], 10).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!((next[0].team1_id, next[0].team2_id), (1, 2));
}

#[test]
fn swiss_odd_count_gives_lowest_rank_the_bye() {
    let next = next_swiss_round(2, &[1, 2, 3, 4, 5], &[], 1).unwrap();
    assert_eq!(next.len(), 2);
    let playing: Vec<i64> = next.iter().flat_map(|f| [f.team1_id, f.team2_id]).collect();
    assert!(!playing.contains(&5));
}

#[test]
fn seeded_shuffle_is_deterministic() {
    let teams: Vec<i64> = (1..=8).collect();
    let seeded = FixtureConfig {
        seed: Some(42),
        ..FixtureConfig::default()
    };
    let a = generate_fixtures(TournamentFormat::RoundRobin, &teams, &seeded).unwrap();
    let b = generate_fixtures(TournamentFormat::RoundRobin, &teams, &seeded).unwrap();
    assert_eq!(a, b);

    let other = FixtureConfig {
        seed: Some(43),
        ..FixtureConfig::default()
    };
    let c = generate_fixtures(TournamentFormat::RoundRobin, &teams, &other).unwrap();
    // Same pair set either way, but a different seed almost certainly
    // orders the bracket differently
    assert_eq!(a.len(), c.len());
}

#[test]
fn no_seed_preserves_input_order() {
    let fixtures = generate_fixtures(TournamentFormat::Knockout, &[9, 7, 5, 3], &cfg()).unwrap();
    assert_eq!((fixtures[0].team1_id, fixtures[0].team2_id), (9, 7));
    assert_eq!((fixtures[1].team1_id, fixtures[1].team2_id), (5, 3));
}

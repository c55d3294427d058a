//! Fixture and bracket generation for every supported tournament format.
//!
//! Round robin and group stages are fully generated up front. Elimination
//! brackets and Swiss rounds can only pre-generate their first round; later
//! rounds are produced from results via the advance functions below.
//!
//! Determinism: given the same participant order, format and config, the
//! output is identical. A shuffle only happens when an explicit seed is
//! supplied, and the same seed always yields the same bracket.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Supported tournament formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    RoundRobin,
    Knockout,
    DoubleElimination,
    GroupStage,
    Swiss,
}

impl TournamentFormat {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value {
            "round_robin" => Ok(Self::RoundRobin),
            "knockout" => Ok(Self::Knockout),
            "double_elimination" => Ok(Self::DoubleElimination),
            "group_stage" => Ok(Self::GroupStage),
            "swiss" => Ok(Self::Swiss),
            other => Err(DomainError::config(format!(
                "unknown tournament format: {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RoundRobin => "round_robin",
            Self::Knockout => "knockout",
            Self::DoubleElimination => "double_elimination",
            Self::GroupStage => "group_stage",
            Self::Swiss => "swiss",
        }
    }
}

/// Which elimination bracket a fixture belongs to. Everything except the
/// double-elimination losers bracket lives in `Winners`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    #[default]
    Winners,
    Losers,
}

/// Generator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Teams per group in a group stage
    pub group_size: usize,
    /// Optional shuffle seed; `None` keeps the given participant order
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            group_size: 4,
            seed: None,
        }
    }
}

/// One generated, not-yet-played match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub round: u32,
    pub round_name: String,
    pub match_number: u32,
    pub bracket: Bracket,
    pub team1_id: i64,
    pub team2_id: i64,
}

/// One completed match fed back into round advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub team1_id: i64,
    pub team2_id: i64,
    pub winner_id: Option<i64>,
}

/// Everything the knockout advance needs to know about the round that
/// just finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The completed round number
    pub round: u32,
    /// Entrant count at round 1, for round naming
    pub total_teams: usize,
    /// Completed results in match order
    pub results: Vec<RoundResult>,
    /// Teams that sat this round out and advance automatically
    pub byes: Vec<i64>,
    pub next_match_number: u32,
}

/// Generate the initial fixture list for a tournament.
///
/// Round robin and group stages return the complete schedule; knockout,
/// double elimination and Swiss return round 1 only.
pub fn generate_fixtures(
    format: TournamentFormat,
    team_ids: &[i64],
    config: &FixtureConfig,
) -> Result<Vec<Fixture>, DomainError> {
    if team_ids.len() < 2 {
        return Err(DomainError::validation(
            "at least two teams are required to generate fixtures",
        ));
    }

    let seeds = seed_order(team_ids, config.seed);

    match format {
        TournamentFormat::RoundRobin => Ok(round_robin(&seeds, 1, "Round Robin", 1)),
        TournamentFormat::Knockout => Ok(elimination_round_one(&seeds, "")),
        TournamentFormat::DoubleElimination => Ok(elimination_round_one(&seeds, "Winners ")),
        TournamentFormat::GroupStage => group_stage(&seeds, config.group_size),
        TournamentFormat::Swiss => Ok(swiss_round(&seeds, 1, 1)),
    }
}

/// Produce the next knockout round from the completed one.
///
/// Fails with a state error if the bracket is already decided, and with a
/// validation error on a drawn result (elimination matches need a
/// decisive score; ties are resolved by submitting a corrected result).
pub fn advance_knockout_round(summary: &RoundSummary) -> Result<Vec<Fixture>, DomainError> {
    let mut advancing: Vec<i64> = summary.byes.clone();
    for result in &summary.results {
        advancing.push(decisive_winner(result)?);
    }

    if advancing.len() < 2 {
        return Err(DomainError::state(
            "bracket is complete; there is no further round to generate",
        ));
    }

    let round = summary.round + 1;
    let name = elimination_round_name(round, total_rounds(summary.total_teams));
    Ok(pair_adjacent(
        &advancing,
        round,
        &name,
        Bracket::Winners,
        summary.next_match_number,
    ))
}

/// Produce the next double-elimination fixtures.
///
/// `alive_winners` are teams with no loss, `alive_losers` teams with
/// exactly one, both in bracket order. Winners-bracket losers drop into
/// the losers bracket; a second loss eliminates. Once each bracket is
/// down to its champion the two meet in a single grand final.
pub fn advance_double_elimination(
    round: u32,
    alive_winners: &[i64],
    alive_losers: &[i64],
    total_teams: usize,
    next_match_number: u32,
) -> Result<Vec<Fixture>, DomainError> {
    // No unbeaten team left means the winners-bracket champion lost the
    // grand final. There is no bracket reset; the losers-bracket champion
    // takes the title and the tournament is over.
    if alive_winners.is_empty() {
        return Err(DomainError::state(
            "tournament is complete; the grand final has been decided",
        ));
    }

    if alive_winners.len() == 1 && alive_losers.is_empty() {
        return Err(DomainError::state(
            "tournament is complete; there is no further round to generate",
        ));
    }

    let next = round + 1;
    let mut fixtures = Vec::new();
    let mut match_number = next_match_number;

    if alive_winners.len() == 1 && alive_losers.len() == 1 {
        fixtures.push(Fixture {
            round: next,
            round_name: "Grand Final".to_string(),
            match_number,
            bracket: Bracket::Winners,
            team1_id: alive_winners[0],
            team2_id: alive_losers[0],
        });
        return Ok(fixtures);
    }

    if alive_winners.len() >= 2 {
        let name = format!(
            "Winners {}",
            elimination_round_name(next, total_rounds(total_teams))
        );
        let wb = pair_adjacent(alive_winners, next, &name, Bracket::Winners, match_number);
        match_number += wb.len() as u32;
        fixtures.extend(wb);
    }

    if alive_losers.len() >= 2 {
        let name = format!("Losers Round {next}");
        fixtures.extend(pair_adjacent(
            alive_losers,
            next,
            &name,
            Bracket::Losers,
            match_number,
        ));
    }

    if fixtures.is_empty() {
        return Err(DomainError::state(
            "no pairable teams remain in either bracket",
        ));
    }

    Ok(fixtures)
}

/// Pair the next Swiss round from the current standings order.
///
/// Greedy top-down pairing: each highest-ranked unpaired team meets the
/// next-ranked unpaired team it has not already played; if every
/// remaining opponent is a repeat, the nearest one is taken anyway. On
/// an odd count the lowest-ranked leftover receives a bye.
pub fn next_swiss_round(
    round: u32,
    standings_order: &[i64],
    prior_pairings: &[(i64, i64)],
    next_match_number: u32,
) -> Result<Vec<Fixture>, DomainError> {
    if standings_order.len() < 2 {
        return Err(DomainError::state(
            "fewer than two teams remain to pair a Swiss round",
        ));
    }

    let already_played = |a: i64, b: i64| {
        prior_pairings
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    };

    let mut used = vec![false; standings_order.len()];
    let mut pairs: Vec<(i64, i64)> = Vec::new();

    for i in 0..standings_order.len() {
        if used[i] {
            continue;
        }
        let a = standings_order[i];

        // Prefer the closest-ranked fresh opponent, fall back to the
        // closest-ranked repeat
        let mut opponent: Option<usize> = None;
        for j in (i + 1)..standings_order.len() {
            if used[j] {
                continue;
            }
            if !already_played(a, standings_order[j]) {
                opponent = Some(j);
                break;
            }
            if opponent.is_none() {
                opponent = Some(j);
            }
        }

        if let Some(j) = opponent {
            used[i] = true;
            used[j] = true;
            pairs.push((a, standings_order[j]));
        }
        // No opponent at all: lowest-ranked leftover takes the bye
    }

    let fixtures = pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (team1_id, team2_id))| Fixture {
            round,
            round_name: format!("Round {round}"),
            match_number: next_match_number + idx as u32,
            bracket: Bracket::Winners,
            team1_id,
            team2_id,
        })
        .collect();

    Ok(fixtures)
}

// ----- helpers -----

fn seed_order(team_ids: &[i64], seed: Option<u64>) -> Vec<i64> {
    let mut seeds = team_ids.to_vec();
    if let Some(seed) = seed {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        seeds.shuffle(&mut rng);
    }
    seeds
}

fn decisive_winner(result: &RoundResult) -> Result<i64, DomainError> {
    match result.winner_id {
        Some(id) if id == result.team1_id || id == result.team2_id => Ok(id),
        Some(id) => Err(DomainError::validation(format!(
            "winner {id} did not play in this match"
        ))),
        None => Err(DomainError::validation(
            "elimination match ended in a draw; a decisive result is required",
        )),
    }
}

/// Rounds needed for an elimination bracket of `n` entrants.
fn total_rounds(n: usize) -> u32 {
    n.max(2).next_power_of_two().trailing_zeros()
}

fn elimination_round_name(round: u32, total_rounds: u32) -> String {
    if total_rounds <= 1 || round == total_rounds {
        "Final".to_string()
    } else if round + 1 == total_rounds {
        "Semi-Final".to_string()
    } else if round + 2 == total_rounds {
        "Quarter-Final".to_string()
    } else if round == 1 {
        "First Round".to_string()
    } else {
        format!("Round {round}")
    }
}

fn round_robin(seeds: &[i64], round: u32, round_name: &str, start_number: u32) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(seeds.len() * (seeds.len() - 1) / 2);
    let mut match_number = start_number;
    for i in 0..seeds.len() {
        for j in (i + 1)..seeds.len() {
            fixtures.push(Fixture {
                round,
                round_name: round_name.to_string(),
                match_number,
                bracket: Bracket::Winners,
                team1_id: seeds[i],
                team2_id: seeds[j],
            });
            match_number += 1;
        }
    }
    fixtures
}

/// Round 1 of an elimination bracket. When the entrant count is not a
/// power of two the top seeds receive byes, which balances the bracket
/// depth for everyone else.
fn elimination_round_one(seeds: &[i64], name_prefix: &str) -> Vec<Fixture> {
    let byes = seeds.len().next_power_of_two() - seeds.len();
    let name = format!(
        "{name_prefix}{}",
        elimination_round_name(1, total_rounds(seeds.len()))
    );
    pair_adjacent(&seeds[byes..], 1, &name, Bracket::Winners, 1)
}

fn pair_adjacent(
    teams: &[i64],
    round: u32,
    round_name: &str,
    bracket: Bracket,
    start_number: u32,
) -> Vec<Fixture> {
    teams
        .chunks_exact(2)
        .enumerate()
        .map(|(idx, pair)| Fixture {
            round,
            round_name: round_name.to_string(),
            match_number: start_number + idx as u32,
            bracket,
            team1_id: pair[0],
            team2_id: pair[1],
        })
        .collect()
}

fn group_stage(seeds: &[i64], group_size: usize) -> Result<Vec<Fixture>, DomainError> {
    if group_size < 2 {
        return Err(DomainError::validation("group size must be at least 2"));
    }

    let mut fixtures = Vec::new();
    let mut match_number = 1;
    for (group_idx, group) in seeds.chunks(group_size).enumerate() {
        let group_name = format!("Group {}", group_label(group_idx));
        if group.len() < 2 {
            continue; // a trailing singleton group has nothing to play
        }
        let group_fixtures = round_robin(group, 1, &group_name, match_number);
        match_number += group_fixtures.len() as u32;
        fixtures.extend(group_fixtures);
    }
    Ok(fixtures)
}

/// Group A, Group B, ... continuing spreadsheet-style (Z, AA, AB, ...)
/// so any group count gets a well-formed name.
fn group_label(idx: usize) -> String {
    let mut n = idx;
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

fn swiss_round(seeds: &[i64], round: u32, start_number: u32) -> Vec<Fixture> {
    let name = format!("Round {round}");
    pair_adjacent(seeds, round, &name, Bracket::Winners, start_number)
}

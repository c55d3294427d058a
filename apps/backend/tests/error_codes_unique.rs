use std::collections::HashSet;

use backend::errors::ErrorCode;

#[test]
fn error_codes_are_unique() {
    let all = [
        // Keep in sync with ErrorCode enum variants
        ErrorCode::ValidationError,
        ErrorCode::NegativeGoals,
        ErrorCode::NotEnoughTeams,
        ErrorCode::InvalidFormat,
        ErrorCode::InvalidScoringSystem,
        ErrorCode::RoundNotComplete,
        ErrorCode::InvalidState,
        ErrorCode::TournamentNotFound,
        ErrorCode::TeamNotFound,
        ErrorCode::PlayerNotFound,
        ErrorCode::MatchNotFound,
        ErrorCode::SubMatchNotFound,
        ErrorCode::NotFound,
        ErrorCode::JerseyNumberTaken,
        ErrorCode::FixturesAlreadyGenerated,
        ErrorCode::Conflict,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::DbTimeout,
        ErrorCode::DataCorruption,
        ErrorCode::ConfigError,
        ErrorCode::InternalError,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
    }
}

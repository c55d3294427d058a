//! Error codes for the tournament backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// General validation error
    ValidationError,
    /// Player goal counts must be non-negative
    NegativeGoals,
    /// Fewer than two participants for fixture generation
    NotEnoughTeams,
    /// Unknown tournament format
    InvalidFormat,
    /// Unknown scoring system
    InvalidScoringSystem,

    // Lifecycle
    /// Round advanced before all its matches completed
    RoundNotComplete,
    /// Operation not valid for the match/tournament state
    InvalidState,

    // Not found
    TournamentNotFound,
    TeamNotFound,
    PlayerNotFound,
    MatchNotFound,
    SubMatchNotFound,
    NotFound,

    // Conflicts
    /// Jersey number already taken within the team
    JerseyNumberTaken,
    /// Fixtures were already generated for this tournament
    FixturesAlreadyGenerated,
    Conflict,

    // Infrastructure
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    ConfigError,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NegativeGoals => "NEGATIVE_GOALS",
            ErrorCode::NotEnoughTeams => "NOT_ENOUGH_TEAMS",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidScoringSystem => "INVALID_SCORING_SYSTEM",
            ErrorCode::RoundNotComplete => "ROUND_NOT_COMPLETE",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::TournamentNotFound => "TOURNAMENT_NOT_FOUND",
            ErrorCode::TeamNotFound => "TEAM_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::MatchNotFound => "MATCH_NOT_FOUND",
            ErrorCode::SubMatchNotFound => "SUB_MATCH_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::JerseyNumberTaken => "JERSEY_NUMBER_TAKEN",
            ErrorCode::FixturesAlreadyGenerated => "FIXTURES_ALREADY_GENERATED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::DbTimeout => "DB_TIMEOUT",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

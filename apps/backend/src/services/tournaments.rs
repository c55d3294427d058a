//! Tournament lifecycle service.

use sea_orm::ConnectionTrait;
use time::Date;
use tracing::info;

use crate::domain::{ScoringSystem, TournamentFormat};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::tournaments::{self, Tournament, TournamentCreate, TournamentUpdate};

/// Input for tournament creation, with the enums still in wire form.
#[derive(Debug, Clone)]
pub struct CreateTournamentInput {
    pub name: String,
    pub sport: Option<String>,
    pub format: String,
    pub scoring_system: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<Date>,
}

/// Create a tournament, rejecting unknown format or scoring system up
/// front. Scoring defaults to win-based when omitted.
pub async fn create_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: CreateTournamentInput,
) -> Result<Tournament, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::ValidationError,
            "Tournament name must not be empty",
        ));
    }

    let (format, scoring_system) = parse_config(&input.format, input.scoring_system.as_deref())?;

    let tournament = tournaments::create_tournament(
        conn,
        TournamentCreate {
            name: input.name,
            sport: input.sport.unwrap_or_else(|| "football".to_string()),
            format: format.into(),
            scoring_system: scoring_system.into(),
            location: input.location,
            start_date: input.start_date,
        },
    )
    .await?;

    info!(
        tournament_id = tournament.id,
        format = format.as_str(),
        scoring_system = scoring_system.as_str(),
        "Tournament created"
    );

    Ok(tournament)
}

/// Resolve the wire-form format and scoring system. A typo here is the
/// client's mistake, so unknown values map to a 400 with a specific
/// code rather than a configuration error.
fn parse_config(
    format: &str,
    scoring_system: Option<&str>,
) -> Result<(TournamentFormat, ScoringSystem), AppError> {
    let format = TournamentFormat::parse(format).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidFormat,
            format!("Unknown tournament format: {format}"),
        )
    })?;
    let scoring_system = match scoring_system {
        Some(raw) => ScoringSystem::parse(raw).map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidScoringSystem,
                format!("Unknown scoring system: {raw}"),
            )
        })?,
        None => ScoringSystem::default(),
    };
    Ok((format, scoring_system))
}

pub async fn get_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<Tournament, AppError> {
    Ok(tournaments::require_tournament(conn, tournament_id).await?)
}

pub async fn list_tournaments<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Tournament>, AppError> {
    Ok(tournaments::list_all(conn).await?)
}

pub async fn update_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
    dto: TournamentUpdate,
) -> Result<Tournament, AppError> {
    // Existence check first so a missing id maps to 404, not a DB error
    tournaments::require_tournament(conn, tournament_id).await?;
    Ok(tournaments::update_tournament(conn, tournament_id, dto).await?)
}

pub async fn delete_tournament<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    tournament_id: i64,
) -> Result<(), AppError> {
    tournaments::require_tournament(conn, tournament_id).await?;
    tournaments::delete_tournament(conn, tournament_id).await?;
    info!(tournament_id, "Tournament deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn unknown_format_is_a_client_error() {
        let err = parse_config("ladder", None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidFormat);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_scoring_system_is_a_client_error() {
        let err = parse_config("knockout", Some("golf")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidScoringSystem);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn scoring_system_defaults_to_win_based() {
        let (format, scoring) = parse_config("swiss", None).unwrap();
        assert_eq!(format, TournamentFormat::Swiss);
        assert_eq!(scoring, ScoringSystem::WinBased);
    }
}

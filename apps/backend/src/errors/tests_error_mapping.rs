// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_config_to_500() {
    let de = DomainError::config("unknown scoring system: chaos_based");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_state_to_409() {
    let de = DomainError::state("round 1 has 2 unfinished matches");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::RoundNotComplete);
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_conflicts() {
    let jersey = DomainError::conflict(ConflictKind::JerseyNumberTaken, "jersey 10 taken");
    let app: AppError = jersey.into();
    assert_eq!(app.code().as_str(), "JERSEY_NUMBER_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let fixtures = DomainError::conflict(
        ConflictKind::FixturesAlreadyGenerated,
        "fixtures already exist",
    );
    let app: AppError = fixtures.into();
    assert_eq!(app.code().as_str(), "FIXTURES_ALREADY_GENERATED");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Tournament, "no tournament");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "TOURNAMENT_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Match, "no match");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "MATCH_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}
